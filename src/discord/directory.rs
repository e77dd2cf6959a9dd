//! Member directory backed by the gateway cache.

use std::sync::Arc;

use serenity::cache::Cache;
use serenity::model::id::{GuildId, UserId};

use crate::game::translator::{MemberDirectory, MemberProfile};

/// Looks up member profiles in the serenity guild-member cache.
///
/// Requires the GUILD_MEMBERS intent so the cache is populated; a member
/// missing from the cache simply resolves to no profile and the caller
/// degrades to the raw player name.
pub struct CacheMemberDirectory {
    cache: Arc<Cache>,
    guild_id: GuildId,
}

impl CacheMemberDirectory {
    pub fn new(cache: Arc<Cache>, guild_id: u64) -> Self {
        Self {
            cache,
            guild_id: GuildId::new(guild_id),
        }
    }
}

impl MemberDirectory for CacheMemberDirectory {
    fn profile(&self, external_id: &str) -> Option<MemberProfile> {
        let id = external_id.parse::<u64>().ok().filter(|id| *id != 0)?;
        let guild = self.cache.guild(self.guild_id)?;
        let member = guild.members.get(&UserId::new(id))?;

        Some(MemberProfile {
            display_name: member.display_name().to_string(),
            avatar_asset: member.user.avatar.as_ref().map(|hash| hash.to_string()),
        })
    }
}
