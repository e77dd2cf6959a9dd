//! Inbound message routing.
//!
//! Filters inbound Discord messages by origin, resolves the author to a
//! game display name, and emits formatted broadcast lines for the game
//! session. Pure over the immutable link tables; the transport hand-off
//! happens at the caller.

use std::sync::Arc;

use tracing::debug;

use crate::common::types::{GameBroadcast, InboundMessage};
use crate::resources::IdentityLinker;

/// Routes inbound Discord messages into game broadcasts.
pub struct InboundRouter {
    /// Guild the bridge is scoped to.
    guild_id: u64,
    /// Channel the bridge relays.
    channel_id: u64,
    linker: Arc<IdentityLinker>,
}

impl InboundRouter {
    pub fn new(guild_id: u64, channel_id: u64, linker: Arc<IdentityLinker>) -> Self {
        Self {
            guild_id,
            channel_id,
            linker,
        }
    }

    /// Compute the broadcast lines for one inbound message.
    ///
    /// An empty result is a drop: wrong origin, bot author (including our
    /// own webhook posts), an unlinked sender, or nothing to say.
    pub fn route(&self, message: &InboundMessage) -> Vec<GameBroadcast> {
        if message.author_is_bot {
            return Vec::new();
        }
        if message.guild_id != Some(self.guild_id) || message.channel_id != self.channel_id {
            return Vec::new();
        }

        // An unlinked sender cannot be attributed in-game; drop quietly.
        let display_name = match self.linker.resolve_game_display_name(&message.author_id) {
            Some(name) => name,
            None => {
                debug!(
                    "Dropping message from unlinked Discord user {}",
                    message.author_id
                );
                return Vec::new();
            }
        };

        let mut broadcasts = Vec::new();
        for attachment in &message.attachments {
            broadcasts.push(GameBroadcast {
                text: format!("<{}> [{}]", display_name, attachment.file_name),
                link: Some(attachment.url.clone()),
            });
        }
        if !message.content.is_empty() {
            broadcasts.push(GameBroadcast::text(format!(
                "<{}> {}",
                display_name, message.content
            )));
        }

        broadcasts
    }
}
