//! Identity link table, player name cache, and cross-identity resolution.
//!
//! The link table maps game player UUIDs to Discord user IDs and is owned
//! by an external process (append-only file); the bridge reads it once at
//! startup and never writes it. A UUID with no entry is a valid,
//! permanently-unlinked state.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// A resolved link between a game player and a Discord user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    /// Game player UUID (dashed string form).
    pub game_uuid: String,
    /// Discord user ID, as a decimal string.
    pub external_id: String,
}

impl PlayerIdentity {
    /// Deterministic avatar URL for this identity.
    ///
    /// With a member avatar asset hash, builds the CDN URL; otherwise falls
    /// back to Discord's default avatar, which is keyed off the user ID.
    pub fn avatar_url(&self, avatar_asset: Option<&str>) -> String {
        match avatar_asset {
            Some(asset) => format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.external_id, asset
            ),
            None => {
                let index = self
                    .external_id
                    .parse::<u64>()
                    .map(|id| (id >> 22) % 6)
                    .unwrap_or(0);
                format!("https://cdn.discordapp.com/embed/avatars/{}.png", index)
            }
        }
    }
}

/// One record of the server's player name cache.
#[derive(Debug, Deserialize)]
struct NameCacheEntry {
    uuid: String,
    name: String,
}

/// UUID <-> Discord-ID <-> display-name resolution over immutable tables.
///
/// All lookups are total functions over optional results; absence is
/// normal, never an error.
#[derive(Debug, Default)]
pub struct IdentityLinker {
    /// Game UUID -> Discord user ID.
    links: HashMap<String, String>,
    /// Discord user ID -> game UUID, built from `links` at construction.
    reverse: HashMap<String, String>,
    /// Game UUID -> last-known display name.
    names: HashMap<String, String>,
}

impl IdentityLinker {
    /// Build a linker from already-parsed tables.
    pub fn new(links: HashMap<String, String>, names: HashMap<String, String>) -> Self {
        let reverse = links
            .iter()
            .map(|(uuid, discord_id)| (discord_id.clone(), uuid.clone()))
            .collect();
        Self {
            links,
            reverse,
            names,
        }
    }

    /// Load the link table and name cache from disk.
    ///
    /// A missing or unreadable file degrades to an empty table with a
    /// warning; an unlinked world is a valid state.
    pub fn load(links_path: impl AsRef<Path>, cache_path: impl AsRef<Path>) -> Self {
        Self::new(
            load_link_table(links_path.as_ref()),
            load_name_cache(cache_path.as_ref()),
        )
    }

    /// Look up the Discord identity linked to a game player.
    pub fn resolve_external_identity(&self, game_uuid: &str) -> Option<PlayerIdentity> {
        self.links
            .get(game_uuid)
            .map(|external_id| PlayerIdentity {
                game_uuid: game_uuid.to_string(),
                external_id: external_id.clone(),
            })
    }

    /// Reverse lookup: Discord user ID to last-known game display name.
    ///
    /// Returns `None` if the ID is not linked to any UUID or the UUID has
    /// no cached name.
    pub fn resolve_game_display_name(&self, external_id: &str) -> Option<&str> {
        let uuid = self.reverse.get(external_id)?;
        self.names.get(uuid).map(String::as_str)
    }
}

fn load_link_table(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        warn!("Identity link table {} not found - no players are linked", path.display());
        return HashMap::new();
    }
    match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(map) => map,
        Err(e) => {
            warn!("Failed to load identity link table {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}

fn load_name_cache(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        warn!("Name cache {} not found - inbound attribution will drop", path.display());
        return HashMap::new();
    }
    match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            serde_json::from_str::<Vec<NameCacheEntry>>(&text).map_err(|e| e.to_string())
        }) {
        Ok(entries) => entries.into_iter().map(|e| (e.uuid, e.name)).collect(),
        Err(e) => {
            warn!("Failed to load name cache {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}
