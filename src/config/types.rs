//! Configuration type definitions.

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord: DiscordConfig,
    pub game: GameConfig,
    pub session: SessionConfig,
    pub resources: ResourcesConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
    /// Guild the bridge is scoped to; inbound messages from elsewhere drop.
    pub guild_id: u64,
    /// Channel the bridge relays through (webhook lives here).
    pub channel_id: u64,
}

/// Game world settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// World seed, opaque; only ever substituted into seed-map links.
    pub seed: String,
}

/// Game-session transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Address the bridge listens on for the server-plugin connection.
    pub bind: String,
}

/// Paths to the startup resource tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesConfig {
    /// Identity link table: game UUID -> Discord user ID (JSON object).
    pub links: String,
    /// Player name cache: array of {uuid, name} records.
    pub name_cache: String,
    /// Locale catalog: translation key -> localized string (JSON object).
    pub locale: String,
    /// Colour table: colour name -> hex string (JSON object).
    pub colours: String,
}
