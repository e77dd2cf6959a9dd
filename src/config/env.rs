//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `HERALD_DISCORD_TOKEN` - Discord bot token
//! - `HERALD_DISCORD_GUILD_ID` - Discord guild ID
//! - `HERALD_DISCORD_CHANNEL_ID` - Discord channel ID
//! - `HERALD_SESSION_BIND` - Game session listener address

use std::env;

use crate::config::types::Config;

/// Environment variable prefix for all config overrides.
const ENV_PREFIX: &str = "HERALD";

/// Apply environment variable overrides to a config.
///
/// This allows sensitive values like the bot token to be provided via
/// environment variables instead of the config file.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(token) = env::var(format!("{}_DISCORD_TOKEN", ENV_PREFIX)) {
        config.discord.token = token;
    }
    if let Ok(guild_id) = env::var(format!("{}_DISCORD_GUILD_ID", ENV_PREFIX)) {
        if let Ok(id) = guild_id.parse() {
            config.discord.guild_id = id;
        }
    }
    if let Ok(channel_id) = env::var(format!("{}_DISCORD_CHANNEL_ID", ENV_PREFIX)) {
        if let Ok(id) = channel_id.parse() {
            config.discord.channel_id = id;
        }
    }
    if let Ok(bind) = env::var(format!("{}_SESSION_BIND", ENV_PREFIX)) {
        config.session.bind = bind;
    }

    config
}

/// Get the config file path from environment or use default.
///
/// Checks `HERALD_CONFIG`, otherwise returns "herald.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "herald.conf".to_string())
}
