//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    // Validate Discord config
    if config.discord.token.is_empty() {
        errors.push("discord.token is required".to_string());
    }
    if config.discord.token == "YOUR_DISCORD_TOKEN_HERE" {
        errors.push("discord.token has not been configured (still using placeholder)".to_string());
    }
    if config.discord.guild_id == 0 {
        errors.push("discord.guild_id must be non-zero".to_string());
    }
    if config.discord.channel_id == 0 {
        errors.push("discord.channel_id must be non-zero".to_string());
    }

    // Validate session config
    if config.session.bind.is_empty() {
        errors.push("session.bind is required".to_string());
    } else if config.session.bind.parse::<std::net::SocketAddr>().is_err() {
        errors.push(format!(
            "session.bind '{}' is not a valid socket address",
            config.session.bind
        ));
    }

    // Validate resource paths
    let paths = [
        ("resources.links", &config.resources.links),
        ("resources.name_cache", &config.resources.name_cache),
        ("resources.locale", &config.resources.locale),
        ("resources.colours", &config.resources.colours),
    ];
    for (field, path) in paths {
        if path.is_empty() {
            errors.push(format!("{} is required", field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

/// Load a config file, apply environment overrides, and validate it.
pub fn load_and_validate(path: &str) -> Result<Config, ConfigError> {
    let config = crate::config::parser::load_config(path)?;
    let config = crate::config::env::apply_env_overrides(config);
    validate_config(&config)?;
    Ok(config)
}
