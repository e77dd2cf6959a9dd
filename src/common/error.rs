//! Error types for the application.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Discord error: {0}")]
    Discord(#[from] DiscordError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Errors loading the startup resource tables.
///
/// Only the locale catalog and colour table are fatal at startup; the
/// identity link table and name cache degrade to empty tables at the
/// call site.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Failed to read resource file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resource file '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid colour value '{value}' for '{name}'")]
    InvalidColor { name: String, value: String },
}

/// Discord-related errors.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum DiscordError {
    #[error("Channel not found: {channel_id}")]
    ChannelNotFound { channel_id: u64 },

    #[error("Webhook setup failed: {message}")]
    WebhookSetup { message: String },

    #[error("Failed to send message: {message}")]
    SendFailed { message: String },

    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

/// Game-session transport errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to bind game session listener on {addr}: {source}")]
    BindFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError.
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, AppError>;
