//! Common types and utilities shared across the application.

pub mod error;
pub mod types;

pub use types::{
    AttachmentRef, EmbedField, EmbedPayload, GameBroadcast, InboundMessage, MessagePayload,
    OutboundMessage,
};
