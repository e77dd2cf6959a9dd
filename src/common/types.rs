//! Canonical message types for bridge communication.
//!
//! This module defines the single source of truth for message types
//! exchanged between the game session and the Discord side.

/// A message bound for Discord, ready for webhook delivery.
///
/// Constructed per event by the translator and handed straight to the
/// delivery task; never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    /// Webhook username override for this message.
    pub sender_name: String,
    /// Webhook avatar override for this message.
    pub avatar_url: String,
    /// Plain text or rich embed payload.
    pub payload: MessagePayload,
}

/// The body of an outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePayload {
    /// Plain text content.
    Text(String),
    /// Rich embed content.
    Embed(EmbedPayload),
}

/// A rich embed: title, description, labeled fields, footer, accent colour.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedPayload {
    pub title: String,
    pub description: String,
    pub fields: Vec<EmbedField>,
    pub footer: String,
    /// 24-bit RGB accent colour.
    pub color: u32,
}

/// A single labeled embed field.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub label: String,
    pub value: String,
    pub inline: bool,
}

/// A formatted line to broadcast to all players in the game session.
///
/// The optional link is attached to the bracketed segment of the text by
/// the game-side transport (a chat click action); the bridge itself only
/// carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameBroadcast {
    pub text: String,
    pub link: Option<String>,
}

impl GameBroadcast {
    /// A plain broadcast line with no click action.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }
}

/// An inbound Discord message as seen by the router.
///
/// Flattened from the gateway event: content, attachments, author metadata,
/// and origin identifiers for filtering.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Origin guild, if the message came from one.
    pub guild_id: Option<u64>,
    /// Origin channel.
    pub channel_id: u64,
    /// Author's Discord user ID, as a decimal string.
    pub author_id: String,
    /// Whether the author is a bot (includes our own webhook posts).
    pub author_is_bot: bool,
    /// Message text body (may be empty for attachment-only messages).
    pub content: String,
    /// Attachments, in upload order.
    pub attachments: Vec<AttachmentRef>,
}

/// A reference to an uploaded attachment.
#[derive(Debug, Clone)]
pub struct AttachmentRef {
    pub file_name: String,
    pub url: String,
}
