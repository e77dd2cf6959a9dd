//! Game event values.
//!
//! Each event arriving from the game session is a discrete immutable
//! value pushed through the bridge; no session state is shared across
//! events.

use crate::game::text::TextValue;

/// The player an event concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    /// Player UUID (dashed string form).
    pub uuid: String,
    /// Raw in-game name.
    pub name: String,
}

/// A game event the bridge translates.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A chat message, already rendered to plain text by the engine.
    Chat { player: PlayerRef, message: String },
    /// A player joined the session.
    Join { player: PlayerRef },
    /// A player left the session.
    Leave { player: PlayerRef },
    /// A player completed an advancement with a visible display.
    Advancement {
        player: PlayerRef,
        title: TextValue,
        description: TextValue,
    },
    /// A player died; the engine may omit the death text entirely.
    Death { message: Option<TextValue> },
}
