//! Bridge channel management.
//!
//! Groups the communication channels between the game-session transport
//! and the Discord side. Channels are the only coupling between the two
//! halves; neither ever holds a handle to the other's client.

use tokio::sync::mpsc;

use crate::common::types::GameBroadcast;
use crate::game::events::GameEvent;

/// Channel endpoints owned by the game-session transport.
pub struct GameSideChannels {
    /// Sender for game events arriving from the server plugin.
    pub events_tx: mpsc::UnboundedSender<GameEvent>,
    /// Receiver for broadcasts bound for the game session.
    pub broadcast_rx: mpsc::UnboundedReceiver<GameBroadcast>,
}

/// Channel endpoints owned by the Discord side.
pub struct DiscordSideChannels {
    /// Receiver for game events (the forwarding task listens here).
    pub events_rx: mpsc::UnboundedReceiver<GameEvent>,
    /// Sender for broadcasts into the game session.
    pub broadcast_tx: mpsc::UnboundedSender<GameBroadcast>,
}

/// Bundle of all channels created by the bridge.
pub struct ChannelBundle {
    pub game: GameSideChannels,
    pub discord: DiscordSideChannels,
}

impl ChannelBundle {
    /// Create the full set of bridge channels.
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

        Self {
            game: GameSideChannels {
                events_tx,
                broadcast_rx,
            },
            discord: DiscordSideChannels {
                events_rx,
                broadcast_tx,
            },
        }
    }
}

impl Default for ChannelBundle {
    fn default() -> Self {
        Self::new()
    }
}
