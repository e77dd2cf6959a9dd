//! Game-session socket listener.
//!
//! The server-side plugin connects to this socket and streams game events
//! in; broadcast lines flow back out on the same connection. One session
//! at a time: the hosting server is a single process.

use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, info, warn};

use crate::common::error::SessionError;
use crate::common::types::GameBroadcast;
use crate::game::events::GameEvent;
use crate::session::wire;
use tokio::sync::mpsc;

/// Accepts and serves the game-session connection.
pub struct SessionListener {
    bind_addr: String,
    events_tx: mpsc::UnboundedSender<GameEvent>,
    broadcast_rx: mpsc::UnboundedReceiver<GameBroadcast>,
}

impl SessionListener {
    pub fn new(
        bind_addr: String,
        events_tx: mpsc::UnboundedSender<GameEvent>,
        broadcast_rx: mpsc::UnboundedReceiver<GameBroadcast>,
    ) -> Self {
        Self {
            bind_addr,
            events_tx,
            broadcast_rx,
        }
    }

    /// Run the accept loop until the process shuts down.
    pub async fn run(mut self) -> Result<(), SessionError> {
        let listener =
            TcpListener::bind(&self.bind_addr)
                .await
                .map_err(|source| SessionError::BindFailed {
                    addr: self.bind_addr.clone(),
                    source,
                })?;
        info!("Game session listener on {}", self.bind_addr);

        loop {
            let (stream, peer) = listener.accept().await?;
            info!("Game session connected from {}", peer);

            // Broadcasts are fire-and-forget; anything that piled up while
            // no session was connected is stale, not a backlog.
            let mut dropped = 0usize;
            while self.broadcast_rx.try_recv().is_ok() {
                dropped += 1;
            }
            if dropped > 0 {
                debug!("Dropped {} broadcasts queued while disconnected", dropped);
            }

            match self.serve(stream).await {
                Ok(()) => info!("Game session disconnected"),
                Err(e) => warn!("Game session ended with error: {}", e),
            }
        }
    }

    /// Pump one connection: event lines in, broadcast lines out.
    async fn serve(&mut self, stream: TcpStream) -> Result<(), SessionError> {
        let mut framed = Framed::new(stream, LinesCodec::new());

        loop {
            tokio::select! {
                line = framed.next() => {
                    match line {
                        Some(Ok(line)) => self.handle_line(&line),
                        Some(Err(e)) => {
                            return Err(SessionError::Io(std::io::Error::new(
                                std::io::ErrorKind::InvalidData,
                                e.to_string(),
                            )));
                        }
                        None => return Ok(()),
                    }
                }
                broadcast = self.broadcast_rx.recv() => {
                    match broadcast {
                        Some(broadcast) => {
                            match wire::encode_broadcast(&broadcast) {
                                Ok(json) => {
                                    framed.send(json).await.map_err(|e| {
                                        SessionError::Io(std::io::Error::new(
                                            std::io::ErrorKind::BrokenPipe,
                                            e.to_string(),
                                        ))
                                    })?;
                                }
                                Err(e) => warn!("Failed to encode broadcast: {}", e),
                            }
                        }
                        // Discord side is gone; the process is shutting down.
                        None => return Ok(()),
                    }
                }
            }
        }
    }

    fn handle_line(&self, line: &str) {
        match wire::decode_event(line) {
            Ok(event) => {
                if self.events_tx.send(event).is_err() {
                    warn!("Game event receiver closed; dropping event");
                }
            }
            Err(e) => warn!("Ignoring malformed game event line: {}", e),
        }
    }
}
