//! Discord event handling.
//!
//! Receives inbound gateway messages and routes them toward the game
//! session; on ready, resolves the delivery webhook and spawns the
//! game -> Discord forwarding task.

use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::common::types::{AttachmentRef, GameBroadcast, InboundMessage, MessagePayload, OutboundMessage};
use crate::config::types::Config;
use crate::discord::directory::CacheMemberDirectory;
use crate::discord::router::InboundRouter;
use crate::discord::webhook::WebhookDelivery;
use crate::game::events::GameEvent;
use crate::game::translator::{EventTranslator, SYSTEM_SENDER};
use crate::resources::Resources;

/// Discord event handler for the bridge.
pub struct BridgeHandler {
    config: Config,
    resources: Resources,
    router: InboundRouter,
    /// Receiver for game events, taken by the forwarding task at ready.
    game_rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<GameEvent>>>>,
    /// Sender for broadcasts into the game session.
    broadcast_tx: mpsc::UnboundedSender<GameBroadcast>,
}

impl BridgeHandler {
    pub fn new(
        config: Config,
        resources: Resources,
        game_rx: mpsc::UnboundedReceiver<GameEvent>,
        broadcast_tx: mpsc::UnboundedSender<GameBroadcast>,
    ) -> Self {
        let router = InboundRouter::new(
            config.discord.guild_id,
            config.discord.channel_id,
            resources.linker.clone(),
        );
        Self {
            config,
            resources,
            router,
            game_rx: Arc::new(Mutex::new(Some(game_rx))),
            broadcast_tx,
        }
    }
}

#[async_trait]
impl EventHandler for BridgeHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Our own posts (and all other bots) are dropped by the router's
        // bot check; skipping self early just saves the conversion.
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }

        let inbound = InboundMessage {
            guild_id: msg.guild_id.map(|id| id.get()),
            channel_id: msg.channel_id.get(),
            author_id: msg.author.id.get().to_string(),
            author_is_bot: msg.author.bot,
            content: msg.content.clone(),
            attachments: msg
                .attachments
                .iter()
                .map(|attachment| AttachmentRef {
                    file_name: attachment.filename.clone(),
                    url: attachment.url.clone(),
                })
                .collect(),
        };

        for broadcast in self.router.route(&inbound) {
            info!("Discord -> Game: {}", broadcast.text);
            if let Err(e) = self.broadcast_tx.send(broadcast) {
                error!("Failed to hand broadcast to game session: {}", e);
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);

        let mut game_rx = match self.game_rx.lock().await.take() {
            Some(rx) => rx,
            None => {
                debug!("Forwarding task already running (gateway reconnect)");
                return;
            }
        };

        let channel_id = ChannelId::new(self.config.discord.channel_id);
        let delivery = match WebhookDelivery::resolve(ctx.http.clone(), channel_id).await {
            Ok(delivery) => delivery,
            Err(e) => {
                error!("Failed to resolve delivery webhook: {}", e);
                return;
            }
        };

        let system_avatar_url = ready
            .user
            .avatar_url()
            .unwrap_or_else(|| ready.user.default_avatar_url());

        let directory =
            CacheMemberDirectory::new(ctx.cache.clone(), self.config.discord.guild_id);
        let translator = EventTranslator::new(
            self.resources.clone(),
            Arc::new(directory),
            system_avatar_url.clone(),
            self.config.game.seed.clone(),
        );

        tokio::spawn(async move {
            while let Some(event) = game_rx.recv().await {
                debug!("Game event: {:?}", event);
                match translator.translate(&event) {
                    Some(message) => {
                        if let Err(e) = delivery.deliver(&message).await {
                            error!("Failed to deliver to Discord: {}", e);
                        }
                    }
                    None => debug!("Event suppressed"),
                }
            }

            // Event channel closed: the bridge is shutting down.
            let farewell = OutboundMessage {
                sender_name: SYSTEM_SENDER.to_string(),
                avatar_url: system_avatar_url,
                payload: MessagePayload::Text("Server is restarting".to_string()),
            };
            if let Err(e) = delivery.deliver(&farewell).await {
                error!("Failed to deliver shutdown notice: {}", e);
            }
            info!("Game -> Discord forwarding task ended");
        });
    }
}
