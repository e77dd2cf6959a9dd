//! Discord client setup.

use serenity::prelude::*;
use tokio::sync::mpsc;

use crate::common::types::GameBroadcast;
use crate::config::types::Config;
use crate::discord::handler::BridgeHandler;
use crate::game::events::GameEvent;
use crate::resources::Resources;

/// Build the Discord client with the bridge handler attached.
///
/// Member data is needed for display names and avatars, message content
/// for relaying; hence the privileged intents.
pub async fn build_client(
    config: &Config,
    resources: Resources,
    game_rx: mpsc::UnboundedReceiver<GameEvent>,
    broadcast_tx: mpsc::UnboundedSender<GameBroadcast>,
) -> Result<Client, serenity::Error> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = BridgeHandler::new(config.clone(), resources, game_rx, broadcast_tx);

    Client::builder(&config.discord.token, intents)
        .event_handler(handler)
        .await
}
