//! Herald - Discord-Minecraft chat bridge
//!
//! A sidecar that relays chat and presence events between a Minecraft
//! server and a Discord guild channel, with identity-aware attribution
//! in both directions.

mod bridge;
mod common;
mod config;
mod discord;
mod game;
mod resources;
mod session;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};

use bridge::ChannelBundle;
use config::{env::get_config_path, load_and_validate};
use resources::Resources;
use session::SessionListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Herald v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please ensure {} exists and is properly formatted.", config_path);
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  Guild: {}", config.discord.guild_id);
    info!("  Channel: {}", config.discord.channel_id);
    info!("  Session bind: {}", config.session.bind);

    // Load the resource tables once; they are read-only from here on.
    let resources = Resources::load(&config.resources).map_err(|e| {
        error!("Failed to load resource tables: {}", e);
        e
    })?;

    // ============================================================
    // Wire the two halves together
    // ============================================================

    let channels = ChannelBundle::new();

    let mut client = discord::build_client(
        &config,
        resources,
        channels.discord.events_rx,
        channels.discord.broadcast_tx,
    )
    .await?;

    let listener = SessionListener::new(
        config.session.bind.clone(),
        channels.game.events_tx,
        channels.game.broadcast_rx,
    );

    info!("Starting Discord client...");
    let mut discord_task = tokio::spawn(async move {
        if let Err(e) = client.start().await {
            error!("Discord client error: {:?}", e);
        }
    });

    info!("Starting game session listener...");
    let mut session_task = tokio::spawn(async move {
        if let Err(e) = listener.run().await {
            error!("Game session listener error: {}", e);
        }
    });

    // ============================================================
    // Run until one side dies or we are told to stop
    // ============================================================

    tokio::select! {
        biased;
        _ = shutdown_signal() => {
            info!("Shutdown signal received - closing game session...");
        }
        _ = &mut discord_task => {
            error!("Discord client exited unexpectedly");
        }
        _ = &mut session_task => {
            error!("Game session listener exited unexpectedly");
        }
    }

    // Dropping the session listener closes the game-event channel, which
    // lets the forwarding task post its shutdown notice to Discord.
    session_task.abort();
    // Give the forwarding task a moment to post the shutdown notice.
    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
    discord_task.abort();

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
