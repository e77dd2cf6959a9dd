//! Outbound webhook delivery.
//!
//! Every outbound message goes through a channel webhook so the sender
//! name and avatar can be overridden per message. The first webhook on
//! the configured channel is reused; one is created if none exists.

use std::sync::Arc;

use serenity::builder::{
    CreateAllowedMentions, CreateEmbed, CreateEmbedFooter, CreateWebhook, ExecuteWebhook,
};
use serenity::http::Http;
use serenity::model::colour::Colour;
use serenity::model::id::ChannelId;
use serenity::model::webhook::Webhook;
use tracing::info;

use crate::common::error::DiscordError;
use crate::common::types::{EmbedPayload, MessagePayload, OutboundMessage};

/// Name given to the webhook if the bridge has to create one.
const WEBHOOK_NAME: &str = "Herald Bridge";

/// Executes outbound messages against the bridge channel's webhook.
pub struct WebhookDelivery {
    http: Arc<Http>,
    webhook: Webhook,
}

impl WebhookDelivery {
    /// Reuse the channel's first webhook, or create one.
    pub async fn resolve(http: Arc<Http>, channel_id: ChannelId) -> Result<Self, DiscordError> {
        let webhooks = channel_id.webhooks(&http).await?;
        let webhook = match webhooks.into_iter().next() {
            Some(webhook) => webhook,
            None => {
                info!("No webhook on channel {}, creating one", channel_id);
                channel_id
                    .create_webhook(&http, CreateWebhook::new(WEBHOOK_NAME))
                    .await?
            }
        };

        Ok(Self { http, webhook })
    }

    /// Deliver one message. Failures are the caller's to log; nothing is
    /// retried.
    pub async fn deliver(&self, message: &OutboundMessage) -> Result<(), DiscordError> {
        // Empty allowed-mentions: inline <@id> references render but never ping.
        let mut builder = ExecuteWebhook::new()
            .username(message.sender_name.clone())
            .avatar_url(message.avatar_url.clone())
            .allowed_mentions(CreateAllowedMentions::new());

        builder = match &message.payload {
            MessagePayload::Text(body) => builder.content(body.clone()),
            MessagePayload::Embed(embed) => builder.embed(build_embed(embed)),
        };

        self.webhook.execute(&self.http, false, builder).await?;
        Ok(())
    }
}

fn build_embed(embed: &EmbedPayload) -> CreateEmbed {
    CreateEmbed::new()
        .title(embed.title.clone())
        .description(embed.description.clone())
        .fields(
            embed
                .fields
                .iter()
                .map(|field| (field.label.clone(), field.value.clone(), field.inline)),
        )
        .footer(CreateEmbedFooter::new(embed.footer.clone()))
        .colour(Colour::new(embed.color))
}
