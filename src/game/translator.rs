//! Game event translation.
//!
//! Maps each game event to at most one outbound Discord message. The
//! translator is stateless across events: it reads the immutable resource
//! tables, consults the member directory, and produces a value. Events it
//! cannot render meaningfully are suppressed, never errored.

use std::sync::Arc;

use crate::common::types::{EmbedField, EmbedPayload, MessagePayload, OutboundMessage};
use crate::game::events::{GameEvent, PlayerRef};
use crate::game::text::{FormatStripper, TextValue};
use crate::game::waypoint::{Waypoint, WAYPOINT_PREFIX};
use crate::resources::Resources;

/// Sender name used for presence, death, and advancement messages.
pub const SYSTEM_SENDER: &str = "System";

/// Head-render service used for unlinked players' avatars.
const HEAD_RENDER_URL: &str = "https://mc-heads.net/avatar/";

/// Member display data looked up from the platform session.
#[derive(Debug, Clone)]
pub struct MemberProfile {
    /// Effective display name (nickname, global name, or username).
    pub display_name: String,
    /// Avatar asset hash, if the member has a custom avatar.
    pub avatar_asset: Option<String>,
}

/// Capability: look up the live profile of a Discord member by user ID.
///
/// Implemented over the gateway member cache in production and over a
/// plain map in tests; the translator never sees the client itself.
pub trait MemberDirectory: Send + Sync {
    fn profile(&self, external_id: &str) -> Option<MemberProfile>;
}

/// Translates game events into outbound Discord messages.
pub struct EventTranslator {
    resources: Resources,
    directory: Arc<dyn MemberDirectory>,
    stripper: FormatStripper,
    /// Avatar of the bridge's own bot user, used for the System sender.
    system_avatar_url: String,
    /// Opaque world seed, substituted into seed-map links.
    world_seed: String,
}

impl EventTranslator {
    pub fn new(
        resources: Resources,
        directory: Arc<dyn MemberDirectory>,
        system_avatar_url: String,
        world_seed: String,
    ) -> Self {
        Self {
            resources,
            directory,
            stripper: FormatStripper::new(),
            system_avatar_url,
            world_seed,
        }
    }

    /// Translate one event, or return `None` to suppress it.
    pub fn translate(&self, event: &GameEvent) -> Option<OutboundMessage> {
        match event {
            GameEvent::Chat { player, message } => Some(self.translate_chat(player, message)),
            GameEvent::Join { player } => {
                Some(self.presence_message(player, " has joined the game"))
            }
            GameEvent::Leave { player } => {
                Some(self.presence_message(player, " has left the game"))
            }
            GameEvent::Advancement {
                player,
                title,
                description,
            } => self.translate_advancement(player, title, description),
            GameEvent::Death { message } => self.translate_death(message.as_ref()),
        }
    }

    fn translate_chat(&self, player: &PlayerRef, message: &str) -> OutboundMessage {
        let (sender_name, avatar_url) = self.sender_identity(player);

        let payload = if message.starts_with(WAYPOINT_PREFIX) {
            match Waypoint::parse(message) {
                Some(waypoint) => MessagePayload::Embed(self.waypoint_embed(&waypoint, message)),
                None => MessagePayload::Text("Invalid waypoint format".to_string()),
            }
        } else {
            MessagePayload::Text(message.to_string())
        };

        OutboundMessage {
            sender_name,
            avatar_url,
            payload,
        }
    }

    fn waypoint_embed(&self, waypoint: &Waypoint, raw: &str) -> EmbedPayload {
        let link = waypoint.map_link(&self.world_seed);
        EmbedPayload {
            title: "Waypoint".to_string(),
            description: format!("**{}**", waypoint.name),
            fields: vec![
                EmbedField {
                    label: "Dimension".to_string(),
                    value: waypoint.dimension.label().to_string(),
                    inline: false,
                },
                EmbedField {
                    label: "Seed Map".to_string(),
                    value: format!("[Click Here!]({})", link),
                    inline: true,
                },
                EmbedField {
                    label: "Co-ordinates".to_string(),
                    value: format!(
                        "**x**: {}, **y**: {}, **z**: {}",
                        waypoint.x, waypoint.y, waypoint.z
                    ),
                    inline: false,
                },
            ],
            footer: raw.to_string(),
            color: self.resources.colors.get(&waypoint.color_name),
        }
    }

    fn presence_message(&self, player: &PlayerRef, suffix: &str) -> OutboundMessage {
        let body = format!("{}{}", self.mention_or_name(player), suffix);
        self.system_message(body)
    }

    fn translate_advancement(
        &self,
        player: &PlayerRef,
        title: &TextValue,
        description: &TextValue,
    ) -> Option<OutboundMessage> {
        // Both keys must exist and translate; a display-less or
        // untranslated advancement produces no chat noise.
        let title_key = title.translation_key()?;
        let description_key = description.translation_key()?;
        let locale = &self.resources.locale;
        if !locale.contains(title_key) || !locale.contains(description_key) {
            return None;
        }

        let body = format!(
            "{} has made the advancement [**{}**]\n-# Description: {}",
            self.mention_or_name(player),
            locale.resolve(title_key, title_key),
            locale.resolve(description_key, description_key),
        );
        Some(self.system_message(body))
    }

    fn translate_death(&self, message: Option<&TextValue>) -> Option<OutboundMessage> {
        let text = message?;
        let rendered = match text {
            TextValue::Templated { key, args } => self.render_death_template(key, args),
            other => other.plain_text().to_string(),
        };
        Some(self.system_message(self.stripper.strip(&rendered)))
    }

    /// Substitute `%<n>$s` placeholders (1-indexed) with mention-style
    /// references where the argument is an entity linked to Discord, and
    /// with plain renderings otherwise. Untranslated keys surface as-is.
    fn render_death_template(&self, key: &str, args: &[TextValue]) -> String {
        let mut result = self.resources.locale.resolve(key, key).to_string();

        for (i, arg) in args.iter().enumerate() {
            let placeholder = format!("%{}$s", i + 1);
            let replacement = match arg {
                TextValue::Entity { id, .. } => {
                    match self.resources.linker.resolve_external_identity(id) {
                        Some(identity) => format!("<@{}>", identity.external_id),
                        None => arg.plain_text().to_string(),
                    }
                }
                other => other.plain_text().to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }

        result
    }

    /// Effective webhook identity for a player-authored message.
    fn sender_identity(&self, player: &PlayerRef) -> (String, String) {
        match self.resources.linker.resolve_external_identity(&player.uuid) {
            Some(identity) => {
                let profile = self.directory.profile(&identity.external_id);
                let name = profile
                    .as_ref()
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|| player.name.clone());
                let avatar =
                    identity.avatar_url(profile.as_ref().and_then(|p| p.avatar_asset.as_deref()));
                (name, avatar)
            }
            None => (
                player.name.clone(),
                format!("{}{}", HEAD_RENDER_URL, player.uuid),
            ),
        }
    }

    /// Inline mention of the linked Discord user, or the raw player name.
    fn mention_or_name(&self, player: &PlayerRef) -> String {
        match self.resources.linker.resolve_external_identity(&player.uuid) {
            Some(identity) => format!("<@{}>", identity.external_id),
            None => player.name.clone(),
        }
    }

    fn system_message(&self, body: String) -> OutboundMessage {
        OutboundMessage {
            sender_name: SYSTEM_SENDER.to_string(),
            avatar_url: self.system_avatar_url.clone(),
            payload: MessagePayload::Text(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::colors::DEFAULT_COLOR;
    use crate::resources::{ColorTable, IdentityLinker, LocaleCatalog};
    use std::collections::HashMap;

    const LINKED_UUID: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
    const LINKED_DISCORD_ID: &str = "111222333444555666";

    struct MapDirectory(HashMap<String, MemberProfile>);

    impl MemberDirectory for MapDirectory {
        fn profile(&self, external_id: &str) -> Option<MemberProfile> {
            self.0.get(external_id).cloned()
        }
    }

    fn make_translator() -> EventTranslator {
        let mut links = HashMap::new();
        links.insert(LINKED_UUID.to_string(), LINKED_DISCORD_ID.to_string());
        links.insert("entity-uuid".to_string(), "D123".to_string());
        let linker = IdentityLinker::new(links, HashMap::new());

        let mut locale = HashMap::new();
        locale.insert(
            "death.attack.mob".to_string(),
            "%1$s was slain by %2$s".to_string(),
        );
        locale.insert(
            "advancements.story.mine_stone.title".to_string(),
            "Stone Age".to_string(),
        );
        locale.insert(
            "advancements.story.mine_stone.description".to_string(),
            "Mine Stone with your new Pickaxe".to_string(),
        );

        let mut colors = HashMap::new();
        colors.insert("11".to_string(), 0x00FFFF);

        let mut profiles = HashMap::new();
        profiles.insert(
            LINKED_DISCORD_ID.to_string(),
            MemberProfile {
                display_name: "NotchOnDiscord".to_string(),
                avatar_asset: Some("abc123".to_string()),
            },
        );

        let resources = Resources {
            linker: Arc::new(linker),
            locale: Arc::new(LocaleCatalog::new(locale)),
            colors: Arc::new(ColorTable::new(colors)),
        };
        EventTranslator::new(
            resources,
            Arc::new(MapDirectory(profiles)),
            "https://cdn.discordapp.com/avatars/bot/self.png".to_string(),
            "12345".to_string(),
        )
    }

    fn linked_player() -> PlayerRef {
        PlayerRef {
            uuid: LINKED_UUID.to_string(),
            name: "Notch".to_string(),
        }
    }

    fn unlinked_player() -> PlayerRef {
        PlayerRef {
            uuid: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Steve".to_string(),
        }
    }

    #[test]
    fn test_chat_round_trip_body_unchanged() {
        let translator = make_translator();
        let event = GameEvent::Chat {
            player: linked_player(),
            message: "hello there, no prefix".to_string(),
        };

        let message = translator.translate(&event).expect("chat is never suppressed");
        assert_eq!(
            message.payload,
            MessagePayload::Text("hello there, no prefix".to_string())
        );
        assert_eq!(message.sender_name, "NotchOnDiscord");
        assert_eq!(
            message.avatar_url,
            format!(
                "https://cdn.discordapp.com/avatars/{}/abc123.png",
                LINKED_DISCORD_ID
            )
        );
    }

    #[test]
    fn test_chat_unlinked_uses_head_render_avatar() {
        let translator = make_translator();
        let event = GameEvent::Chat {
            player: unlinked_player(),
            message: "hi".to_string(),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(message.sender_name, "Steve");
        assert_eq!(
            message.avatar_url,
            "https://mc-heads.net/avatar/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_waypoint_chat_becomes_embed() {
        let translator = make_translator();
        let raw = "xaero-waypoint:Home:H:100:64:200:11:false:0:Internal-overworld-waypoints";
        let event = GameEvent::Chat {
            player: linked_player(),
            message: raw.to_string(),
        };

        let message = translator.translate(&event).unwrap();
        let embed = match message.payload {
            MessagePayload::Embed(embed) => embed,
            other => panic!("expected embed, got {:?}", other),
        };

        assert_eq!(embed.title, "Waypoint");
        assert_eq!(embed.description, "**Home**");
        assert_eq!(embed.footer, raw);
        assert_eq!(embed.color, 0x00FFFF);
        assert_eq!(embed.fields.len(), 3);
        assert_eq!(embed.fields[0].label, "Dimension");
        assert_eq!(embed.fields[0].value, "Overworld");
        assert!(embed.fields[1].value.contains("seed=12345"));
        assert!(embed.fields[1].value.contains("dimension=Overworld"));
        assert_eq!(embed.fields[2].value, "**x**: 100, **y**: 64, **z**: 200");
    }

    #[test]
    fn test_waypoint_unknown_colour_defaults_red() {
        let translator = make_translator();
        let event = GameEvent::Chat {
            player: linked_player(),
            message: "xaero-waypoint:Home:H:1:2:3:99:false:0:nether".to_string(),
        };

        let message = translator.translate(&event).unwrap();
        match message.payload {
            MessagePayload::Embed(embed) => assert_eq!(embed.color, DEFAULT_COLOR),
            other => panic!("expected embed, got {:?}", other),
        }
    }

    #[test]
    fn test_short_waypoint_reports_invalid_format() {
        let translator = make_translator();
        let event = GameEvent::Chat {
            player: linked_player(),
            message: "xaero-waypoint:Home:H:100:64:200:0:a:b".to_string(),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text("Invalid waypoint format".to_string())
        );
    }

    #[test]
    fn test_join_linked_mentions() {
        let translator = make_translator();
        let message = translator
            .translate(&GameEvent::Join {
                player: linked_player(),
            })
            .unwrap();

        assert_eq!(message.sender_name, SYSTEM_SENDER);
        assert_eq!(
            message.payload,
            MessagePayload::Text(format!("<@{}> has joined the game", LINKED_DISCORD_ID))
        );
    }

    #[test]
    fn test_leave_unlinked_uses_raw_name() {
        let translator = make_translator();
        let message = translator
            .translate(&GameEvent::Leave {
                player: unlinked_player(),
            })
            .unwrap();

        assert_eq!(
            message.payload,
            MessagePayload::Text("Steve has left the game".to_string())
        );
    }

    #[test]
    fn test_advancement_renders_both_keys() {
        let translator = make_translator();
        let event = GameEvent::Advancement {
            player: unlinked_player(),
            title: TextValue::Templated {
                key: "advancements.story.mine_stone.title".to_string(),
                args: vec![],
            },
            description: TextValue::Templated {
                key: "advancements.story.mine_stone.description".to_string(),
                args: vec![],
            },
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text(
                "Steve has made the advancement [**Stone Age**]\n-# Description: \
                 Mine Stone with your new Pickaxe"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_advancement_unresolvable_description_suppressed() {
        let translator = make_translator();
        let event = GameEvent::Advancement {
            player: linked_player(),
            title: TextValue::Templated {
                key: "advancements.story.mine_stone.title".to_string(),
                args: vec![],
            },
            description: TextValue::Templated {
                key: "advancements.unknown.description".to_string(),
                args: vec![],
            },
        };

        assert_eq!(translator.translate(&event), None);
    }

    #[test]
    fn test_advancement_plain_title_suppressed() {
        let translator = make_translator();
        let event = GameEvent::Advancement {
            player: linked_player(),
            title: TextValue::Plain("Stone Age".to_string()),
            description: TextValue::Templated {
                key: "advancements.story.mine_stone.description".to_string(),
                args: vec![],
            },
        };

        assert_eq!(translator.translate(&event), None);
    }

    #[test]
    fn test_death_template_substitutes_mention() {
        let translator = make_translator();
        let event = GameEvent::Death {
            message: Some(TextValue::Templated {
                key: "death.attack.mob".to_string(),
                args: vec![
                    TextValue::Entity {
                        id: "entity-uuid".to_string(),
                        text: "Notch".to_string(),
                    },
                    TextValue::Plain("a zombie".to_string()),
                ],
            }),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text("<@D123> was slain by a zombie".to_string())
        );
    }

    #[test]
    fn test_death_unlinked_entity_uses_plain_text() {
        let translator = make_translator();
        let event = GameEvent::Death {
            message: Some(TextValue::Templated {
                key: "death.attack.mob".to_string(),
                args: vec![
                    TextValue::Entity {
                        id: "unlinked-entity".to_string(),
                        text: "Steve".to_string(),
                    },
                    TextValue::Plain("a skeleton".to_string()),
                ],
            }),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text("Steve was slain by a skeleton".to_string())
        );
    }

    #[test]
    fn test_death_untranslated_key_surfaces() {
        let translator = make_translator();
        let event = GameEvent::Death {
            message: Some(TextValue::Templated {
                key: "death.attack.custom".to_string(),
                args: vec![],
            }),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text("death.attack.custom".to_string())
        );
    }

    #[test]
    fn test_death_plain_text_strips_codes() {
        let translator = make_translator();
        let event = GameEvent::Death {
            message: Some(TextValue::Plain("§6Steve§r fell from a high place".to_string())),
        };

        let message = translator.translate(&event).unwrap();
        assert_eq!(
            message.payload,
            MessagePayload::Text("Steve fell from a high place".to_string())
        );
    }

    #[test]
    fn test_death_without_text_suppressed() {
        let translator = make_translator();
        assert_eq!(translator.translate(&GameEvent::Death { message: None }), None);
    }
}
