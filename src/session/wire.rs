//! Wire format for the game-session socket.
//!
//! The server-side plugin speaks newline-delimited JSON: one tagged event
//! object per line inbound, one broadcast object per line outbound. The
//! DTOs here stay separate from the core types so the wire format can
//! evolve without touching translation logic.

use serde::{Deserialize, Serialize};

use crate::common::types::GameBroadcast;
use crate::game::events::{GameEvent, PlayerRef};
use crate::game::text::TextValue;

/// One inbound game event line.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WireEvent {
    Chat {
        uuid: String,
        name: String,
        message: String,
    },
    Join {
        uuid: String,
        name: String,
    },
    Leave {
        uuid: String,
        name: String,
    },
    Advancement {
        uuid: String,
        name: String,
        title: WireText,
        description: WireText,
    },
    Death {
        #[serde(default)]
        message: Option<WireText>,
    },
}

/// A tagged text value on the wire.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireText {
    Plain {
        text: String,
    },
    Templated {
        key: String,
        #[serde(default)]
        args: Vec<WireText>,
    },
    Entity {
        id: String,
        text: String,
    },
}

/// One outbound broadcast line.
#[derive(Debug, Serialize)]
pub struct WireBroadcast<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
}

impl From<WireText> for TextValue {
    fn from(wire: WireText) -> Self {
        match wire {
            WireText::Plain { text } => TextValue::Plain(text),
            WireText::Templated { key, args } => TextValue::Templated {
                key,
                args: args.into_iter().map(TextValue::from).collect(),
            },
            WireText::Entity { id, text } => TextValue::Entity { id, text },
        }
    }
}

impl From<WireEvent> for GameEvent {
    fn from(wire: WireEvent) -> Self {
        match wire {
            WireEvent::Chat {
                uuid,
                name,
                message,
            } => GameEvent::Chat {
                player: PlayerRef { uuid, name },
                message,
            },
            WireEvent::Join { uuid, name } => GameEvent::Join {
                player: PlayerRef { uuid, name },
            },
            WireEvent::Leave { uuid, name } => GameEvent::Leave {
                player: PlayerRef { uuid, name },
            },
            WireEvent::Advancement {
                uuid,
                name,
                title,
                description,
            } => GameEvent::Advancement {
                player: PlayerRef { uuid, name },
                title: title.into(),
                description: description.into(),
            },
            WireEvent::Death { message } => GameEvent::Death {
                message: message.map(TextValue::from),
            },
        }
    }
}

/// Decode one event line.
pub fn decode_event(line: &str) -> Result<GameEvent, serde_json::Error> {
    serde_json::from_str::<WireEvent>(line).map(GameEvent::from)
}

/// Encode one broadcast line.
pub fn encode_broadcast(broadcast: &GameBroadcast) -> Result<String, serde_json::Error> {
    serde_json::to_string(&WireBroadcast {
        text: &broadcast.text,
        link: broadcast.link.as_deref(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_chat_event() {
        let line = r#"{"event":"chat","uuid":"abc","name":"Steve","message":"hello"}"#;
        let event = decode_event(line).expect("chat line should decode");
        assert_eq!(
            event,
            GameEvent::Chat {
                player: PlayerRef {
                    uuid: "abc".to_string(),
                    name: "Steve".to_string(),
                },
                message: "hello".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_join_event() {
        let line = r#"{"event":"join","uuid":"abc","name":"Steve"}"#;
        let event = decode_event(line).unwrap();
        assert!(matches!(event, GameEvent::Join { .. }));
    }

    #[test]
    fn test_decode_death_with_templated_text() {
        let line = r#"{"event":"death","message":{"kind":"templated","key":"death.attack.mob",
            "args":[{"kind":"entity","id":"uuid-1","text":"Steve"},{"kind":"plain","text":"a zombie"}]}}"#;
        let event = decode_event(line).expect("death line should decode");

        match event {
            GameEvent::Death {
                message: Some(TextValue::Templated { key, args }),
            } => {
                assert_eq!(key, "death.attack.mob");
                assert_eq!(args.len(), 2);
                assert_eq!(
                    args[0],
                    TextValue::Entity {
                        id: "uuid-1".to_string(),
                        text: "Steve".to_string(),
                    }
                );
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_decode_death_without_message() {
        let line = r#"{"event":"death"}"#;
        let event = decode_event(line).unwrap();
        assert_eq!(event, GameEvent::Death { message: None });
    }

    #[test]
    fn test_decode_malformed_line_is_error() {
        assert!(decode_event("not json").is_err());
        assert!(decode_event(r#"{"event":"unknown_kind"}"#).is_err());
    }

    #[test]
    fn test_encode_broadcast_without_link() {
        let json = encode_broadcast(&GameBroadcast::text("<Steve> hello")).unwrap();
        assert_eq!(json, r#"{"text":"<Steve> hello"}"#);
    }

    #[test]
    fn test_encode_broadcast_with_link() {
        let broadcast = GameBroadcast {
            text: "<Steve> [pic.png]".to_string(),
            link: Some("https://cdn.example/pic.png".to_string()),
        };
        let json = encode_broadcast(&broadcast).unwrap();
        assert_eq!(
            json,
            r#"{"text":"<Steve> [pic.png]","link":"https://cdn.example/pic.png"}"#
        );
    }
}
