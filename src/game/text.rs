//! Game text values.
//!
//! Chat-visible text arrives from the game engine either as plain strings,
//! as templated values carrying a translation key plus positional
//! arguments, or as entity references (the hoverable names inside death
//! messages). The tagged model here replaces type inspection over the
//! engine's component hierarchy.

use fancy_regex::Regex;

/// A tagged game text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValue {
    /// Plain text.
    Plain(String),
    /// Templated text: a translation key and ordered argument sub-values.
    Templated { key: String, args: Vec<TextValue> },
    /// A reference to an in-world entity: its ID and plain-text name.
    Entity { id: String, text: String },
}

impl TextValue {
    /// Plain-text rendering of this value.
    ///
    /// Templated values render as their key; the caller resolves keys
    /// through the locale catalog when a translation is wanted.
    pub fn plain_text(&self) -> &str {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Templated { key, .. } => key,
            TextValue::Entity { text, .. } => text,
        }
    }

    /// The translation key, if this value carries one.
    pub fn translation_key(&self) -> Option<&str> {
        match self {
            TextValue::Templated { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Strips legacy formatting escapes from game text.
///
/// An escape is the `§` introducer followed by one colour or style code
/// character. Stripping is idempotent: the introducer is consumed along
/// with its code.
#[derive(Debug, Clone)]
pub struct FormatStripper {
    pattern: Regex,
}

impl FormatStripper {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new("§[0-9a-fk-orA-FK-OR]").unwrap(),
        }
    }

    /// Remove every formatting escape from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").to_string()
    }
}

impl Default for FormatStripper {
    fn default() -> Self {
        Self::new()
    }
}
