//! Locale string catalog.
//!
//! Translation key -> localized string, loaded once at startup from the
//! game's language file. A missing key is a valid condition; every caller
//! supplies its own fallback.

use std::collections::HashMap;
use std::path::Path;

use crate::common::error::ResourceError;

/// Immutable key -> localized-string lookup.
#[derive(Debug, Default)]
pub struct LocaleCatalog {
    entries: HashMap<String, String>,
}

impl LocaleCatalog {
    /// Build a catalog from an already-parsed table.
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load the catalog from a JSON object file.
    ///
    /// A missing or malformed file is fatal: running with an undefined
    /// catalog would silently untranslate every templated event.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let entries =
            serde_json::from_str(&text).map_err(|source| ResourceError::ParseError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(entries))
    }

    /// Resolve a key, or return `fallback` exactly if the key is absent.
    pub fn resolve<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(fallback)
    }

    /// Whether the catalog has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
