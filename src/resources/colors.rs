//! Named colour table for embed accents.

use std::collections::HashMap;
use std::path::Path;

use crate::common::error::ResourceError;

/// Colour used when a name has no table entry.
pub const DEFAULT_COLOR: u32 = 0xFF0000;

/// Immutable colour-name -> 24-bit RGB lookup.
#[derive(Debug, Default)]
pub struct ColorTable {
    entries: HashMap<String, u32>,
}

impl ColorTable {
    /// Build a table from already-parsed values.
    pub fn new(entries: HashMap<String, u32>) -> Self {
        Self { entries }
    }

    /// Load the table from a JSON object file of name -> hex string.
    ///
    /// A missing file or an unparsable value is fatal at startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let raw: HashMap<String, String> =
            serde_json::from_str(&text).map_err(|source| ResourceError::ParseError {
                path: path.display().to_string(),
                source,
            })?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            let color = parse_color(&value).ok_or_else(|| ResourceError::InvalidColor {
                name: name.clone(),
                value: value.clone(),
            })?;
            entries.insert(name, color);
        }
        Ok(Self::new(entries))
    }

    /// Look up a colour by name; unknown names yield the default red.
    pub fn get(&self, name: &str) -> u32 {
        self.entries.get(name).copied().unwrap_or(DEFAULT_COLOR)
    }
}

/// Parse a colour value in `#RRGGBB`, `0xRRGGBB`, or decimal form,
/// masked to 24 bits.
fn parse_color(value: &str) -> Option<u32> {
    let value = value.trim();
    let parsed = if let Some(hex) = value.strip_prefix('#') {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        value.parse::<u32>().ok()?
    };
    Some(parsed & 0x00FF_FFFF)
}
