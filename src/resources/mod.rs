//! Startup resource tables: identity links, name cache, locale strings,
//! and colour values.
//!
//! All tables are loaded once before anything connects and are read-only
//! for the process lifetime; the core components receive them as shared
//! immutable views.

pub mod colors;
pub mod identity;
pub mod locale;

use std::sync::Arc;

use crate::common::error::ResourceError;
use crate::config::types::ResourcesConfig;

pub use colors::ColorTable;
pub use identity::{IdentityLinker, PlayerIdentity};
pub use locale::LocaleCatalog;

/// The loaded resource tables, shared across tasks.
#[derive(Clone)]
pub struct Resources {
    pub linker: Arc<IdentityLinker>,
    pub locale: Arc<LocaleCatalog>,
    pub colors: Arc<ColorTable>,
}

impl Resources {
    /// Load every table named in the configuration.
    ///
    /// The locale catalog and colour table must load; the identity link
    /// table and name cache may be absent (empty world, nobody linked yet).
    pub fn load(config: &ResourcesConfig) -> Result<Self, ResourceError> {
        let linker = IdentityLinker::load(&config.links, &config.name_cache);
        let locale = LocaleCatalog::load(&config.locale)?;
        let colors = ColorTable::load(&config.colours)?;

        Ok(Self {
            linker: Arc::new(linker),
            locale: Arc::new(locale),
            colors: Arc::new(colors),
        })
    }
}
