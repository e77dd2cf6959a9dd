//! Configuration loading, overrides, and validation.

pub mod env;
pub mod parser;
pub mod types;
pub mod validate;

pub use types::Config;
pub use validate::load_and_validate;
