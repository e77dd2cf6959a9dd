//! Game-side domain model: events, text values, waypoint parsing, and
//! event translation.

pub mod events;
pub mod text;
pub mod translator;
pub mod waypoint;

pub use events::{GameEvent, PlayerRef};
pub use text::TextValue;
pub use translator::{EventTranslator, MemberDirectory, MemberProfile};
