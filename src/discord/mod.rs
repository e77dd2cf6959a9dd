//! Discord side of the bridge: client setup, event handling, inbound
//! routing, and webhook delivery.

pub mod bot;
pub mod directory;
pub mod handler;
pub mod router;
pub mod webhook;

pub use bot::build_client;
pub use router::InboundRouter;
