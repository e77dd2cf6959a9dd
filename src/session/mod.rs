//! Game-session transport: the socket the server-side plugin connects to.

pub mod listener;
pub mod wire;

pub use listener::SessionListener;
