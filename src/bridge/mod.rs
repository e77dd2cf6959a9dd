//! Channel plumbing between the game session and Discord.

pub mod channels;

pub use channels::ChannelBundle;
