//! WebSocket hosting infrastructure for the memory match game.
//!
//! ## Components
//!
//! - [`Lobby`] — Pairs incoming peers two at a time and spawns sessions
//! - [`bridge`] — Per-connection pump between the WebSocket and the
//!   session's channels
mod bridge;
mod lobby;

pub use bridge::*;
pub use lobby::*;
