//! Async runtime for live memory match games.
//!
//! This crate orchestrates one two-player session: the authoritative board,
//! turn arbitration, match resolution, and recipient-specific state
//! broadcasts over a pair of channel-backed peer connections.
//!
//! ## Architecture
//!
//! - [`Session`] — Async shell owning two connections and driving the turn loop
//! - [`Engine`] — Pure state machine over the board, scores, and turn pointer
//! - [`Connection`] — Session-side endpoint of one peer link
//! - [`Protocol`] — Wire codec between frames and snapshots / move indices
//!
//! ## Messages
//!
//! - [`Snapshot`] — One immutable copy of board + turn + score + status per player
//!
//! ## Pacing
//!
//! - [`Timer`] — Deadline tracking for the mismatch reveal delay
mod connection;
mod engine;
mod message;
mod protocol;
mod session;
mod timer;

pub use connection::*;
pub use engine::*;
pub use message::*;
pub use protocol::*;
pub use session::*;
pub use timer::*;
