//! Card board representation for the memory match game.
//!
//! ## Core Types
//!
//! - [`Board`] — The authoritative face layout and revealed mask
//! - [`Face`] — A card's identity; each face appears on exactly two cells
//! - [`BoardError`] — Rejected layouts for deterministic construction
mod board;

pub use board::*;
