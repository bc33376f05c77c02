//! Runtime plumbing around the pure game session.
//!
//! [`GameDriver`] is the single place ticks and player commands meet: it owns
//! the session and a [`TickSource`], so gravity and key presses are applied
//! one after another, never concurrently.

pub mod driver;
pub mod scheduler;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use driver::GameDriver;
pub use scheduler::{IntervalTicker, TickSource, DEFAULT_MAX_CATCH_UP};
