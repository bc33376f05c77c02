//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`GameCommand`](types::GameCommand)s.
//! Which command a key means depends on the phase: Enter starts a game from
//! the menu and dismisses the game-over screen.

pub mod map;

pub use brick_tetris_types as types;

pub use map::{map_key, should_quit};
