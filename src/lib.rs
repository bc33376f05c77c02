//! Brick Game Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `brick_tetris::{types,core,engine,audio,input,term}`
//! and adds the command-line configuration and the headless simulation mode
//! used by the binary.

pub mod config;
pub mod simulate;

pub use brick_tetris_audio as audio;
pub use brick_tetris_core as core;
pub use brick_tetris_engine as engine;
pub use brick_tetris_input as input;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;
