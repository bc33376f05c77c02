//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and [`TerminalRenderer`] flushes that framebuffer to the
//! terminal, rewriting only what changed. Board cells are two columns wide
//! to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod intro;
pub mod renderer;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_for, AnchorY, GameView, Viewport, PALETTE};
pub use intro::{IntroAnimation, IntroFrame};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
