//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens on the 10x20 grid lives here: the
//! tetromino catalog, collision and line clearing, scoring and the level
//! curve, and the [`GameSession`] state machine that ties them together.
//! Nothing in this crate touches a clock, a terminal, or a speaker. Time
//! arrives as explicit [`GameSession::tick`] calls and results leave as
//! [`GameEvent`](types::GameEvent)s.
//!
//! # Module Structure
//!
//! - [`board`]: the grid of color ids, collision, merge, and row removal
//! - [`pieces`]: the seven shapes, clockwise rotation, spawn placement
//! - [`rng`]: seeded uniform piece/color selection and scripted sources
//! - [`scoring`]: points per clear and the level/speed curve
//! - [`session`]: phases, commands, the lock sequence
//! - [`events`]: observer trait for engine notifications
//! - [`snapshot`]: plain copies of session state for rendering
//!
//! # Rules
//!
//! - Pieces spawn horizontally centered in the top row. A collision at spawn
//!   ends the game.
//! - Rotation is clockwise about the matrix with no wall kicks; a rotation
//!   that would collide is rejected.
//! - A piece that cannot move down locks on the next tick.
//! - 1/2/3/4 lines score 100/300/500/800 times the current level.
//! - Every ten lines raise the level and shorten the tick interval by 40ms,
//!   never below 100ms.
//!
//! # Example
//!
//! ```
//! use brick_tetris_core::GameSession;
//! use brick_tetris_core::types::{GameCommand, GamePhase};
//!
//! let mut game = GameSession::seeded(12345);
//! assert!(game.apply(GameCommand::Start));
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! for _ in 0..100 {
//!     game.tick();
//! }
//! assert!(game.pieces_spawned() > 1);
//! ```

pub mod board;
pub mod events;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use brick_tetris_types as types;

pub use board::{Board, Grid};
pub use events::{EventLog, GameObserver};
pub use pieces::{shape_for, ActivePiece, NextPiece, PieceShape};
pub use rng::{PieceSource, RandomPieces, RandomSource, ScriptedPieces, SimpleRng};
pub use scoring::{score_for_clear, speed_for_level, ClearOutcome, Progress};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
