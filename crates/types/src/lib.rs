//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data: the board dimensions, the speed curve
//! constants, the tetromino catalog keys, the command set accepted by the
//! engine and the events it emits. Every other crate in the workspace depends
//! on this one, so it stays free of logic.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Cells**: `0` is empty, `1..=7` is an occupied cell carrying a color id
//!
//! # Speed Curve
//!
//! A fresh game ticks every 500ms. Each level-up recomputes the interval as
//! `max(100, 500 - level * 40)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 420ms |
//! | 5 | 300ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use brick_tetris_types::{GameCommand, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(TetrominoKind::from_str("t"), Some(TetrominoKind::T));
//! assert_eq!(GameCommand::from_str("softDrop"), Some(GameCommand::SoftDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct color ids an occupied cell can carry (1..=7)
pub const COLOR_COUNT: u8 = 7;

/// Value of an empty grid cell
pub const EMPTY: Cell = 0;

/// Tick interval of a freshly started game
pub const INITIAL_SPEED_MS: u32 = 500;

/// Tick interval reduction per level
pub const SPEED_STEP_MS: u32 = 40;

/// Fastest allowed tick interval
pub const MIN_SPEED_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a freshly started game
pub const STARTING_LEVEL: u32 = 1;

/// Base points per clear size, multiplied by the current level.
///
/// Index is the number of rows removed by a single lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A grid cell: `0` empty, `1..=7` color id of a settled block.
pub type Cell = u8;

/// The seven tetromino shapes of the catalog.
///
/// The discriminant order matches the catalog order used by the random
/// piece policy (I, O, T, L, J, Z, S).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TetrominoKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl TetrominoKind {
    /// All kinds in catalog order.
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::L,
        TetrominoKind::J,
        TetrominoKind::Z,
        TetrominoKind::S,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_str("I"), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_str("j"), Some(TetrominoKind::J));
    /// assert_eq!(TetrominoKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "l" => Some(TetrominoKind::L),
            "j" => Some(TetrominoKind::J),
            "z" => Some(TetrominoKind::Z),
            "s" => Some(TetrominoKind::S),
            _ => None,
        }
    }

    /// Uppercase letter used by the side panel and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "I",
            TetrominoKind::O => "O",
            TetrominoKind::T => "T",
            TetrominoKind::L => "L",
            TetrominoKind::J => "J",
            TetrominoKind::Z => "Z",
            TetrominoKind::S => "S",
        }
    }

    /// Position in [`TetrominoKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Lifecycle phase of a game session.
///
/// `Menu → Playing → GameOver → Menu`, with `Paused` toggled from `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }

    /// Whether the periodic tick source should be running in this phase.
    pub fn ticks(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Commands accepted by the engine.
///
/// Commands that make no sense in the current phase (rotating in the menu,
/// starting while already playing) are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameCommand {
    /// Leave the menu and begin a fresh game
    Start,
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Accelerated descent, see [`DropStyle`]
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    Rotate,
    /// Suspend or resume gravity
    TogglePause,
    /// Return from the game-over screen to the menu
    AcknowledgeGameOver,
}

impl GameCommand {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("ROTATE"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameCommand::Start),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "togglepause" => Some(GameCommand::TogglePause),
            "acknowledgegameover" => Some(GameCommand::AcknowledgeGameOver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::TogglePause => "togglePause",
            GameCommand::AcknowledgeGameOver => "acknowledgeGameOver",
        }
    }
}

/// How a soft drop command descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DropStyle {
    /// Two move-down attempts; the piece locks only if the first one fails.
    #[default]
    Double,
    /// One move-down attempt; the piece locks if it fails.
    Single,
}

/// Direction of a successful piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Motion {
    Left,
    Right,
    Down,
    Rotate,
}

/// Notifications emitted by the engine.
///
/// These are fire-and-forget: the engine never waits on a consumer and
/// consumers never feed anything back into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum GameEvent {
    /// A fresh game left the menu.
    GameStarted,
    /// A new active piece entered the board.
    PieceSpawned { kind: TetrominoKind, color: u8 },
    /// The active piece moved or rotated.
    PieceMoved { motion: Motion },
    /// The active piece was merged into the grid.
    PieceLocked,
    /// A lock removed `count` full rows.
    LinesCleared { count: u8 },
    /// The level increased; fires once per crossing.
    LevelUp { level: u32 },
    /// The tick interval changed.
    SpeedChanged { interval_ms: u32 },
    /// Gravity was suspended (`true`) or resumed (`false`).
    Paused { paused: bool },
    /// A freshly spawned piece collided; the session is over.
    GameOver { score: u32 },
}
