//! Game session module - the simulation state machine
//!
//! A [`GameSession`] owns the board, the falling piece, the lookahead piece,
//! the score/level progress and the phase tag. Every mutation goes through
//! one of its command methods, which keeps the game on a single sequential
//! path: a tick and a key press can never interleave.
//!
//! Phases:
//!
//! ```text
//! Menu --start--> Playing --spawn collision--> GameOver --acknowledge--> Menu
//!                  ^    |
//!                  +----+ togglePause (Paused)
//! ```
//!
//! Pausing only stops gravity: moves, soft drops and rotations still apply
//! while `Paused`. Commands issued in a phase where they make no sense return
//! `false` and change nothing.
//!
//! Events queue up until drained. Past [`EVENT_CAPACITY`] undrained events
//! the oldest are discarded, so a caller that never drains still runs in
//! bounded memory.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{ActivePiece, NextPiece};
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::Progress;
use crate::snapshot::GameSnapshot;
use crate::types::{DropStyle, GameCommand, GameEvent, GamePhase, Motion};

/// Most undrained events a session keeps.
pub const EVENT_CAPACITY: usize = 256;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<P = RandomPieces> {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<NextPiece>,
    pieces: P,
    progress: Progress,
    phase: GamePhase,
    drop_style: DropStyle,
    /// Successful spawns since the last start.
    pieces_spawned: u32,
    /// Notifications not yet drained by the driver.
    events: Vec<GameEvent>,
}

impl GameSession<RandomPieces> {
    /// A session whose pieces come from a seeded uniform source.
    pub fn seeded(seed: u32) -> Self {
        Self::new(RandomPieces::seeded(seed))
    }
}

impl<P: PieceSource> GameSession<P> {
    /// Create a session sitting in the menu.
    pub fn new(pieces: P) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            pieces,
            progress: Progress::new(),
            phase: GamePhase::Menu,
            drop_style: DropStyle::default(),
            pieces_spawned: 0,
            events: Vec::with_capacity(16),
        }
    }

    pub fn with_drop_style(mut self, drop_style: DropStyle) -> Self {
        self.drop_style = drop_style;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<NextPiece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.progress.lines_cleared
    }

    /// Current tick interval in milliseconds.
    pub fn game_speed_ms(&self) -> u32 {
        self.progress.speed_ms
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn drop_style(&self) -> DropStyle {
        self.drop_style
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn piece_source(&self) -> &P {
        &self.pieces
    }

    /// Events raised since the last drain, oldest first.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Dispatch a command. Returns whether it had any effect.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::AcknowledgeGameOver => self.acknowledge_game_over(),
        }
    }

    /// Leave the menu and begin a fresh game.
    ///
    /// Resets the grid and progress, draws the first lookahead piece, spawns
    /// it, and draws a new lookahead for the preview. Only valid in `Menu`.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }

        self.board.clear();
        self.progress.reset();
        self.active = None;
        self.pieces_spawned = 0;
        self.next = Some(self.pieces.next_piece());
        self.phase = GamePhase::Playing;

        info!("game started");
        self.emit(GameEvent::GameStarted);
        self.emit(GameEvent::SpeedChanged {
            interval_ms: self.progress.speed_ms,
        });

        self.spawn_next();
        true
    }

    /// One gravity step: move down, or lock and spawn when landed.
    ///
    /// Ignored unless `Playing`.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        if !self.move_down() {
            self.lock_active();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0, Motion::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0, Motion::Right)
    }

    /// Move the active piece one row down.
    ///
    /// Returns `false` when the piece has landed (or nothing is falling); the
    /// piece is left in place and not locked.
    pub fn move_down(&mut self) -> bool {
        self.try_shift(0, 1, Motion::Down)
    }

    /// Accelerated descent.
    ///
    /// With [`DropStyle::Double`] two move-down attempts are made; only a
    /// failure of the first one locks the piece. [`DropStyle::Single`] makes
    /// one attempt and locks when it fails.
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        if !self.move_down() {
            self.lock_active();
            return true;
        }
        if self.drop_style == DropStyle::Double {
            // A failed second step leaves the piece landed, not locked.
            self.move_down();
        }
        true
    }

    /// Rotate clockwise; rejected without change if the result collides.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if self.board.collision(&rotated.shape, rotated.x, rotated.y) {
            return false;
        }
        self.active = Some(rotated);
        self.emit(GameEvent::PieceMoved {
            motion: Motion::Rotate,
        });
        true
    }

    /// Suspend or resume gravity. Only valid while `Playing` or `Paused`.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = match self.phase {
            GamePhase::Playing => true,
            GamePhase::Paused => false,
            _ => return false,
        };
        self.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        };
        debug!("pause toggled: paused={}", paused);
        self.emit(GameEvent::Paused { paused });
        true
    }

    /// Return from the game-over screen to the menu.
    ///
    /// Nothing is reset here; the next `start` does that.
    pub fn acknowledge_game_over(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::Menu;
        debug!("game over acknowledged");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.next = self.next;
        out.score = self.progress.score;
        out.level = self.progress.level;
        out.lines_cleared = self.progress.lines_cleared;
        out.speed_ms = self.progress.speed_ms;
        out.phase = self.phase;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn accepts_moves(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= EVENT_CAPACITY {
            let dropped = self.events.remove(0);
            debug!("event queue full, dropped {:?}", dropped);
        }
        self.events.push(event);
    }

    fn try_shift(&mut self, dx: i8, dy: i8, motion: Motion) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if self.board.collision(&moved.shape, moved.x, moved.y) {
            return false;
        }
        self.active = Some(moved);
        self.emit(GameEvent::PieceMoved { motion });
        true
    }

    /// Merge the active piece, clear rows, update progress, spawn the next.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge(&active.shape, active.x, active.y, active.color);
        self.emit(GameEvent::PieceLocked);

        let removed = self.board.clear_full_lines();
        if removed > 0 {
            let outcome = self.progress.record_clear(removed as u32);
            debug!(
                "cleared {} line(s) for {} points (total lines {})",
                removed, outcome.points, self.progress.lines_cleared
            );

            // Level-up is announced ahead of the clear that caused it.
            if let Some(level) = outcome.level_up {
                info!("level up: {}", level);
                self.emit(GameEvent::LevelUp { level });
            }
            if let Some(interval_ms) = outcome.new_speed_ms {
                self.emit(GameEvent::SpeedChanged { interval_ms });
            }
            self.emit(GameEvent::LinesCleared { count: removed });
        }

        self.spawn_next();
    }

    /// Promote the lookahead piece and draw a new one.
    ///
    /// A collision at the spawn position ends the game.
    fn spawn_next(&mut self) {
        let next = match self.next.take() {
            Some(next) => next,
            None => self.pieces.next_piece(),
        };
        self.next = Some(self.pieces.next_piece());

        let piece = ActivePiece::spawn(next);
        if self.board.collision(&piece.shape, piece.x, piece.y) {
            self.enter_game_over();
            return;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.emit(GameEvent::PieceSpawned {
            kind: piece.kind,
            color: piece.color,
        });
    }

    fn enter_game_over(&mut self) {
        self.active = None;
        self.phase = GamePhase::GameOver;
        info!(
            "game over: score={} level={} lines={}",
            self.progress.score, self.progress.level, self.progress.lines_cleared
        );
        self.emit(GameEvent::GameOver {
            score: self.progress.score,
        });
    }
}

impl Default for GameSession<RandomPieces> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
