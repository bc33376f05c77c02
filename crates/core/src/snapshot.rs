//! Read-only copies of session state for renderers and tooling.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::board::Grid;
use crate::pieces::{ActivePiece, NextPiece};
use crate::scoring::Progress;
use crate::types::{GamePhase, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActivePiece>,
    pub next: Option<NextPiece>,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub speed_ms: u32,
    pub phase: GamePhase,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        let progress = Progress::new();
        self.board = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.score = progress.score;
        self.level = progress.level;
        self.lines_cleared = progress.lines_cleared;
        self.speed_ms = progress.speed_ms;
        self.phase = GamePhase::Menu;
        self.pieces_spawned = 0;
    }

    /// Whether gravity is running.
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Cell value at (`x`, `y`) including the active piece drawn on top.
    pub fn cell_with_active(&self, x: usize, y: usize) -> u8 {
        if let Some(active) = &self.active {
            let hit = active
                .cells()
                .any(|(ax, ay)| ax >= 0 && ay >= 0 && ax as usize == x && ay as usize == y);
            if hit {
                return active.color;
            }
        }
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(EMPTY)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            level: 0,
            lines_cleared: 0,
            speed_ms: 0,
            phase: GamePhase::Menu,
            pieces_spawned: 0,
        };
        s.clear();
        s
    }
}
