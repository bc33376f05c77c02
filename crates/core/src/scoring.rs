//! Scoring module - line clear points and the level/speed curve
//!
//! Points depend only on how many rows a single lock removed and the level
//! in effect *before* those rows are counted. Every ten cleared lines raise
//! the level by one and shave 40ms off the tick interval, floored at 100ms.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{
    INITIAL_SPEED_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_SPEED_MS, SPEED_STEP_MS, STARTING_LEVEL,
};

/// Points for removing `lines` rows at `level`.
///
/// Anything outside 1..=4 scores nothing.
///
/// # Examples
///
/// ```
/// use brick_tetris_core::scoring::score_for_clear;
///
/// assert_eq!(score_for_clear(1, 1), 100);
/// assert_eq!(score_for_clear(4, 3), 2400);
/// assert_eq!(score_for_clear(0, 5), 0);
/// assert_eq!(score_for_clear(5, 5), 0);
/// ```
pub fn score_for_clear(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level reached after `total_lines` cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    STARTING_LEVEL + total_lines / LINES_PER_LEVEL
}

/// Tick interval for `level`: `max(100, 500 - level * 40)`.
pub fn speed_for_level(level: u32) -> u32 {
    INITIAL_SPEED_MS
        .saturating_sub(level.saturating_mul(SPEED_STEP_MS))
        .max(MIN_SPEED_MS)
}

/// What a single lock changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub lines: u32,
    pub points: u32,
    /// `Some(level)` when this clear crossed into a new level.
    pub level_up: Option<u32>,
    /// `Some(ms)` when the tick interval changed.
    pub new_speed_ms: Option<u32>,
}

/// Score, level, line count and tick interval of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub speed_ms: u32,
}

impl Progress {
    /// Fresh game values: score 0, level 1, no lines, 500ms ticks.
    pub fn new() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            speed_ms: INITIAL_SPEED_MS,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Account for `lines` rows removed by one lock.
    ///
    /// Points use the level before the update. The level only moves forward,
    /// and the speed is only recomputed when it does.
    pub fn record_clear(&mut self, lines: u32) -> ClearOutcome {
        if lines == 0 {
            return ClearOutcome::default();
        }

        let points = score_for_clear(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines_cleared = self.lines_cleared.saturating_add(lines);

        let mut outcome = ClearOutcome {
            lines,
            points,
            ..ClearOutcome::default()
        };

        let new_level = level_for_lines(self.lines_cleared);
        if new_level > self.level {
            self.level = new_level;
            outcome.level_up = Some(new_level);

            let speed = speed_for_level(new_level);
            if speed != self.speed_ms {
                self.speed_ms = speed;
                outcome.new_speed_ms = Some(speed);
            }
        }

        outcome
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table_scales_with_level() {
        for level in 1..=5 {
            assert_eq!(score_for_clear(1, level), 100 * level);
            assert_eq!(score_for_clear(2, level), 300 * level);
            assert_eq!(score_for_clear(3, level), 500 * level);
            assert_eq!(score_for_clear(4, level), 800 * level);
        }
    }

    #[test]
    fn test_speed_curve_floor() {
        assert_eq!(speed_for_level(1), 460);
        assert_eq!(speed_for_level(2), 420);
        assert_eq!(speed_for_level(10), 100);
        assert_eq!(speed_for_level(11), 100);
        assert_eq!(speed_for_level(u32::MAX), 100);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_record_clear_uses_level_before_update() {
        let mut p = Progress::new();
        p.lines_cleared = 8;

        // 8 -> 12 lines crosses into level 2, but the tetris scores at level 1.
        let out = p.record_clear(4);
        assert_eq!(out.points, 800);
        assert_eq!(out.level_up, Some(2));
        assert_eq!(out.new_speed_ms, Some(420));
        assert_eq!(p.score, 800);
        assert_eq!(p.level, 2);
        assert_eq!(p.speed_ms, 420);
    }

    #[test]
    fn test_record_clear_without_crossing() {
        let mut p = Progress::new();
        let out = p.record_clear(2);
        assert_eq!(out.points, 300);
        assert_eq!(out.level_up, None);
        assert_eq!(out.new_speed_ms, None);
        // Speed stays at the initial 500ms until the first level-up.
        assert_eq!(p.speed_ms, 500);
    }

    #[test]
    fn test_record_zero_lines_is_noop() {
        let mut p = Progress::new();
        assert_eq!(p.record_clear(0), ClearOutcome::default());
        assert_eq!(p, Progress::new());
    }

    #[test]
    fn test_speed_change_not_reported_once_floored() {
        let mut p = Progress::new();
        p.lines_cleared = 109;
        p.level = 11;
        p.speed_ms = 100;
        let out = p.record_clear(1);
        assert_eq!(out.level_up, Some(12));
        assert_eq!(out.new_speed_ms, None);
    }
}
