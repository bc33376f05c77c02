//! Start-up animation played while the start jingle runs.
//!
//! Colored bricks spread outward from the middle of the well in square
//! rings, each ring spinning a little faster than the one inside it. The
//! title fades in over the top third, then "TETRIS" over the bottom third.
//! The frame is a pure function of elapsed time.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, COLOR_COUNT};

/// One animation step every 16ms.
pub const INTRO_STEP_MS: u64 = 16;

/// Spin glyphs, a quarter turn apart.
const SPIN: [char; 4] = ['▖', '▘', '▝', '▗'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroAnimation {
    duration_ms: u64,
}

impl IntroAnimation {
    pub fn new(duration_ms: u64) -> Self {
        Self { duration_ms }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn frame(&self, elapsed_ms: u64) -> IntroFrame {
        let step = elapsed_ms / INTRO_STEP_MS;
        // Reveal completes well before the jingle does.
        let progress = if self.duration_ms == 0 {
            1000
        } else {
            (step * 30 * 1000 / self.duration_ms).min(1000)
        };
        IntroFrame {
            step,
            angle_deg: elapsed_ms / 20,
            progress_permille: progress as u16,
        }
    }
}

/// A single frame of the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroFrame {
    pub step: u64,
    pub angle_deg: u64,
    /// Reveal progress in thousandths.
    pub progress_permille: u16,
}

impl IntroFrame {
    /// Rings (Chebyshev distance from the center) revealed so far.
    pub fn radius(&self) -> u16 {
        let max = (BOARD_WIDTH.max(BOARD_HEIGHT) / 2) as u16;
        self.progress_permille * max / 1000
    }

    fn ring(x: u8, y: u8) -> u16 {
        let dx = (x as i16 - (BOARD_WIDTH / 2) as i16).unsigned_abs();
        let dy = (y as i16 - (BOARD_HEIGHT / 2) as i16).unsigned_abs();
        dx.max(dy)
    }

    /// Color id at board cell (`x`, `y`), or `None` while hidden.
    pub fn color_at(&self, x: u8, y: u8) -> Option<u8> {
        if Self::ring(x, y) > self.radius() {
            return None;
        }
        let shift = ((x as u64 + y as u64 + self.step / 3) % COLOR_COUNT as u64) as u8;
        Some(1 + shift)
    }

    /// Spin glyph at board cell (`x`, `y`); outer rings turn faster.
    pub fn glyph_at(&self, x: u8, y: u8) -> char {
        let ring = Self::ring(x, y) as u64;
        let angle = self.angle_deg * (ring + 1) / 2;
        SPIN[((angle / 90) % 4) as usize]
    }

    /// Side of the solid square growing in the middle, 0..=4 cells.
    pub fn center_size(&self) -> u8 {
        (self.progress_permille as u32 * 4 / 1000) as u8
    }

    pub fn shows_title(&self) -> bool {
        self.progress_permille > 300
    }

    pub fn shows_tetris(&self) -> bool {
        self.progress_permille > 600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_grows_and_saturates() {
        let intro = IntroAnimation::new(12_000);
        let start = intro.frame(0);
        assert_eq!(start.progress_permille, 0);
        assert_eq!(start.radius(), 0);
        assert!(!start.shows_title());

        let mid = intro.frame(3_200);
        assert!(mid.progress_permille > 400 && mid.progress_permille < 600);
        assert!(mid.shows_title());
        assert!(!mid.shows_tetris());

        let late = intro.frame(11_000);
        assert_eq!(late.progress_permille, 1000);
        assert_eq!(late.radius(), 10);
        assert_eq!(late.center_size(), 4);
        assert!(late.shows_tetris());
    }

    #[test]
    fn only_center_visible_at_start() {
        let f = IntroAnimation::new(12_000).frame(0);
        assert!(f.color_at(5, 10).is_some());
        assert!(f.color_at(0, 0).is_none());
        assert!(f.color_at(4, 10).is_none());
    }

    #[test]
    fn colors_stay_in_palette() {
        let f = IntroAnimation::new(12_000).frame(12_000);
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let c = f.color_at(x, y).unwrap();
                assert!((1..=COLOR_COUNT).contains(&c));
            }
        }
    }

    #[test]
    fn finishes_at_duration() {
        let intro = IntroAnimation::new(500);
        assert!(!intro.is_finished(499));
        assert!(intro.is_finished(500));
        assert_eq!(IntroAnimation::new(0).frame(0).progress_permille, 1000);
    }
}
