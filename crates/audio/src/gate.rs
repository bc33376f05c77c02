//! Priority gate deciding which cues reach the speaker.
//!
//! Only one cue plays at a time. A playing cue marks the speaker busy until
//! its duration elapses. While busy:
//!
//! - `High` cues always play and take over the busy window.
//! - `Medium` cues play once no more than half a line-clear cue remains.
//! - `Low` cues are dropped.

use crate::cue::{Priority, SoundCue, LINE_CLEAR_SOUND_MS};

/// Remaining busy time a `Medium` cue may cut into.
pub const MEDIUM_CUTOFF_MS: u64 = LINE_CLEAR_SOUND_MS / 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundGate {
    busy_until_ms: u64,
    current: Option<SoundCue>,
}

impl SoundGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cue` may play at `now_ms`.
    ///
    /// An admitted cue becomes current and the busy window restarts from
    /// `now_ms`.
    pub fn admit(&mut self, cue: SoundCue, now_ms: u64) -> bool {
        let remaining = self.remaining_ms(now_ms);
        let allowed = remaining == 0
            || match cue.priority() {
                Priority::High => true,
                Priority::Medium => remaining <= MEDIUM_CUTOFF_MS,
                Priority::Low => false,
            };

        if allowed {
            self.current = Some(cue);
            self.busy_until_ms = now_ms.saturating_add(cue.duration_ms());
        }
        allowed
    }

    pub fn is_busy(&self, now_ms: u64) -> bool {
        now_ms < self.busy_until_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.busy_until_ms.saturating_sub(now_ms)
    }

    /// The cue occupying the speaker at `now_ms`.
    pub fn current(&self, now_ms: u64) -> Option<SoundCue> {
        if self.is_busy(now_ms) {
            self.current
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_gate_admits_anything() {
        for cue in SoundCue::ALL {
            let mut gate = SoundGate::new();
            assert!(gate.admit(cue, 1_000));
            assert_eq!(gate.current(1_000), Some(cue));
        }
    }

    #[test]
    fn low_dropped_while_busy() {
        let mut gate = SoundGate::new();
        assert!(gate.admit(SoundCue::Move, 0));
        assert!(!gate.admit(SoundCue::Move, 499));
        assert!(gate.admit(SoundCue::Move, 500));
    }

    #[test]
    fn medium_waits_for_half_a_line_clear() {
        let mut gate = SoundGate::new();
        assert!(gate.admit(SoundCue::LineClear, 0));
        // 600ms busy: 301ms remaining is too much, 300ms is fine.
        assert!(!gate.admit(SoundCue::LevelUp, 299));
        assert!(gate.admit(SoundCue::LevelUp, 300));
        assert_eq!(gate.remaining_ms(300), 2_000);
    }

    #[test]
    fn medium_drops_during_long_cue() {
        let mut gate = SoundGate::new();
        assert!(gate.admit(SoundCue::LevelUp, 0));
        assert!(!gate.admit(SoundCue::LineClear, 10));
        assert_eq!(gate.current(10), Some(SoundCue::LevelUp));
    }

    #[test]
    fn medium_cuts_a_move_click_short() {
        let mut gate = SoundGate::new();
        assert!(gate.admit(SoundCue::Move, 0));
        assert!(gate.admit(SoundCue::LineClear, 250));
    }

    #[test]
    fn high_always_plays() {
        let mut gate = SoundGate::new();
        assert!(gate.admit(SoundCue::GameStart, 0));
        assert!(gate.admit(SoundCue::GameOver, 1));
        assert_eq!(gate.current(2), Some(SoundCue::GameOver));
        assert_eq!(gate.remaining_ms(1), 2_000);
    }

    #[test]
    fn reset_frees_the_speaker() {
        let mut gate = SoundGate::new();
        gate.admit(SoundCue::GameStart, 0);
        gate.reset();
        assert!(!gate.is_busy(1));
        assert!(gate.admit(SoundCue::Move, 1));
    }
}
