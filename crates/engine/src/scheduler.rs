//! Tick scheduling.
//!
//! A [`TickSource`] turns elapsed wall-clock time into gravity ticks. It never
//! reads a clock itself: the caller feeds it elapsed milliseconds, so tests can
//! drive it synchronously.

/// Most ticks a single [`IntervalTicker::advance`] call may report.
///
/// A long stall (suspended terminal, debugger) would otherwise replay seconds
/// of gravity at once.
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

/// Periodic tick generator with a settable interval.
pub trait TickSource {
    fn set_interval_ms(&mut self, interval_ms: u32);
    fn interval_ms(&self) -> u32;

    /// Begin producing ticks, starting a fresh period.
    fn start(&mut self);
    /// Stop producing ticks and forget any partial period.
    fn stop(&mut self);
    fn is_running(&self) -> bool;

    /// Account for `elapsed_ms` of wall time; returns how many ticks are due.
    fn advance(&mut self, elapsed_ms: u32) -> u32;

    /// Milliseconds until the next tick, or `None` while stopped.
    fn until_next_ms(&self) -> Option<u32>;
}

/// Fixed-period ticker driven by elapsed milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTicker {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
    max_catch_up: u32,
}

impl IntervalTicker {
    /// A stopped ticker with the given period.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Time already counted toward the next tick.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(brick_tetris_types::INITIAL_SPEED_MS)
    }
}

impl TickSource for IntervalTicker {
    /// Changing the period restarts the current one.
    fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.accumulated_ms = 0;
    }

    fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    fn start(&mut self) {
        self.running = true;
        self.accumulated_ms = 0;
    }

    fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = total / self.interval_ms;
        self.accumulated_ms = total % self.interval_ms;
        due.min(self.max_catch_up)
    }

    fn until_next_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms - self.accumulated_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_ticker_never_fires() {
        let mut t = IntervalTicker::new(100);
        assert_eq!(t.advance(10_000), 0);
        assert_eq!(t.until_next_ms(), None);
    }

    #[test]
    fn test_accumulates_partial_periods() {
        let mut t = IntervalTicker::new(100);
        t.start();
        assert_eq!(t.advance(60), 0);
        assert_eq!(t.until_next_ms(), Some(40));
        assert_eq!(t.advance(60), 1);
        assert_eq!(t.accumulated_ms(), 20);
        assert_eq!(t.advance(180), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut t = IntervalTicker::new(100).with_max_catch_up(3);
        t.start();
        assert_eq!(t.advance(1_000), 3);
    }

    #[test]
    fn test_interval_change_restarts_period() {
        let mut t = IntervalTicker::new(500);
        t.start();
        t.advance(450);
        t.set_interval_ms(420);
        assert_eq!(t.interval_ms(), 420);
        assert_eq!(t.advance(100), 0);
        assert_eq!(t.advance(320), 1);
    }

    #[test]
    fn test_stop_discards_progress() {
        let mut t = IntervalTicker::new(100);
        t.start();
        t.advance(90);
        t.stop();
        t.start();
        assert_eq!(t.advance(20), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut t = IntervalTicker::new(0);
        t.start();
        assert_eq!(t.interval_ms(), 1);
        assert_eq!(t.advance(2), 2);
    }
}
