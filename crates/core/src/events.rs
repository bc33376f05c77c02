//! Notification plumbing between the session and the presentation layer.
//!
//! The session only ever appends to its event buffer; whoever drives it
//! drains the buffer and fans events out to [`GameObserver`]s. Observers get
//! a shared reference and have no path back into the session.

use crate::types::GameEvent;

/// Receives engine notifications.
///
/// Implementations must not block; anything slow belongs on the observer's
/// own thread or queue.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// An observer that just records what it saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = 0;
        {
            let mut obs = |_: &GameEvent| seen += 1;
            obs.on_event(&GameEvent::GameStarted);
            obs.on_event(&GameEvent::PieceLocked);
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn event_log_counts() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::LinesCleared { count: 2 });
        log.on_event(&GameEvent::PieceLocked);
        log.on_event(&GameEvent::LinesCleared { count: 1 });
        assert_eq!(
            log.count(|e| matches!(e, GameEvent::LinesCleared { .. })),
            2
        );
        log.clear();
        assert!(log.events().is_empty());
    }
}
