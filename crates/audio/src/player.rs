//! Event-driven cue playback.
//!
//! [`SoundBoard`] subscribes to engine events, maps them to cues, runs them
//! through a [`SoundGate`], and hands the survivors to a [`SoundSink`]. The
//! first sink failure disables sound for the rest of the run.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use log::{debug, warn};

use brick_tetris_core::GameObserver;
use brick_tetris_types::GameEvent;

use crate::cue::SoundCue;
use crate::gate::SoundGate;
use crate::sink::{AudioError, SoundSink};

/// Millisecond time source for the gate.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-advanced clock; clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

pub struct SoundBoard<S, C = MonotonicClock> {
    sink: S,
    clock: C,
    gate: SoundGate,
    enabled: bool,
    /// Move clicks only sound while a game is in progress.
    moves_allowed: bool,
    played: u32,
}

impl<S: SoundSink> SoundBoard<S, MonotonicClock> {
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, MonotonicClock::new())
    }
}

impl<S: SoundSink, C: Clock> SoundBoard<S, C> {
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self {
            sink,
            clock,
            gate: SoundGate::new(),
            enabled: true,
            moves_allowed: false,
            played: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of cues that reached the sink.
    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn gate(&self) -> &SoundGate {
        &self.gate
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Offer `cue` to the gate and play it if admitted.
    ///
    /// Returns `Ok(true)` when the sink received the cue.
    pub fn cue(&mut self, cue: SoundCue) -> Result<bool, AudioError> {
        if !self.enabled {
            return Err(AudioError::Disabled);
        }
        if cue == SoundCue::Move && !self.moves_allowed {
            return Ok(false);
        }

        let now = self.clock.now_ms();
        if !self.gate.admit(cue, now) {
            debug!("sound {} dropped, speaker busy", cue.as_str());
            return Ok(false);
        }

        if let Err(e) = self.sink.play(cue) {
            warn!("sound disabled: {}", e);
            self.enabled = false;
            return Err(e);
        }
        self.played += 1;
        Ok(true)
    }

    fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted => self.moves_allowed = true,
            GameEvent::GameOver { .. } => self.moves_allowed = false,
            _ => {}
        }

        if let Some(cue) = SoundCue::for_event(event) {
            // Failures are logged and latched in `cue`.
            let _ = self.cue(cue);
        }
    }
}

impl<S: SoundSink, C: Clock> GameObserver for SoundBoard<S, C> {
    fn on_event(&mut self, event: &GameEvent) {
        if self.enabled {
            self.handle(event);
        }
    }
}
