//! Serializes ticks and commands onto one [`GameSession`].
//!
//! The driver owns the session and its tick source. After every mutation it
//! drains the session's events, reprograms the ticker on speed changes, keeps
//! the ticker running only in phases that tick, and fans the events out to
//! subscribed observers.

use log::debug;

use brick_tetris_core::{GameObserver, GameSession, GameSnapshot, PieceSource, RandomPieces};
use brick_tetris_types::{GameCommand, GameEvent, GamePhase};

use crate::scheduler::{IntervalTicker, TickSource};

pub struct GameDriver<P = RandomPieces, T = IntervalTicker> {
    session: GameSession<P>,
    ticker: T,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameDriver<RandomPieces, IntervalTicker> {
    /// Driver over a seeded session and a default ticker.
    pub fn seeded(seed: u32) -> Self {
        Self::new(GameSession::seeded(seed), IntervalTicker::default())
    }
}

impl<P: PieceSource, T: TickSource> GameDriver<P, T> {
    pub fn new(session: GameSession<P>, mut ticker: T) -> Self {
        ticker.set_interval_ms(session.game_speed_ms());
        if !session.phase().ticks() {
            ticker.stop();
        }
        Self {
            session,
            ticker,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every future event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn session(&self) -> &GameSession<P> {
        &self.session
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    /// Apply a player command. Returns whether it had any effect.
    pub fn command(&mut self, command: GameCommand) -> bool {
        let applied = self.session.apply(command);
        self.dispatch();
        applied
    }

    /// One gravity step, regardless of the ticker.
    pub fn tick(&mut self) -> bool {
        let ticked = self.session.tick();
        self.dispatch();
        ticked
    }

    /// Feed elapsed wall time and run every tick that became due.
    ///
    /// Returns the number of ticks applied. Stops early when the phase
    /// stops ticking (pause or game over) or the interval changes.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.ticker.advance(elapsed_ms);
        let interval = self.ticker.interval_ms();
        let mut applied = 0;
        for _ in 0..due {
            if !self.session.phase().ticks() {
                break;
            }
            self.tick();
            applied += 1;
            // A speed change restarts the period; the rest of the batch was
            // counted at the old interval.
            if self.ticker.interval_ms() != interval {
                break;
            }
        }
        applied
    }

    /// Milliseconds until the ticker next fires, if it is running.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.ticker.until_next_ms()
    }

    fn dispatch(&mut self) {
        let Self {
            session,
            ticker,
            observers,
        } = self;

        for event in session.drain_events() {
            if let GameEvent::SpeedChanged { interval_ms } = event {
                debug!("tick interval set to {}ms", interval_ms);
                ticker.set_interval_ms(interval_ms);
            }
            for observer in observers.iter_mut() {
                observer.on_event(&event);
            }
        }

        let should_run = session.phase().ticks();
        if should_run != ticker.is_running() {
            if should_run {
                ticker.start();
            } else {
                ticker.stop();
            }
            debug!("ticker running={}", should_run);
        }
    }
}
