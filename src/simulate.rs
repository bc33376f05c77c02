//! Headless simulation: a seeded game written out as JSON lines.
//!
//! A simple autopilot steers every new piece to a random rotation and column
//! so the run exercises clears and level-ups instead of stacking in the
//! middle. Each engine event becomes one line tagged with the tick it
//! happened on; a final line carries the end-of-run snapshot. The stream is
//! for debugging and replay comparison, not persistence.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::core::{GameSession, GameSnapshot, RandomSource, SimpleRng};
use crate::engine::{GameDriver, IntervalTicker, TickSource};
use crate::types::{DropStyle, GameCommand, GameEvent, GamePhase, BOARD_WIDTH};

/// Parameters of one headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    pub seed: u32,
    pub ticks: u32,
    pub drop_style: DropStyle,
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum Record<'a> {
    Event { tick: u32, event: &'a GameEvent },
    Final { ticks: u32, snapshot: &'a GameSnapshot },
}

/// Picks a rotation count and a target column for each new piece.
struct Autopilot {
    rng: SimpleRng,
}

impl Autopilot {
    fn new(seed: u32) -> Self {
        // Decorrelate from the piece sequence drawn off the same seed.
        Self {
            rng: SimpleRng::new(seed.rotate_left(16) ^ 0x9E37_79B9),
        }
    }

    fn steer(&mut self, driver: &mut GameDriver) {
        let turns = self.rng.next_below(4);
        let target = self.rng.next_below(BOARD_WIDTH as u32) as i8;

        for _ in 0..turns {
            driver.command(GameCommand::Rotate);
        }
        loop {
            let Some(active) = driver.session().active() else {
                return;
            };
            let step = match active.x.cmp(&target) {
                std::cmp::Ordering::Less => GameCommand::MoveRight,
                std::cmp::Ordering::Greater => GameCommand::MoveLeft,
                std::cmp::Ordering::Equal => return,
            };
            if !driver.command(step) {
                return;
            }
        }
    }
}

/// Run `sim` and write JSON lines to `out`. Returns the final snapshot.
///
/// Stops after `sim.ticks` ticks or at game over, whichever comes first.
pub fn run<W: Write>(sim: &Simulation, out: &mut W) -> Result<GameSnapshot> {
    let session = GameSession::seeded(sim.seed).with_drop_style(sim.drop_style);
    let mut driver = GameDriver::new(session, IntervalTicker::default());

    let pending = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    driver.subscribe(move |e: &GameEvent| sink.borrow_mut().push(*e));

    let mut pilot = Autopilot::new(sim.seed);
    let mut steered = 0;
    let mut tick = 0;

    driver.command(GameCommand::Start);
    loop {
        if driver.session().pieces_spawned() != steered {
            steered = driver.session().pieces_spawned();
            pilot.steer(&mut driver);
        }
        flush(&pending, tick, out)?;

        if tick >= sim.ticks || driver.phase() != GamePhase::Playing {
            break;
        }
        // Exactly one interval's worth of time: one tick.
        let interval = driver.ticker().interval_ms();
        tick += driver.advance(interval);
    }

    let snapshot = driver.snapshot();
    write_line(
        out,
        &Record::Final {
            ticks: tick,
            snapshot: &snapshot,
        },
    )?;
    out.flush()?;

    info!(
        "simulation seed={} ticks={} score={} lines={} phase={}",
        sim.seed,
        tick,
        snapshot.score,
        snapshot.lines_cleared,
        snapshot.phase.as_str()
    );
    Ok(snapshot)
}

fn flush<W: Write>(pending: &RefCell<Vec<GameEvent>>, tick: u32, out: &mut W) -> Result<()> {
    for event in pending.borrow_mut().drain(..) {
        write_line(out, &Record::Event { tick, event: &event })?;
    }
    Ok(())
}

fn write_line<W: Write>(out: &mut W, record: &Record<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(sim: &Simulation) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        run(sim, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn stream_starts_with_game_start_and_ends_with_final() {
        let out = lines(&Simulation {
            seed: 3,
            ticks: 40,
            drop_style: DropStyle::Double,
        });
        assert_eq!(out[0]["kind"], "event");
        assert_eq!(out[0]["event"]["type"], "gameStarted");
        assert_eq!(out[1]["event"]["type"], "speedChanged");
        assert_eq!(out[1]["event"]["intervalMs"], 500);

        let last = out.last().unwrap();
        assert_eq!(last["kind"], "final");
        assert_eq!(last["ticks"], 40);
        assert_eq!(last["snapshot"]["phase"], "playing");
        assert_eq!(last["snapshot"]["board"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn game_over_ends_the_run_early() {
        let out = lines(&Simulation {
            seed: 11,
            ticks: 1_000_000,
            drop_style: DropStyle::Double,
        });
        let last = out.last().unwrap();
        assert_eq!(last["snapshot"]["phase"], "gameOver");
        assert!(last["ticks"].as_u64().unwrap() < 1_000_000);
        let over = &out[out.len() - 2];
        assert_eq!(over["event"]["type"], "gameOver");
    }
}
