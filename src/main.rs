//! Brick Game Tetris runner (default binary).
//!
//! `play` (the default) runs the game in the terminal using crossterm for
//! input and the framebuffer renderer for output. `simulate` runs a seeded
//! game headless and prints JSON lines to stdout.

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use brick_tetris::audio::{BellSink, NullSink, SoundBoard, SoundCue, SoundSink};
use brick_tetris::config::{Cli, GameConfig, Mode};
use brick_tetris::core::{GameObserver, GameSession, GameSnapshot};
use brick_tetris::engine::GameDriver;
use brick_tetris::engine::IntervalTicker;
use brick_tetris::input::{map_key, should_quit};
use brick_tetris::simulate::{self, Simulation};
use brick_tetris::term::{FrameBuffer, GameView, IntroAnimation, TerminalRenderer, Viewport};
use brick_tetris::types::{GameCommand, GameEvent};

/// Frame cadence while the intro animates.
const INTRO_FRAME_MS: u64 = 16;
/// Longest input wait when no tick is pending.
const IDLE_POLL_MS: u64 = 100;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::from_cli(&cli)?;
    init_logging(config.log_file.as_deref())?;

    match config.mode {
        Mode::Simulate { ticks } => {
            let sim = Simulation {
                seed: config.seed,
                ticks,
                drop_style: config.drop_style,
            };
            let stdout = io::stdout();
            simulate::run(&sim, &mut stdout.lock())?;
            Ok(())
        }
        Mode::Play => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

enum Screen {
    Game,
    Intro { started: Instant },
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    info!("play seed={} drop_style={:?}", config.seed, config.drop_style);

    let session = GameSession::seeded(config.seed).with_drop_style(config.drop_style);
    let mut driver = GameDriver::new(session, IntervalTicker::default());

    let sink: Box<dyn SoundSink> = if config.sound {
        Box::new(BellSink::new(io::stdout()))
    } else {
        Box::new(NullSink)
    };
    let sound = Rc::new(RefCell::new(SoundBoard::new(sink)));
    let observer = Rc::clone(&sound);
    driver.subscribe(move |e: &GameEvent| observer.borrow_mut().on_event(e));

    let intro = config.intro_ms.map(IntroAnimation::new);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut screen = Screen::Game;
    let mut last_advance = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let intro_at = match (&screen, &intro) {
            (Screen::Intro { started }, Some(anim)) => {
                Some((anim, started.elapsed().as_millis() as u64))
            }
            _ => None,
        };
        match intro_at {
            Some((anim, elapsed)) if anim.is_finished(elapsed) => {
                screen = Screen::Game;
                driver.command(GameCommand::Start);
                last_advance = Instant::now();
                continue;
            }
            Some((anim, elapsed)) => {
                view.render_intro_into(&anim.frame(elapsed), viewport, &mut fb);
            }
            None => {
                driver.snapshot_into(&mut snap);
                view.render_into(&snap, viewport, &mut fb);
            }
        }
        term.draw(&mut fb)?;

        // Input with timeout until the next tick or animation frame.
        let wait_ms = match screen {
            Screen::Intro { .. } => INTRO_FRAME_MS,
            Screen::Game => driver
                .until_next_tick_ms()
                .map_or(IDLE_POLL_MS, |ms| (ms as u64).min(IDLE_POLL_MS)),
        };
        if event::poll(Duration::from_millis(wait_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if matches!(screen, Screen::Game) {
                        match map_key(key, driver.phase()) {
                            Some(GameCommand::Start) if intro.is_some() => {
                                if let Err(e) = sound.borrow_mut().cue(SoundCue::GameStart) {
                                    warn!("start cue failed: {}", e);
                                }
                                screen = Screen::Intro {
                                    started: Instant::now(),
                                };
                            }
                            Some(command) => {
                                driver.command(command);
                            }
                            None => {}
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = Instant::now();
        let elapsed = now.duration_since(last_advance).as_millis() as u32;
        if elapsed > 0 {
            last_advance = now;
            driver.advance(elapsed);
        }
    }
}
