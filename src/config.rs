//! Command-line options and the validated game configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::audio::cue::START_SOUND_MS;
use crate::types::DropStyle;

/// Longest intro accepted on the command line.
pub const MAX_INTRO_MS: u64 = 60_000;

/// Brick Game style Tetris in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "brick-tetris",
    version,
    about = "Brick Game style Tetris in the terminal.",
    long_about = "Brick Game style Tetris in the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move    Up  Rotate    Down  Drop\n  \
        P  Pause    Enter  Start / back to menu    Q / Esc  Quit\n\n\
        `simulate` runs a seeded game headless and prints events as JSON lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub game: GameArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Play in the terminal (default).
    Play,
    /// Run a seeded game without a terminal and print JSON lines.
    Simulate {
        /// Number of gravity ticks to run.
        #[arg(long, default_value = "1000", value_name = "N")]
        ticks: u32,
    },
}

#[derive(Debug, Clone, Args)]
pub struct GameArgs {
    /// RNG seed. Defaults to the clock when playing and 1 when simulating.
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u32>,

    /// Soft drop behaviour: two steps per key press, or one.
    #[arg(long, global = true, default_value = "double")]
    pub drop_style: DropStyleArg,

    /// Disable sound cues.
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Skip the start animation.
    #[arg(long, global = true)]
    pub no_intro: bool,

    /// Start animation length in ms. Defaults to the start jingle length when
    /// sound is on.
    #[arg(long, global = true, value_name = "MS")]
    pub intro_ms: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info).
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DropStyleArg {
    #[default]
    Double,
    Single,
}

impl From<DropStyleArg> for DropStyle {
    fn from(arg: DropStyleArg) -> Self {
        match arg {
            DropStyleArg::Double => DropStyle::Double,
            DropStyleArg::Single => DropStyle::Single,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--ticks must be at least 1")]
    ZeroTicks,
    #[error("--intro-ms cannot be combined with --no-intro")]
    IntroConflict,
    #[error("--intro-ms {0} exceeds the {max}ms limit", max = MAX_INTRO_MS)]
    IntroTooLong(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Play,
    Simulate { ticks: u32 },
}

/// Everything the binary needs, checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub seed: u32,
    pub drop_style: DropStyle,
    pub sound: bool,
    /// Intro length, or `None` to start straight from the menu.
    pub intro_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let args = &cli.game;
        let mode = match cli.command.unwrap_or(Command::Play) {
            Command::Play => Mode::Play,
            Command::Simulate { ticks: 0 } => return Err(ConfigError::ZeroTicks),
            Command::Simulate { ticks } => Mode::Simulate { ticks },
        };

        let intro_ms = match (args.no_intro, args.intro_ms) {
            (true, Some(_)) => return Err(ConfigError::IntroConflict),
            (true, None) => None,
            (false, Some(ms)) if ms > MAX_INTRO_MS => return Err(ConfigError::IntroTooLong(ms)),
            (false, Some(ms)) => Some(ms),
            (false, None) if !args.no_sound => Some(START_SOUND_MS),
            (false, None) => None,
        };

        let seed = match (args.seed, mode) {
            (Some(seed), _) => seed,
            (None, Mode::Simulate { .. }) => 1,
            (None, Mode::Play) => clock_seed(),
        };

        Ok(Self {
            mode,
            seed,
            drop_style: args.drop_style.into(),
            sound: !args.no_sound,
            intro_ms,
            log_file: args.log_file.clone(),
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
