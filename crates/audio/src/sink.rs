//! Sound output backends.

use std::io::Write;

use thiserror::Error;

use crate::cue::SoundCue;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("sound output disabled")]
    Disabled,
}

/// Something that can make a cue audible.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

impl<S: SoundSink + ?Sized> SoundSink for Box<S> {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        (**self).play(cue)
    }
}

/// Discards every cue. Used for `--no-sound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell (`BEL`, 0x07).
///
/// The terminal has one tone, so cues differ only in ring count. Move clicks
/// are silent unless enabled: a bell every gravity step is unbearable.
#[derive(Debug)]
pub struct BellSink<W: Write> {
    out: W,
    ring_moves: bool,
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ring_moves: false,
        }
    }

    pub fn with_move_bells(mut self, ring_moves: bool) -> Self {
        self.ring_moves = ring_moves;
        self
    }

    pub fn rings_for(&self, cue: SoundCue) -> usize {
        match cue {
            SoundCue::Move => usize::from(self.ring_moves),
            SoundCue::GameStart | SoundCue::LineClear => 1,
            SoundCue::LevelUp => 2,
            SoundCue::GameOver => 3,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for BellSink<W> {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        const BELLS: &[u8] = b"\x07\x07\x07";
        let n = self.rings_for(cue).min(BELLS.len());
        if n == 0 {
            return Ok(());
        }
        self.out.write_all(&BELLS[..n])?;
        self.out.flush()?;
        Ok(())
    }
}
