//! Game sound cues.
//!
//! Maps engine events to a small catalog of cues, arbitrates between them
//! with a priority gate so a long jingle is not trampled by move clicks, and
//! plays the result through a pluggable [`SoundSink`].

pub mod cue;
pub mod gate;
pub mod player;
pub mod sink;

pub use cue::{Priority, SoundCue};
pub use gate::SoundGate;
pub use player::{Clock, ManualClock, MonotonicClock, SoundBoard};
pub use sink::{AudioError, BellSink, NullSink, SoundSink};
