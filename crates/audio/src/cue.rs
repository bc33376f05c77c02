//! The sound cue catalog.

use brick_tetris_types::{GameEvent, Motion};

/// Start jingle; also the length of the intro animation.
pub const START_SOUND_MS: u64 = 12_000;
pub const MOVE_SOUND_MS: u64 = 500;
pub const LINE_CLEAR_SOUND_MS: u64 = 600;
pub const LEVEL_UP_SOUND_MS: u64 = 2_000;
pub const GAME_OVER_SOUND_MS: u64 = 2_000;

/// Playback priority. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    GameStart,
    Move,
    LineClear,
    LevelUp,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::GameStart,
        SoundCue::Move,
        SoundCue::LineClear,
        SoundCue::LevelUp,
        SoundCue::GameOver,
    ];

    pub fn priority(&self) -> Priority {
        match self {
            SoundCue::GameStart | SoundCue::GameOver => Priority::High,
            SoundCue::LineClear | SoundCue::LevelUp => Priority::Medium,
            SoundCue::Move => Priority::Low,
        }
    }

    /// How long the cue keeps the speaker busy.
    pub fn duration_ms(&self) -> u64 {
        match self {
            SoundCue::GameStart => START_SOUND_MS,
            SoundCue::Move => MOVE_SOUND_MS,
            SoundCue::LineClear => LINE_CLEAR_SOUND_MS,
            SoundCue::LevelUp => LEVEL_UP_SOUND_MS,
            SoundCue::GameOver => GAME_OVER_SOUND_MS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::GameStart => "gameStart",
            SoundCue::Move => "move",
            SoundCue::LineClear => "lineClear",
            SoundCue::LevelUp => "levelUp",
            SoundCue::GameOver => "gameOver",
        }
    }

    /// Cue triggered by an engine event, if any.
    ///
    /// Spawns and downward steps click; sideways moves and rotations are
    /// silent. The start cue belongs to the intro, not to `GameStarted`.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PieceSpawned { .. }
            | GameEvent::PieceMoved {
                motion: Motion::Down,
            } => Some(SoundCue::Move),
            GameEvent::LinesCleared { .. } => Some(SoundCue::LineClear),
            GameEvent::LevelUp { .. } => Some(SoundCue::LevelUp),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_tetris_types::TetrominoKind;

    #[test]
    fn priorities_are_ordered() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(SoundCue::GameOver.priority(), Priority::High);
        assert_eq!(SoundCue::LevelUp.priority(), Priority::Medium);
        assert_eq!(SoundCue::Move.priority(), Priority::Low);
    }

    #[test]
    fn event_mapping() {
        assert_eq!(
            SoundCue::for_event(&GameEvent::PieceSpawned {
                kind: TetrominoKind::T,
                color: 3
            }),
            Some(SoundCue::Move)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::PieceMoved {
                motion: Motion::Down
            }),
            Some(SoundCue::Move)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::PieceMoved {
                motion: Motion::Left
            }),
            None
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::LinesCleared { count: 2 }),
            Some(SoundCue::LineClear)
        );
        assert_eq!(SoundCue::for_event(&GameEvent::GameStarted), None);
        assert_eq!(
            SoundCue::for_event(&GameEvent::GameOver { score: 10 }),
            Some(SoundCue::GameOver)
        );
    }
}
