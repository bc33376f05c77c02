//! Key mapping from terminal events to game commands.

use crate::types::{GameCommand, GamePhase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the command it means in `phase`.
///
/// Pausing only stops gravity, so the movement keys stay live while paused.
pub fn map_key(key: KeyEvent, phase: GamePhase) -> Option<GameCommand> {
    match phase {
        GamePhase::Menu => match key.code {
            KeyCode::Enter => Some(GameCommand::Start),
            _ => None,
        },
        GamePhase::Playing | GamePhase::Paused => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(GameCommand::MoveLeft)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(GameCommand::MoveRight)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(GameCommand::SoftDrop)
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(GameCommand::Rotate)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
            _ => None,
        },
        GamePhase::GameOver => match key.code {
            KeyCode::Enter => Some(GameCommand::AcknowledgeGameOver),
            _ => None,
        },
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn playing(code: KeyCode) -> Option<GameCommand> {
        map_key(KeyEvent::from(code), GamePhase::Playing)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(playing(KeyCode::Left), Some(GameCommand::MoveLeft));
        assert_eq!(playing(KeyCode::Right), Some(GameCommand::MoveRight));
        assert_eq!(playing(KeyCode::Down), Some(GameCommand::SoftDrop));
        assert_eq!(playing(KeyCode::Up), Some(GameCommand::Rotate));

        assert_eq!(playing(KeyCode::Char('H')), Some(GameCommand::MoveLeft));
        assert_eq!(playing(KeyCode::Char('d')), Some(GameCommand::MoveRight));
        assert_eq!(playing(KeyCode::Char('j')), Some(GameCommand::SoftDrop));
        assert_eq!(playing(KeyCode::Char('W')), Some(GameCommand::Rotate));
        assert_eq!(playing(KeyCode::Char('p')), Some(GameCommand::TogglePause));
        assert_eq!(playing(KeyCode::Enter), None);
    }

    #[test]
    fn test_enter_depends_on_phase() {
        let enter = KeyEvent::from(KeyCode::Enter);
        assert_eq!(map_key(enter, GamePhase::Menu), Some(GameCommand::Start));
        assert_eq!(
            map_key(enter, GamePhase::GameOver),
            Some(GameCommand::AcknowledgeGameOver)
        );
        assert_eq!(map_key(enter, GamePhase::Paused), None);
    }

    #[test]
    fn test_paused_keeps_movement_keys() {
        let paused = |code| map_key(KeyEvent::from(code), GamePhase::Paused);
        assert_eq!(paused(KeyCode::Char('P')), Some(GameCommand::TogglePause));
        assert_eq!(paused(KeyCode::Left), Some(GameCommand::MoveLeft));
        assert_eq!(paused(KeyCode::Down), Some(GameCommand::SoftDrop));
        assert_eq!(paused(KeyCode::Up), Some(GameCommand::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left), GamePhase::Menu), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
