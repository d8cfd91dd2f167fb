//! Key-to-intent mapping for the play loop.

use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent};

/// What the player asked for this turn.
///
/// `Unknown` never reaches the engine; the caller reports it as invalid
/// input and reads the next key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one cell in a cardinal direction
    Move(Direction),
    /// Leave the game
    Quit,
    /// Anything unmapped
    Unknown,
}

/// Converts a key event to a player intent.
///
/// Arrow keys and WASD both move; `q` or Escape quits.
pub fn key_to_input(key: KeyEvent) -> PlayerInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => PlayerInput::Move(Direction::North),
        KeyCode::Down | KeyCode::Char('s') => PlayerInput::Move(Direction::South),
        KeyCode::Left | KeyCode::Char('a') => PlayerInput::Move(Direction::West),
        KeyCode::Right | KeyCode::Char('d') => PlayerInput::Move(Direction::East),
        KeyCode::Esc | KeyCode::Char('q') => PlayerInput::Quit,
        _ => PlayerInput::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrows_and_wasd_agree() {
        assert_eq!(
            key_to_input(key(KeyCode::Up)),
            PlayerInput::Move(Direction::North)
        );
        assert_eq!(
            key_to_input(key(KeyCode::Char('w'))),
            PlayerInput::Move(Direction::North)
        );
        assert_eq!(
            key_to_input(key(KeyCode::Left)),
            PlayerInput::Move(Direction::West)
        );
        assert_eq!(
            key_to_input(key(KeyCode::Char('d'))),
            PlayerInput::Move(Direction::East)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_input(key(KeyCode::Esc)), PlayerInput::Quit);
        assert_eq!(key_to_input(key(KeyCode::Char('q'))), PlayerInput::Quit);
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(key_to_input(key(KeyCode::Char('x'))), PlayerInput::Unknown);
        assert_eq!(key_to_input(key(KeyCode::Enter)), PlayerInput::Unknown);
        assert_eq!(key_to_input(key(KeyCode::Tab)), PlayerInput::Unknown);
    }
}
