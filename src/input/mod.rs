//! Keyboard handling: raw key events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key event to a game action.
///
/// Bindings follow the in-game legend: arrows or a/d/s move, r or Up
/// rotates, space pauses, q or Esc quits.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::PauseToggle),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn rotate_pause_quit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Rotate)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::PauseToggle)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(GameAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }
}
