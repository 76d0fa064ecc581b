//! Key mapping from terminal events to game input.
//!
//! The runner polls crossterm once per frame and feeds each key press
//! through [`map_key_event`]; order within a frame is preserved and no
//! event is delivered twice. There is no key-repeat machinery here -
//! whatever auto-repeat the terminal emits is applied as-is.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameKey, InputEvent};

/// Map a key press to a game input event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),

        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(InputEvent::Key(GameKey::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(InputEvent::Key(GameKey::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(InputEvent::Key(GameKey::Down)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputEvent::Key(GameKey::Up)),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::Key(GameKey::PauseToggle)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::Key(GameKey::Left))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::Key(GameKey::Right))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::Key(GameKey::Down))
        );

        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(InputEvent::Key(GameKey::Left))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputEvent::Key(GameKey::Right))
        );
    }

    #[test]
    fn test_rotate_key() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Key(GameKey::Up))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(InputEvent::Key(GameKey::Up))
        );
    }

    #[test]
    fn test_pause_key() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(InputEvent::Key(GameKey::PauseToggle))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(InputEvent::Key(GameKey::PauseToggle))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), None);
        // Plain 'c' without CONTROL is not quit.
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }
}
