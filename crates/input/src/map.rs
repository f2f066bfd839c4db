//! Key mapping from terminal events to quiz intents.

use crate::types::{Guess, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Guesses
        KeyCode::Left | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('1') => {
            Some(Intent::Guess(Guess::Natural))
        }
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('2') => {
            Some(Intent::Guess(Guess::Enhanced))
        }

        // Next item
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Advance),

        // Reset
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),

        _ => None,
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_guess_keys() {
        for code in [KeyCode::Left, KeyCode::Char('n'), KeyCode::Char('1')] {
            assert_eq!(handle_key_event(key(code)), Some(Intent::Guess(Guess::Natural)));
        }
        for code in [KeyCode::Right, KeyCode::Char('E'), KeyCode::Char('2')] {
            assert_eq!(handle_key_event(key(code)), Some(Intent::Guess(Guess::Enhanced)));
        }
    }

    #[test]
    fn test_advance_and_reset_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Some(Intent::Advance));
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(Intent::Advance));
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(Intent::Reset));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_mapping() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(handle_key_event(ctrl_c), None);

        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_e), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
