//! Key mapping from terminal events to commands.

use crate::types::{Command, Side};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Scoring
        KeyCode::Left | KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Score(Side::Us))
        }
        KeyCode::Right | KeyCode::Char('2') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Score(Side::Them))
        }

        // Match
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::EndMatch),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        // History
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::ToggleHistory),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::SelectNext),
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(Command::DeleteSelected)
        }
        // Uppercase only.
        KeyCode::Char('C') => Some(Command::ClearHistory),

        // Prompts
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::Confirm),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Cancel),

        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_scoring_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::Score(Side::Us))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::Score(Side::Them))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(Command::Score(Side::Us))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(Command::Score(Side::Them))
        );
    }

    #[test]
    fn test_match_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('e'))),
            Some(Command::EndMatch)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(Command::Reset)
        );
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(Command::ToggleHistory)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::SelectPrev)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(Command::SelectNext)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Delete)),
            Some(Command::DeleteSelected)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('C'))),
            Some(Command::ClearHistory)
        );
    }

    #[test]
    fn test_prompt_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Command::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('y'))),
            Some(Command::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Command::Cancel)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        // Ctrl-C quits; it never clears history.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
