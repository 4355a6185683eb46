use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key to a game command. Keys without a binding give `None`.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        let action = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Action::Move(Direction::Up),
            KeyCode::Down => Action::Move(Direction::Down),
            KeyCode::Left => Action::Move(Direction::Left),
            KeyCode::Right => Action::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Action::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Action::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Action::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Action::Move(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,

            _ => return None,
        };

        Some(action)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> Option<Action> {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Up), Some(Action::Move(Direction::Up)));
        assert_eq!(press(&handler, KeyCode::Down), Some(Action::Move(Direction::Down)));
        assert_eq!(press(&handler, KeyCode::Left), Some(Action::Move(Direction::Left)));
        assert_eq!(press(&handler, KeyCode::Right), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('w')), Some(Action::Move(Direction::Up)));
        assert_eq!(press(&handler, KeyCode::Char('a')), Some(Action::Move(Direction::Left)));
        assert_eq!(press(&handler, KeyCode::Char('s')), Some(Action::Move(Direction::Down)));
        assert_eq!(press(&handler, KeyCode::Char('d')), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            Some(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(&handler, KeyCode::Char('Q')), Some(Action::Quit));
        assert_eq!(press(&handler, KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(press(&handler, KeyCode::Char('R')), Some(Action::Restart));
    }

    #[test]
    fn test_unbound_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('x')), None);
        assert_eq!(press(&handler, KeyCode::Enter), None);
        assert_eq!(press(&handler, KeyCode::Char('c')), None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(Action::Quit));
    }
}
