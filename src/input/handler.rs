use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press into a game command, if it is bound to one
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let command = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::Move(Direction::Up),
            KeyCode::Down => Command::Move(Direction::Down),
            KeyCode::Left => Command::Move(Direction::Left),
            KeyCode::Right => Command::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Command::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Command::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::Move(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => Command::Restart,

            _ => return None,
        };

        Some(command)
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

    fn press(handler: &InputHandler, code: KeyCode) -> Option<Command> {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Up),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Down),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Left),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Right),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('w')),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('a')),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('s')),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('d')),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            Some(Command::Move(Direction::Up))
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(press(&handler, KeyCode::Char('Q')), Some(Command::Quit));
        assert_eq!(press(&handler, KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn test_restart_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(press(&handler, KeyCode::Char('R')), Some(Command::Restart));
        assert_eq!(press(&handler, KeyCode::Char(' ')), Some(Command::Restart));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, KeyCode::Char('x')), None);
        assert_eq!(press(&handler, KeyCode::Enter), None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(Command::Quit));
    }
}
