//! Keyboard and mouse input mapping

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::CalcButton;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(CalcButton),
    /// Left click at a terminal cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::button_for_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(CalcButton::Equal),
            KeyCode::Esc | KeyCode::Delete | KeyCode::Backspace => {
                KeyAction::Press(CalcButton::Clear)
            }
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => KeyAction::None,
        }
    }

    /// Returns the button typed by a character key
    #[must_use]
    pub fn button_for_char(c: char) -> Option<CalcButton> {
        match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| CalcButton::digit(d as u8)),
            '+' => Some(CalcButton::Add),
            '-' => Some(CalcButton::Subtract),
            '*' | 'x' | 'X' => Some(CalcButton::Multiply),
            '/' => Some(CalcButton::Divide),
            '=' => Some(CalcButton::Equal),
            '.' | ',' => Some(CalcButton::Decimal),
            '%' => Some(CalcButton::Percent),
            'n' | 'N' | '_' => Some(CalcButton::Negative),
            'c' | 'C' => Some(CalcButton::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let action = handler.handle_key(key_event(KeyCode::Char(c)));
            let expected = CalcButton::from_label(&c.to_string()).unwrap();
            assert_eq!(action, KeyAction::Press(expected));
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for (c, btn) in [
            ('+', CalcButton::Add),
            ('-', CalcButton::Subtract),
            ('*', CalcButton::Multiply),
            ('x', CalcButton::Multiply),
            ('/', CalcButton::Divide),
            ('=', CalcButton::Equal),
        ] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(btn)
            );
        }
    }

    #[test]
    fn test_handle_modifier_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(CalcButton::Decimal)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Press(CalcButton::Percent)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            KeyAction::Press(CalcButton::Negative)
        );
    }

    #[test]
    fn test_handle_enter_evaluates() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(CalcButton::Equal)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Esc,
            KeyCode::Delete,
            KeyCode::Backspace,
            KeyCode::Char('c'),
        ] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(CalcButton::Clear)
            );
        }
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('a'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    // ===== Mouse tests =====

    #[test]
    fn test_left_click() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 7, 3);
        assert_eq!(handler.handle_mouse(event), KeyAction::Click { x: 7, y: 3 });
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(handler.handle_mouse(mouse_event(kind, 1, 1)), KeyAction::None);
        }
    }

    #[test]
    fn test_handle_event_dispatch() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_event(&Event::Key(key_event(KeyCode::Char('7')))),
            KeyAction::Press(CalcButton::Seven)
        );
        assert_eq!(
            handler.handle_event(&Event::Mouse(mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                2,
                2
            ))),
            KeyAction::Click { x: 2, y: 2 }
        );
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), KeyAction::None);
        assert_eq!(handler.handle_event(&Event::FocusGained), KeyAction::None);
    }
}
