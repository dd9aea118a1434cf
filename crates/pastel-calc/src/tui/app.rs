//! Terminal application state
//!
//! Owns one calculator session plus the keypad highlight, and routes input
//! actions into button presses.

use ratatui::layout::Rect;
use tracing::{debug, warn};

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui;
use crate::config::CalcConfig;
use crate::core::{CalcButton, CalcError, CalcResult, CalcState, EqualsMode};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Calculator session
    state: CalcState,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_equals_mode(EqualsMode::default())
    }

    /// Creates a calculator app with the given equals behaviour
    #[must_use]
    pub fn with_equals_mode(equals_mode: EqualsMode) -> Self {
        Self {
            state: CalcState::with_equals_mode(equals_mode),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn from_config(config: &CalcConfig) -> Self {
        Self::with_equals_mode(config.equals_mode)
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button and highlights it on the keypad
    pub fn press(&mut self, button: CalcButton) {
        let was_error = self.state.is_error();
        self.state.press(button);
        self.keypad.highlight(button);
        debug!(
            button = button.label(),
            display = self.state.display(),
            pending = ?self.state.pending_operator(),
            "button pressed"
        );
        if let (false, Some(err)) = (was_error, self.state.error()) {
            warn!(error = %err, "evaluation failed");
        }
    }

    /// Presses the button with the given label
    pub fn press_label(&mut self, label: &str) -> CalcResult<()> {
        let button = CalcButton::from_label(label).ok_or_else(|| CalcError::unknown_button(label))?;
        self.press(button);
        Ok(())
    }

    /// Presses the keypad button under a click, if any
    pub fn click(&mut self, screen: Rect, x: u16, y: u16) -> Option<CalcButton> {
        let area = ui::keypad_area(screen);
        let button = self
            .keypad
            .hit_test(area, x, y)
            .and_then(|i| self.keypad.get_button(i))
            .map(|b| b.button)?;
        self.press(button);
        Some(button)
    }

    /// Applies one input action; `screen` is the full terminal area
    pub fn handle_action(&mut self, action: KeyAction, screen: Rect) {
        match action {
            KeyAction::Press(button) => self.press(button),
            KeyAction::Click { x, y } => {
                if self.click(screen, x, y).is_none() {
                    debug!(x, y, "click outside keypad");
                }
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Resets the calculator session and keypad highlight
    pub fn reset(&mut self) {
        self.state.clear();
        self.keypad.release_all();
    }

    /// Text for the status line under the display
    #[must_use]
    pub fn status_line(&self) -> String {
        match (self.state.error(), self.state.pending_expression()) {
            (Some(err), _) => err.to_string(),
            (None, Some(pending)) => pending,
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 24,
    };

    fn press_all(app: &mut CalculatorApp, labels: &[&str]) {
        for label in labels {
            app.press_label(label).unwrap();
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert!(!app.should_quit());
        assert_eq!(app.keypad().highlighted(), None);
    }

    #[test]
    fn test_app_default() {
        assert_eq!(CalculatorApp::default().display(), "0");
    }

    #[test]
    fn test_app_from_config() {
        let config = CalcConfig::new().with_equals_mode(EqualsMode::Retain);
        let app = CalculatorApp::from_config(&config);
        assert_eq!(app.state().equals_mode(), EqualsMode::Retain);
    }

    // ===== Press tests =====

    #[test]
    fn test_press_updates_display_and_highlight() {
        let mut app = CalculatorApp::new();
        app.press(CalcButton::Four);
        assert_eq!(app.display(), "4");
        assert_eq!(app.keypad().highlighted(), Some(CalcButton::Four));
    }

    #[test]
    fn test_press_label() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["7", "+", "3", "="]);
        assert_eq!(app.display(), "10");
    }

    #[test]
    fn test_press_label_unknown() {
        let mut app = CalculatorApp::new();
        let err = app.press_label("sqrt").unwrap_err();
        assert_eq!(err, CalcError::UnknownButton("sqrt".into()));
        assert_eq!(app.display(), "0");
    }

    // ===== Action tests =====

    #[test]
    fn test_handle_press_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Press(CalcButton::Nine), SCREEN);
        assert_eq!(app.display(), "9");
    }

    #[test]
    fn test_handle_quit_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Quit, SCREEN);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_none_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::None, SCREEN);
        assert_eq!(app.display(), "0");
        assert!(!app.should_quit());
    }

    // ===== Click tests =====

    #[test]
    fn test_click_on_every_button() {
        let area = ui::keypad_area(SCREEN);
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        let cell_w = (area.width - 2) / cols as u16;
        let cell_h = (area.height - 2) / rows as u16;

        for btn in keypad.buttons() {
            let mut app = CalculatorApp::new();
            let x = area.x + 1 + btn.col as u16 * cell_w;
            let y = area.y + 1 + btn.row as u16 * cell_h;
            assert_eq!(app.click(SCREEN, x, y), Some(btn.button));
        }
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.click(SCREEN, 0, 0), None);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_click_action_presses_button() {
        let area = ui::keypad_area(SCREEN);
        let mut app = CalculatorApp::new();
        // first cell inside the border is the clear button
        app.press(CalcButton::Eight);
        app.handle_action(
            KeyAction::Click {
                x: area.x + 1,
                y: area.y + 1,
            },
            SCREEN,
        );
        assert_eq!(app.display(), "0");
        assert_eq!(app.keypad().highlighted(), Some(CalcButton::Clear));
    }

    #[test]
    fn test_missed_click_action_changes_nothing() {
        let mut app = CalculatorApp::new();
        app.press(CalcButton::Four);
        app.handle_action(KeyAction::Click { x: 0, y: 0 }, SCREEN);
        assert_eq!(app.display(), "4");
        assert_eq!(app.keypad().highlighted(), Some(CalcButton::Four));
        assert!(!app.should_quit());
    }

    // ===== Reset tests =====

    #[test]
    fn test_reset() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", "2", "+"]);
        app.reset();
        assert_eq!(app.display(), "0");
        assert_eq!(app.state().pending_operator(), None);
        assert_eq!(app.keypad().highlighted(), None);
    }

    // ===== Status line tests =====

    #[test]
    fn test_status_line_idle() {
        assert_eq!(CalculatorApp::new().status_line(), "");
    }

    #[test]
    fn test_status_line_pending() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", "2", "*"]);
        assert_eq!(app.state().pending_operator(), Some(Operation::Multiply));
        assert_eq!(app.status_line(), "12 *");
    }

    #[test]
    fn test_status_line_error() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["5", "/", "0", "="]);
        assert_eq!(app.status_line(), "Division by zero");
    }
}
