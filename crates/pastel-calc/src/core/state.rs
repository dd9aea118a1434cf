//! The calculator state machine
//!
//! A press is handled to completion against three fields: the display
//! string, the pending operand and the pending operator. The display is also
//! the input buffer, so every operator or equals press re-reads it as an
//! integer. Text that does not parse (including [`ERROR_DISPLAY`] and digit
//! runs too long for `i64`) reads as `0`.

use serde::{Deserialize, Serialize};

use crate::core::{ButtonKind, CalcButton, CalcError, Operation};

/// Text shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// What happens to the pending operator after `=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqualsMode {
    /// The operator is consumed; a second `=` leaves the display alone
    #[default]
    Reset,
    /// The operator and left operand are kept; a second `=` applies the
    /// operator again with the new display as right operand
    Retain,
}

/// Calculator session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcState {
    display: String,
    pending_operand: i64,
    pending_operator: Option<Operation>,
    error: Option<CalcError>,
    equals_mode: EqualsMode,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Creates a fresh state showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self::with_equals_mode(EqualsMode::default())
    }

    /// Creates a fresh state with the given equals behaviour
    #[must_use]
    pub fn with_equals_mode(equals_mode: EqualsMode) -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: 0,
            pending_operator: None,
            error: None,
            equals_mode,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the captured left operand
    #[must_use]
    pub fn pending_operand(&self) -> i64 {
        self.pending_operand
    }

    /// Returns the queued operation, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// Returns the error behind the current error display
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Returns true while the display shows [`ERROR_DISPLAY`]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the configured equals behaviour
    #[must_use]
    pub fn equals_mode(&self) -> EqualsMode {
        self.equals_mode
    }

    /// Returns the queued left-hand side, e.g. `"12 +"`
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        self.pending_operator
            .map(|op| format!("{} {}", self.pending_operand, op.symbol()))
    }

    /// Reads the display as an integer, `0` when it does not parse
    #[must_use]
    pub fn display_value(&self) -> i64 {
        self.display.parse().unwrap_or(0)
    }

    /// Applies one button press
    pub fn press(&mut self, button: CalcButton) {
        match button.kind() {
            ButtonKind::Digit(digit) => self.push_digit(digit),
            ButtonKind::Operator(op) => self.queue(op),
            ButtonKind::Equal => self.evaluate(),
            ButtonKind::Clear => self.clear(),
            ButtonKind::Modifier => self.modify(button),
        }
    }

    /// Resets display, operand, operator and error; keeps the equals mode
    pub fn clear(&mut self) {
        *self = Self::with_equals_mode(self.equals_mode);
    }

    fn push_digit(&mut self, digit: u8) {
        if self.display == "0" || self.is_error() {
            self.display.clear();
            self.error = None;
        }
        self.display.push(char::from(b'0' + digit));
    }

    fn queue(&mut self, op: Operation) {
        self.pending_operand = self.display_value();
        self.pending_operator = Some(op);
        self.error = None;
        self.display = "0".to_string();
    }

    fn evaluate(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        match op.apply(self.pending_operand, self.display_value()) {
            Ok(value) => {
                self.display = value.to_string();
                if self.equals_mode == EqualsMode::Reset {
                    self.pending_operator = None;
                }
            }
            Err(err) => self.fail(err),
        }
    }

    fn modify(&mut self, button: CalcButton) {
        if self.is_error() {
            return;
        }
        // digit runs wider than i64 are edited as text, never zeroed
        let Ok(value) = self.display.parse::<i64>() else {
            if button == CalcButton::Negative {
                self.display = match self.display.strip_prefix('-') {
                    Some(digits) => digits.to_string(),
                    None => format!("-{}", self.display),
                };
            }
            return;
        };
        let result = match button {
            CalcButton::Negative => value
                .checked_neg()
                .ok_or(CalcError::NegationOverflow(value)),
            CalcButton::Percent => Operation::Divide.apply(value, 100),
            // integer-only display: nothing to insert
            _ => return,
        };
        match result {
            Ok(value) => self.display = value.to_string(),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: CalcError) {
        self.display = ERROR_DISPLAY.to_string();
        self.pending_operand = 0;
        self.pending_operator = None;
        self.error = Some(err);
    }
}

/// Pure transition: returns the state after pressing `button`
#[must_use]
pub fn handle_press(mut state: CalcState, button: CalcButton) -> CalcState {
    state.press(button);
    state
}
