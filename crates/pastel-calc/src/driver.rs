//! Label-driven calculator drivers
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against both the bare state machine and the terminal app.

use crate::core::{CalcButton, CalcError, CalcResult, CalcState, EqualsMode};

/// Abstract driver for button-press scenarios
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Returns the display text
    fn display(&self) -> String;

    /// Returns the queued left-hand side, e.g. `"12 +"`
    fn pending(&self) -> Option<String>;

    /// Returns to the start-up state
    fn reset(&mut self);

    /// Presses each label in order, stopping at the first unknown one
    fn press_sequence(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }
}

/// Driver over a bare [`CalcState`]
#[derive(Debug, Default)]
pub struct StateDriver {
    state: CalcState,
}

impl StateDriver {
    /// Creates a new state driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state driver with the given equals behaviour
    #[must_use]
    pub fn with_equals_mode(equals_mode: EqualsMode) -> Self {
        Self {
            state: CalcState::with_equals_mode(equals_mode),
        }
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }
}

impl CalculatorDriver for StateDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let button = CalcButton::from_label(label).ok_or_else(|| CalcError::unknown_button(label))?;
        self.state.press(button);
        Ok(())
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn pending(&self) -> Option<String> {
        self.state.pending_expression()
    }

    fn reset(&mut self) {
        self.state.clear();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app, no terminal required
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            self.app.press_label(label)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending(&self) -> Option<String> {
            self.app.state().pending_expression()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each works with any CalculatorDriver in the default equals mode

/// Verifies digit entry and the leading-zero rule
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_sequence(&["1", "2", "3"])?;
    assert_eq!(driver.display(), "123");

    driver.reset();
    driver.press("5")?;
    assert_eq!(driver.display(), "5");
    Ok(())
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (labels, expected) in [
        (["7", "+", "3", "="], "10"),
        (["5", "-", "2", "="], "3"),
        (["6", "*", "7", "="], "42"),
        (["7", "/", "2", "="], "3"),
    ] {
        driver.reset();
        driver.press_sequence(&labels)?;
        assert_eq!(driver.display(), expected, "{labels:?}");
    }
    Ok(())
}

/// Verifies the division-by-zero error state and recovery
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_sequence(&["5", "/", "0", "="])?;
    assert_eq!(driver.display(), crate::core::ERROR_DISPLAY);
    assert_eq!(driver.pending(), None);

    driver.press("C")?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// Verifies that a second `=` leaves the display unchanged
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_sequence(&["9", "*", "9", "="])?;
    let first = driver.display();
    driver.press("=")?;
    assert_eq!(driver.display(), first);
    Ok(())
}

/// Verifies that unknown labels are rejected without changing state
pub fn verify_unknown_label<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press("4")?;
    let result = driver.press("sqrt");
    assert_eq!(result, Err(CalcError::UnknownButton("sqrt".into())));
    assert_eq!(driver.display(), "4");
    Ok(())
}
