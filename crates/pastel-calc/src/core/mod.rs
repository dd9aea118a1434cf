//! Calculator core: buttons, arithmetic and the press-driven state machine
//!
//! Nothing in here knows about terminals or colours.

pub mod button;
mod operations;
pub mod state;

pub use button::{ButtonKind, CalcButton};
pub use operations::Operation;
pub use state::{handle_press, CalcState, EqualsMode, ERROR_DISPLAY};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit in a 64-bit integer
    #[error("Overflow: {lhs} {symbol} {rhs} exceeds the integer range")]
    Overflow {
        /// Left operand
        lhs: i64,
        /// Operator symbol
        symbol: &'static str,
        /// Right operand
        rhs: i64,
    },
    /// Sign toggle of a value with no positive counterpart
    #[error("Overflow: cannot negate {0}")]
    NegationOverflow(i64),
    /// A label that names no keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}

impl CalcError {
    /// Create an unknown button error
    #[must_use]
    pub fn unknown_button(label: impl Into<String>) -> Self {
        Self::UnknownButton(label.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        let err = CalcError::Overflow {
            lhs: i64::MAX,
            symbol: "+",
            rhs: 1,
        };
        let text = format!("{err}");
        assert!(text.starts_with("Overflow:"));
        assert!(text.contains(&i64::MAX.to_string()));
    }

    #[test]
    fn test_calc_error_display_negation_overflow() {
        let err = CalcError::NegationOverflow(i64::MIN);
        assert_eq!(format!("{err}"), format!("Overflow: cannot negate {}", i64::MIN));
    }

    #[test]
    fn test_calc_error_unknown_button() {
        let err = CalcError::unknown_button("sqrt");
        assert_eq!(err, CalcError::UnknownButton("sqrt".into()));
        assert_eq!(format!("{err}"), "Unknown button: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
