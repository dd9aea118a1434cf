//! Integer arithmetic behind the four operator buttons

use crate::core::{CalcError, CalcResult};

/// A queued two-operand operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Truncating division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order (bottom to top)
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operation as `lhs <op> rhs`.
    ///
    /// Division truncates toward zero. Division by zero and results outside
    /// the `i64` range are errors rather than panics.
    pub fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<i64> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                // i64::MIN / -1 is the only overflowing quotient
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(CalcError::Overflow {
            lhs,
            symbol: self.symbol(),
            rhs,
        })
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
