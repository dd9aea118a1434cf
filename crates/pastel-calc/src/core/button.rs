//! Keypad button identity
//!
//! Labels double as display text and as the identifiers accepted by
//! [`CalcButton::from_label`].

use crate::core::Operation;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcButton {
    /// Digit 0
    Zero,
    /// Digit 1
    One,
    /// Digit 2
    Two,
    /// Digit 3
    Three,
    /// Digit 4
    Four,
    /// Digit 5
    Five,
    /// Digit 6
    Six,
    /// Digit 7
    Seven,
    /// Digit 8
    Eight,
    /// Digit 9
    Nine,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `=`
    Equal,
    /// `C`
    Clear,
    /// `.`
    Decimal,
    /// `%`
    Percent,
    /// `-/+`
    Negative,
}

/// Behavioural category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digit entry with its value
    Digit(u8),
    /// Queues an operation
    Operator(Operation),
    /// Evaluates the pending operation
    Equal,
    /// Resets the calculator
    Clear,
    /// Decimal point, sign toggle and percent
    Modifier,
}

impl CalcButton {
    /// Every button, digits first
    pub const ALL: [Self; 19] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
        Self::Clear,
        Self::Decimal,
        Self::Percent,
        Self::Negative,
    ];

    /// Returns the button for a single decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        match d {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Returns the operator button for an operation
    #[must_use]
    pub const fn operator(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
        }
    }

    /// Returns the button's label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "=",
            Self::Clear => "C",
            Self::Decimal => ".",
            Self::Percent => "%",
            Self::Negative => "-/+",
        }
    }

    /// Looks a button up by its label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    /// Classifies the button
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::Zero => ButtonKind::Digit(0),
            Self::One => ButtonKind::Digit(1),
            Self::Two => ButtonKind::Digit(2),
            Self::Three => ButtonKind::Digit(3),
            Self::Four => ButtonKind::Digit(4),
            Self::Five => ButtonKind::Digit(5),
            Self::Six => ButtonKind::Digit(6),
            Self::Seven => ButtonKind::Digit(7),
            Self::Eight => ButtonKind::Digit(8),
            Self::Nine => ButtonKind::Digit(9),
            Self::Add => ButtonKind::Operator(Operation::Add),
            Self::Subtract => ButtonKind::Operator(Operation::Subtract),
            Self::Multiply => ButtonKind::Operator(Operation::Multiply),
            Self::Divide => ButtonKind::Operator(Operation::Divide),
            Self::Equal => ButtonKind::Equal,
            Self::Clear => ButtonKind::Clear,
            Self::Decimal | Self::Percent | Self::Negative => ButtonKind::Modifier,
        }
    }
}

impl std::fmt::Display for CalcButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
