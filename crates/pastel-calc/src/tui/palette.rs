//! Button and screen colours

use ratatui::style::{Color, Modifier, Style};

use crate::core::{ButtonKind, CalcButton};

/// Operators and equals (#E6A4B4)
pub const OPERATOR: Color = Color::Rgb(0xE6, 0xA4, 0xB4);
/// Clear, sign toggle and percent (#C7DCA7)
pub const FUNCTION: Color = Color::Rgb(0xC7, 0xDC, 0xA7);
/// Digits and decimal point (#F6D6E3)
pub const DIGIT: Color = Color::Rgb(0xF6, 0xD6, 0xE3);
/// Screen background (#F3EEEA)
pub const SCREEN: Color = Color::Rgb(0xF3, 0xEE, 0xEA);
/// Display text
pub const DISPLAY_TEXT: Color = Color::Gray;
/// Display text in the error state
pub const ERROR_TEXT: Color = Color::Red;
/// Button label text
pub const LABEL: Color = Color::White;

/// Background colour of a button
#[must_use]
pub const fn button_color(button: CalcButton) -> Color {
    match button.kind() {
        ButtonKind::Operator(_) | ButtonKind::Equal => OPERATOR,
        ButtonKind::Clear => FUNCTION,
        ButtonKind::Modifier => match button {
            CalcButton::Decimal => DIGIT,
            _ => FUNCTION,
        },
        ButtonKind::Digit(_) => DIGIT,
    }
}

/// Full style of a button cell; highlighted buttons are drawn reversed
#[must_use]
pub fn button_style(button: CalcButton, highlighted: bool) -> Style {
    let style = Style::default()
        .fg(LABEL)
        .bg(button_color(button))
        .add_modifier(Modifier::BOLD);
    if highlighted {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_group() {
        for btn in [
            CalcButton::Add,
            CalcButton::Subtract,
            CalcButton::Multiply,
            CalcButton::Divide,
            CalcButton::Equal,
        ] {
            assert_eq!(button_color(btn), OPERATOR, "{btn}");
        }
    }

    #[test]
    fn test_function_group() {
        for btn in [CalcButton::Clear, CalcButton::Negative, CalcButton::Percent] {
            assert_eq!(button_color(btn), FUNCTION, "{btn}");
        }
    }

    #[test]
    fn test_digit_group_includes_decimal() {
        for d in 0..=9 {
            assert_eq!(button_color(CalcButton::digit(d).unwrap()), DIGIT);
        }
        assert_eq!(button_color(CalcButton::Decimal), DIGIT);
    }

    #[test]
    fn test_highlight_reverses() {
        let plain = button_style(CalcButton::Five, false);
        let lit = button_style(CalcButton::Five, true);
        assert!(!plain.add_modifier.contains(Modifier::REVERSED));
        assert!(lit.add_modifier.contains(Modifier::REVERSED));
    }
}
