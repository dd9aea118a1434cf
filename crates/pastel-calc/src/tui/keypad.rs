//! Keypad grid for the terminal calculator
//!
//! ```text
//! [ C ] [-/+] [ % ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! The bottom row is three buttons wide; `0` covers two columns.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use super::palette;
use crate::core::CalcButton;

/// Rows of the keypad, top to bottom
const LAYOUT: [&[CalcButton]; 5] = [
    &[
        CalcButton::Clear,
        CalcButton::Negative,
        CalcButton::Percent,
        CalcButton::Divide,
    ],
    &[
        CalcButton::Seven,
        CalcButton::Eight,
        CalcButton::Nine,
        CalcButton::Multiply,
    ],
    &[
        CalcButton::Four,
        CalcButton::Five,
        CalcButton::Six,
        CalcButton::Subtract,
    ],
    &[
        CalcButton::One,
        CalcButton::Two,
        CalcButton::Three,
        CalcButton::Add,
    ],
    &[CalcButton::Zero, CalcButton::Decimal, CalcButton::Equal],
];

/// A button placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The calculator button
    pub button: CalcButton,
    /// Grid row
    pub row: usize,
    /// First grid column covered
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let cols = 4;
        let mut buttons = Vec::with_capacity(CalcButton::ALL.len());
        for (row, line) in LAYOUT.iter().enumerate() {
            // short rows give the leftover width to their first button
            let extra = cols - line.len();
            let mut col = 0;
            for (i, &button) in line.iter().enumerate() {
                let span = if i == 0 { 1 + extra } else { 1 };
                buttons.push(KeypadButton {
                    button,
                    row,
                    col,
                    span,
                    pressed: false,
                });
                col += span;
            }
        }

        Self {
            buttons,
            cols,
            rows: LAYOUT.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the index of a calculator button
    #[must_use]
    pub fn find_button(&self, button: CalcButton) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights only the given button
    pub fn highlight(&mut self, button: CalcButton) {
        self.release_all();
        if let Some(idx) = self.find_button(button) {
            self.press_button(idx);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<CalcButton> {
        self.buttons.iter().find(|b| b.pressed).map(|b| b.button)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Size of one grid cell inside `area`, or `None` if it is too small
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = inner_area(area);
        let width = inner.width / self.cols as u16;
        let height = inner.height / self.rows as u16;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Converts a click position inside the bordered `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height
        {
            return None;
        }
        let (btn_width, btn_height) = self.cell_size(area)?;

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        if row < self.rows && col < self.cols {
            self.index_at(row, col)
        } else {
            None
        }
    }
}

/// Area inside the one-cell border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Widget for rendering the keypad
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(palette::SCREEN))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = self.keypad.cell_size(area) else {
            return;
        };
        if btn_width < 3 {
            return;
        }

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height;
            // one blank column between buttons
            let width = btn.span as u16 * btn_width - 1;
            let cell = Rect::new(x, y, width, btn_height.saturating_sub(u16::from(btn_height > 1)));

            let style = palette::button_style(btn.button, btn.pressed);
            buf.set_style(cell, style);

            let label = btn.button.label();
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + cell.height.saturating_sub(1) / 2;
            buf.set_stringn(label_x, label_y, label, width as usize, style);
        }
    }
}
