//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use super::palette;

/// Window title
pub const TITLE: &str = " Calculator ";

/// Key hints shown in the bottom border
pub const HELP: &str = " Enter = | Esc C | n -/+ | q quit ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the screen into display, status line and keypad
fn layout(screen: Rect) -> [Rect; 3] {
    let inner = Rect {
        x: screen.x.saturating_add(1),
        y: screen.y.saturating_add(1),
        width: screen.width.saturating_sub(2),
        height: screen.height.saturating_sub(2),
    };
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(7),
    ])
    .areas(inner)
}

/// Area the keypad occupies on a screen of the given size
#[must_use]
pub fn keypad_area(screen: Rect) -> Rect {
    layout(screen)[2]
}

/// Keeps the rightmost digits of `text` that fit in `width` cells
#[must_use]
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the display, right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let fg = if state.is_error() {
            palette::ERROR_TEXT
        } else {
            palette::DISPLAY_TEXT
        };
        let text = fit_display(state.display(), area.width.saturating_sub(2) as usize);

        Paragraph::new(Span::styled(
            text,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    /// Renders the pending operation or error message
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.state().is_error() {
            Style::default().fg(palette::ERROR_TEXT)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        };
        Paragraph::new(Span::styled(self.app.status_line(), style))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .title_bottom(HELP)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display, status, keypad] = layout(area);
        self.render_display(display, buf);
        self.render_status(status, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
    }
}
