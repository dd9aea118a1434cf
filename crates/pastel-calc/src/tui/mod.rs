//! Terminal front-end for the calculator

mod app;
mod input;
mod keypad;
pub mod palette;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{fit_display, keypad_area, render, CalculatorUI};
