//! Pastel Calc - a single-screen integer calculator
//!
//! The calculator is a small state machine driven by button presses. The
//! terminal front-end (feature `tui`, on by default) draws a display and a
//! pastel keypad and turns keys and clicks into presses.
//!
//! # Example
//!
//! ```rust
//! use pastel_calc::prelude::*;
//!
//! let mut state = CalcState::new();
//! for button in [CalcButton::Seven, CalcButton::Add, CalcButton::Three, CalcButton::Equal] {
//!     state.press(button);
//! }
//! assert_eq!(state.display(), "10");
//!
//! // Division by zero is an error state, not a crash
//! let state = [CalcButton::Five, CalcButton::Divide, CalcButton::Zero, CalcButton::Equal]
//!     .into_iter()
//!     .fold(CalcState::new(), handle_press);
//! assert_eq!(state.display(), ERROR_DISPLAY);
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;

#[cfg(feature = "tui")]
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::CalcConfig;
pub use error::{AppError, AppResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalcConfig;
    pub use crate::core::{
        handle_press, ButtonKind, CalcButton, CalcError, CalcResult, CalcState, EqualsMode,
        Operation, ERROR_DISPLAY,
    };
    pub use crate::driver::{CalculatorDriver, StateDriver};
    pub use crate::error::{AppError, AppResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
