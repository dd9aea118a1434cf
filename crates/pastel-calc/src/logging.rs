//! Log subscriber setup
//!
//! The terminal belongs to the UI, so logs only go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Without a log file
/// no subscriber is installed and events are dropped.
pub fn init_logging(config: &CalcConfig) -> AppResult<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| AppError::config(format!("invalid log filter: {e}")))?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::config(format!("logging already initialised: {e}")))
}
