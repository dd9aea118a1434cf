//! Application configuration
//!
//! Read from an optional YAML file; command-line flags are layered on top.
//!
//! ```yaml
//! equals_mode: retain
//! log_file: /tmp/pastel-calc.log
//! log_filter: debug
//! mouse: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::EqualsMode;
use crate::error::{AppError, AppResult};

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Behaviour of the pending operator after `=`
    pub equals_mode: EqualsMode,
    /// File receiving log output; logging is discarded when unset
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Capture mouse clicks on the keypad
    pub mouse: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            equals_mode: EqualsMode::Reset,
            log_file: None,
            log_filter: "info".to_string(),
            mouse: true,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML text
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Checks values serde cannot
    pub fn validate(&self) -> AppResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(AppError::config("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Set equals mode
    #[must_use]
    pub const fn with_equals_mode(mut self, equals_mode: EqualsMode) -> Self {
        self.equals_mode = equals_mode;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Enable or disable mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}
