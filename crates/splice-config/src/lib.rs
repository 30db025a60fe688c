//! Layered configuration for the `splice` binary.
//!
//! Values resolve from built-in defaults, then a `splice.toml` file, then
//! `SPLICE_*` environment variables, then command-line flags. Later layers
//! win.

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_TARGET_PATH, default_log_filter, default_log_filter_string,
    default_log_format, default_target_path,
};
pub use logging::LogFormat;

/// Resolved configuration for one `splice` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SPLICE")]
pub struct Config {
    /// File patched when no path is given on the command line.
    #[serde(default = "default_target_path")]
    #[ortho_config(default = default_target_path())]
    target_path: Utf8PathBuf,
    /// `tracing` filter directive for diagnostics.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    log_filter: String,
    /// Diagnostic output format.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    log_format: LogFormat,
}

impl Config {
    /// Path of the file to patch.
    #[must_use]
    pub fn target_path(&self) -> &Utf8Path {
        &self.target_path
    }

    /// Filter directive handed to the tracing subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for diagnostics.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Replaces the target path, e.g. with a positional command-line argument.
    #[must_use]
    pub fn with_target_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.target_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_path: default_target_path(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}
