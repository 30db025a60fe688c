//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use splice_core::SpliceError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    ReadTarget { path: Utf8PathBuf, source: io::Error },
    #[error("{path} is not valid UTF-8")]
    TargetEncoding { path: Utf8PathBuf },
    #[error("failed to patch {path}: {source}")]
    Pipeline {
        path: Utf8PathBuf,
        source: SpliceError,
    },
    #[error("failed to write {path}: {source}")]
    WriteTarget { path: Utf8PathBuf, source: io::Error },
    #[error("failed to serialise step report: {0}")]
    SerialiseReport(serde_json::Error),
    #[error("failed to write step report: {0}")]
    RenderReport(io::Error),
    #[error("strict mode: steps did not match: {steps}")]
    StrictModeViolation { steps: String },
}
