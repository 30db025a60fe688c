//! Command-line argument definitions for `splice`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Report format written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per step followed by a summary sentence.
    #[default]
    Human,
    /// A single JSON document with step outcomes and content digests.
    Json,
}

/// Applies the WhatsApp toggle recipe to a source file.
#[derive(Parser, Debug)]
#[command(name = "splice", version)]
pub(crate) struct Cli {
    /// Fails when any step could not find its anchor or pattern.
    #[arg(long)]
    pub(crate) strict: bool,
    /// Controls how the step report is rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub(crate) format: OutputFormat,
    /// File to patch; overrides the configured target path.
    #[arg(value_name = "PATH")]
    pub(crate) path: Option<Utf8PathBuf>,
}
