//! Rendering of the per-step report printed after a run.

use std::io::Write;

use camino::Utf8Path;
use serde::Serialize;
use sha2::{Digest, Sha256};
use splice_core::{PipelineResult, StepReport};

use crate::AppError;
use crate::cli::OutputFormat;

/// Summary of one patch run, serialised verbatim for `--format json`.
#[derive(Debug, Serialize)]
pub(crate) struct PatchReport<'a> {
    path: &'a Utf8Path,
    recipe: &'a str,
    changed: bool,
    steps: &'a [StepReport],
    input_sha256: String,
    output_sha256: String,
}

impl<'a> PatchReport<'a> {
    pub(crate) fn new(
        path: &'a Utf8Path,
        recipe: &'a str,
        input: &str,
        result: &'a PipelineResult,
    ) -> Self {
        Self {
            path,
            recipe,
            changed: result.changed(),
            steps: result.reports(),
            input_sha256: sha256_hex(input),
            output_sha256: sha256_hex(result.output()),
        }
    }

    pub(crate) fn render(
        &self,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<(), AppError> {
        match format {
            OutputFormat::Human => self.render_human(out),
            OutputFormat::Json => self.render_json(out),
        }
    }

    fn render_human(&self, out: &mut impl Write) -> Result<(), AppError> {
        for step in self.steps {
            writeln!(out, "{}: {}", step.step(), step.outcome())
                .map_err(AppError::RenderReport)?;
        }
        let summary = if self.changed {
            "Patch applied successfully."
        } else {
            "No changes were necessary."
        };
        writeln!(out, "{summary}").map_err(AppError::RenderReport)
    }

    fn render_json(&self, out: &mut impl Write) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self).map_err(AppError::SerialiseReport)?;
        writeln!(out, "{json}").map_err(AppError::RenderReport)
    }
}

fn sha256_hex(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
