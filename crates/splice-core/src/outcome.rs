//! Per-step results reported by the pipeline.

use std::fmt;

use serde::Serialize;

/// What a single patch step did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step rewrote the buffer.
    Applied,
    /// The buffer already carries the step's result; nothing was changed.
    AlreadyApplied,
    /// The insertion anchor is missing; nothing was changed.
    AnchorNotFound,
    /// No region matched the pattern and the replacement is absent too.
    PatternNotFound,
}

impl StepOutcome {
    /// Returns whether the step changed the buffer.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns whether the step was skipped because the expected text shape
    /// was not present.
    ///
    /// A miss usually means the target drifted away from the shape the patch
    /// was written against.
    #[must_use]
    pub const fn is_miss(self) -> bool {
        matches!(self, Self::AnchorNotFound | Self::PatternNotFound)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Applied => "applied",
            Self::AlreadyApplied => "already applied",
            Self::AnchorNotFound => "anchor not found",
            Self::PatternNotFound => "pattern not found",
        };
        f.write_str(label)
    }
}

/// Buffer produced by one step together with what the step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    output: String,
    outcome: StepOutcome,
}

impl StepResult {
    pub(crate) const fn new(output: String, outcome: StepOutcome) -> Self {
        Self { output, outcome }
    }

    pub(crate) fn unchanged(buffer: &str, outcome: StepOutcome) -> Self {
        Self::new(buffer.to_owned(), outcome)
    }

    /// Returns the buffer after the step.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result, returning the buffer after the step.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns what the step did.
    #[must_use]
    pub const fn outcome(&self) -> StepOutcome {
        self.outcome
    }

    /// Returns whether the step changed the buffer.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.outcome.is_applied()
    }
}

/// Outcome of one named step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    step: String,
    outcome: StepOutcome,
}

impl StepReport {
    /// Creates a report for the named step.
    #[must_use]
    pub fn new(step: impl Into<String>, outcome: StepOutcome) -> Self {
        Self {
            step: step.into(),
            outcome,
        }
    }

    /// Returns the step name.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Returns the step outcome.
    #[must_use]
    pub const fn outcome(&self) -> StepOutcome {
        self.outcome
    }
}
