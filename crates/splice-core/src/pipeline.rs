//! Ordered composition of patch steps over one buffer.
//!
//! Steps run in insertion order, each consuming the previous step's output.
//! There is no branching between steps: every step guards itself, so a
//! pipeline can be re-run over its own output without changing it.

use tracing::{debug, warn};

use crate::error::SpliceError;
use crate::insertion::GuardedInsertion;
use crate::outcome::{StepReport, StepResult};
use crate::rewriter::RewriteRule;

/// The work a pipeline step performs.
#[derive(Debug, Clone)]
enum StepAction {
    /// Insert text after an anchor unless a marker is present.
    Insert(GuardedInsertion),
    /// Replace the region matched by a pattern.
    Rewrite(RewriteRule),
}

#[derive(Debug, Clone)]
struct PipelineStep {
    name: String,
    action: StepAction,
}

impl PipelineStep {
    fn apply(&self, buffer: &str) -> Result<StepResult, SpliceError> {
        match &self.action {
            StepAction::Insert(insertion) => Ok(insertion.apply(buffer)),
            StepAction::Rewrite(rule) => rule.apply(buffer),
        }
    }
}

/// A fixed sequence of patch steps.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a guarded insertion step.
    #[must_use]
    pub fn with_insertion(self, name: impl Into<String>, insertion: GuardedInsertion) -> Self {
        self.with_step(name, StepAction::Insert(insertion))
    }

    /// Appends a pattern rewrite step.
    #[must_use]
    pub fn with_rewrite(self, name: impl Into<String>, rule: RewriteRule) -> Self {
        self.with_step(name, StepAction::Rewrite(rule))
    }

    fn with_step(mut self, name: impl Into<String>, action: StepAction) -> Self {
        self.steps.push(PipelineStep {
            name: name.into(),
            action,
        });
        self
    }

    /// Returns the pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs every step over `buffer`.
    ///
    /// Each step edits only the region it targets; inserted text takes the
    /// buffer's dominant line ending and every other byte, line breaks
    /// included, is copied through. When no step applies the output is the
    /// input.
    ///
    /// # Errors
    ///
    /// Returns the first step error (for example
    /// [`SpliceError::AmbiguousMatch`]). Later steps are not run.
    pub fn apply_all(&self, buffer: &str) -> Result<PipelineResult, SpliceError> {
        let mut current = buffer.to_owned();
        let mut reports = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let result = step.apply(&current)?;
            let outcome = result.outcome();
            if outcome.is_miss() {
                warn!(
                    pipeline = %self.name,
                    step = %step.name,
                    %outcome,
                    "expected text shape not found; step skipped"
                );
            } else {
                debug!(pipeline = %self.name, step = %step.name, %outcome, "step finished");
            }
            reports.push(StepReport::new(step.name.clone(), outcome));
            current = result.into_output();
        }

        let changed = current != buffer;

        Ok(PipelineResult {
            output: current,
            reports,
            changed,
        })
    }
}

/// Final buffer and per-step reports of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    output: String,
    reports: Vec<StepReport>,
    changed: bool,
}

impl PipelineResult {
    /// Returns the transformed buffer.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the result, returning the transformed buffer.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Returns one report per step, in execution order.
    #[must_use]
    pub fn reports(&self) -> &[StepReport] {
        &self.reports
    }

    /// Returns whether the output differs from the input.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Returns the reports of steps that skipped because their expected text
    /// was missing.
    #[must_use]
    pub fn misses(&self) -> impl Iterator<Item = &StepReport> {
        self.reports
            .iter()
            .filter(|report| report.outcome().is_miss())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::StepOutcome;
    use crate::pattern::PatternRule;

    fn pipeline() -> Pipeline {
        let insertion = GuardedInsertion::new("let a = 1;", "let b", "\nlet b = 2;")
            .expect("insertion");
        let pattern = PatternRule::compile("call", "show( a )").expect("pattern");
        let rule = RewriteRule::new(pattern, "show(a, b)").expect("rule");
        Pipeline::new("test")
            .with_insertion("declare", insertion)
            .with_rewrite("call", rule)
    }

    fn outcomes(result: &PipelineResult) -> Vec<StepOutcome> {
        result.reports().iter().map(StepReport::outcome).collect()
    }

    #[test]
    fn steps_run_in_order_over_the_same_buffer() {
        let result = pipeline().apply_all("let a = 1;\nshow(a);\n").expect("apply");

        assert_eq!(result.output(), "let a = 1;\nlet b = 2;\nshow(a, b);\n");
        assert_eq!(outcomes(&result), [StepOutcome::Applied, StepOutcome::Applied]);
        assert!(result.changed());
    }

    #[test]
    fn rerun_reports_already_applied() {
        let pipeline = pipeline();
        let first = pipeline.apply_all("let a = 1;\nshow(a);\n").expect("first");
        let second = pipeline.apply_all(first.output()).expect("second");

        assert_eq!(second.output(), first.output());
        assert!(!second.changed());
        assert_eq!(
            outcomes(&second),
            [StepOutcome::AlreadyApplied, StepOutcome::AlreadyApplied]
        );
    }

    #[test]
    fn misses_are_collected_without_failing() {
        let result = pipeline().apply_all("unrelated\n").expect("apply");

        assert_eq!(result.output(), "unrelated\n");
        let missed: Vec<_> = result.misses().map(StepReport::step).collect();
        assert_eq!(missed, ["declare", "call"]);
    }

    #[test]
    fn crlf_input_keeps_crlf_output() {
        let result = pipeline()
            .apply_all("let a = 1;\r\nshow(\r\n  a\r\n);\r\n")
            .expect("apply");

        assert_eq!(result.output(), "let a = 1;\r\nlet b = 2;\r\nshow(a, b);\r\n");
    }

    #[test]
    fn lines_outside_edits_keep_their_own_endings() {
        let input = "// lf header\nlet a = 1;\r\nshow(\r\n  a\r\n);\r\n// lf trailer\n";

        let result = pipeline().apply_all(input).expect("apply");

        assert_eq!(
            result.output(),
            "// lf header\nlet a = 1;\r\nlet b = 2;\r\nshow(a, b);\r\n// lf trailer\n"
        );
    }

    #[test]
    fn untouched_mixed_input_is_returned_verbatim() {
        let input = "x\r\ny\nz\r\n";
        let result = pipeline().apply_all(input).expect("apply");

        assert_eq!(result.output(), input);
        assert!(!result.changed());
    }
}
