//! Single-region pattern replacement.
//!
//! A rewrite rule pairs a [`PatternRule`] with a literal replacement block.
//! Applying it replaces the one region the pattern matches and leaves every
//! other byte of the buffer untouched.

use crate::error::SpliceError;
use crate::line_endings::{dominant_line_ending, normalise_line_endings};
use crate::outcome::{StepOutcome, StepResult};
use crate::pattern::PatternRule;

/// A pattern rule together with the literal text that replaces its match.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: PatternRule,
    replacement: String,
    /// Recognises the replacement after reindentation; `None` for deletions.
    replacement_matcher: Option<PatternRule>,
}

impl RewriteRule {
    /// Creates a new rewrite rule.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::InvalidPattern`] if the replacement itself
    /// matches the pattern: such a rule would fire again on every run.
    pub fn new(pattern: PatternRule, replacement: impl Into<String>) -> Result<Self, SpliceError> {
        let replacement_text = replacement.into();

        if pattern.is_match(&replacement_text) {
            return Err(SpliceError::invalid_pattern(
                pattern.name(),
                "replacement matches its own pattern",
            ));
        }

        let replacement_matcher = if replacement_text.trim().is_empty() {
            None
        } else {
            Some(PatternRule::compile(pattern.name(), &replacement_text)?)
        };

        Ok(Self {
            pattern,
            replacement: replacement_text,
            replacement_matcher,
        })
    }

    /// Applies the rule to `buffer`.
    ///
    /// # Errors
    ///
    /// See [`replace_pattern`].
    pub fn apply(&self, buffer: &str) -> Result<StepResult, SpliceError> {
        replace_pattern(buffer, self)
    }

    fn replacement_present(&self, buffer: &str) -> bool {
        self.replacement_matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(buffer))
    }
}

/// Replaces the single region of `buffer` matched by the rule's pattern.
///
/// The replacement is written with the buffer's dominant line ending. When
/// nothing matches the buffer is returned unchanged, reported as
/// [`StepOutcome::AlreadyApplied`] if the replacement block is present (with
/// any indentation or line endings) and as [`StepOutcome::PatternNotFound`]
/// otherwise.
///
/// # Errors
///
/// Returns [`SpliceError::AmbiguousMatch`] if more than one region matches.
/// The buffer is never partially rewritten.
pub fn replace_pattern(buffer: &str, rule: &RewriteRule) -> Result<StepResult, SpliceError> {
    let Some(range) = rule.pattern.find_unique(buffer)? else {
        let outcome = if rule.replacement_present(buffer) {
            StepOutcome::AlreadyApplied
        } else {
            StepOutcome::PatternNotFound
        };
        return Ok(StepResult::unchanged(buffer, outcome));
    };

    let replacement = normalise_line_endings(&rule.replacement, dominant_line_ending(buffer));
    let mut output = buffer.to_owned();
    output.replace_range(range, &replacement);
    Ok(StepResult::new(output, StepOutcome::Applied))
}
