//! Error types for patch construction and application.
//!
//! Misses (an absent anchor, a pattern with no match) are not errors: they
//! surface as [`crate::StepOutcome`] values so a patch can be re-run safely.
//! The variants here cover rules that can never work and buffers the engine
//! refuses to touch.

use thiserror::Error;

/// Errors from building or applying patch steps.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpliceError {
    /// A pattern template could not be compiled into a matcher.
    #[error("invalid pattern '{rule}': {message}")]
    InvalidPattern {
        /// Name of the rule that failed to compile.
        rule: String,
        /// Description of the failure.
        message: String,
    },

    /// A guarded insertion was configured in a way that breaks its guard.
    #[error("invalid insertion: {message}")]
    InvalidInsertion {
        /// Description of the misconfiguration.
        message: String,
    },

    /// A pattern matched more than one region of the buffer.
    #[error("pattern '{rule}' matched {count} regions; refusing to pick one")]
    AmbiguousMatch {
        /// Name of the rule that matched repeatedly.
        rule: String,
        /// Number of non-overlapping matches found.
        count: usize,
    },
}

impl SpliceError {
    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid insertion error.
    #[must_use]
    pub fn invalid_insertion(message: impl Into<String>) -> Self {
        Self::InvalidInsertion {
            message: message.into(),
        }
    }

    /// Creates an ambiguous match error.
    #[must_use]
    pub fn ambiguous_match(rule: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousMatch {
            rule: rule.into(),
            count,
        }
    }
}
