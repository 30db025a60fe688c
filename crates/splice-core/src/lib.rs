//! Idempotent structural text patching.
//!
//! This crate rewrites a source file held in memory as one string buffer. It
//! does not parse the target language; instead it offers two primitives that
//! are safe to re-run:
//!
//! - **Guarded insertion** via [`GuardedInsertion`]: insert a block after an
//!   anchor unless a marker proves it is already there.
//! - **Pattern replacement** via [`RewriteRule`]: replace the one region that
//!   matches a whitespace-tolerant [`PatternRule`] with a literal block.
//!
//! A [`Pipeline`] runs a fixed list of such steps and reports a
//! [`StepOutcome`] for each, so callers can tell "already applied" apart from
//! "the expected text is gone".
//!
//! # Example
//!
//! ```
//! use splice_core::{GuardedInsertion, PatternRule, Pipeline, RewriteRule, StepOutcome};
//!
//! let pipeline = Pipeline::new("demo")
//!     .with_insertion(
//!         "declare",
//!         GuardedInsertion::new("let a = 1;", "let b", "\nlet b = 2;")?,
//!     )
//!     .with_rewrite(
//!         "call",
//!         RewriteRule::new(PatternRule::compile("call", "show( a )")?, "show(a, b)")?,
//!     );
//!
//! let result = pipeline.apply_all("let a = 1;\nshow(\n    a\n);")?;
//! assert_eq!(result.output(), "let a = 1;\nlet b = 2;\nshow(a, b);");
//! assert!(result.reports().iter().all(|r| r.outcome() == StepOutcome::Applied));
//! # Ok::<(), splice_core::SpliceError>(())
//! ```

mod error;
mod insertion;
mod line_endings;
mod outcome;
mod pattern;
mod pipeline;
pub mod recipes;
mod rewriter;

pub use error::SpliceError;
pub use insertion::{GuardedInsertion, insert_after_anchor};
pub use line_endings::{LineEnding, dominant_line_ending, normalise_line_endings};
pub use outcome::{StepOutcome, StepReport, StepResult};
pub use pattern::PatternRule;
pub use pipeline::{Pipeline, PipelineResult};
pub use rewriter::{RewriteRule, replace_pattern};

#[cfg(test)]
mod tests;
