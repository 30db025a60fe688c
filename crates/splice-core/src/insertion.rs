//! Guarded insertion of a text block after an anchor.
//!
//! The guard is a marker string that only exists once the insertion has
//! happened. While the marker is present the step never touches the buffer,
//! which is what makes re-running a patch safe.

use crate::error::SpliceError;
use crate::line_endings::{dominant_line_ending, normalise_line_endings};
use crate::outcome::{StepOutcome, StepResult};

/// Inserts `insertion` directly after the first occurrence of `anchor`.
///
/// Line breaks in `insertion` are written with the buffer's dominant line
/// ending; the rest of the buffer is copied as is.
///
/// The buffer is returned unchanged when `marker` already occurs anywhere in
/// it ([`StepOutcome::AlreadyApplied`]) or when `anchor` is empty or absent
/// ([`StepOutcome::AnchorNotFound`]).
#[must_use]
pub fn insert_after_anchor(
    buffer: &str,
    anchor: &str,
    marker: &str,
    insertion: &str,
) -> StepResult {
    if !marker.is_empty() && buffer.contains(marker) {
        return StepResult::unchanged(buffer, StepOutcome::AlreadyApplied);
    }

    let found = (!anchor.is_empty()).then(|| buffer.find(anchor)).flatten();
    let Some(start) = found else {
        return StepResult::unchanged(buffer, StepOutcome::AnchorNotFound);
    };

    let inserted = normalise_line_endings(insertion, dominant_line_ending(buffer));
    let (head, tail) = buffer.split_at(start.saturating_add(anchor.len()));
    let mut output = String::with_capacity(buffer.len().saturating_add(inserted.len()));
    output.push_str(head);
    output.push_str(&inserted);
    output.push_str(tail);

    StepResult::new(output, StepOutcome::Applied)
}

/// A validated anchor/marker/text triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardedInsertion {
    anchor: String,
    marker: String,
    text: String,
}

impl GuardedInsertion {
    /// Creates a guarded insertion.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::InvalidInsertion`] if the anchor or marker is
    /// empty, or if the inserted text does not itself contain the marker (the
    /// guard would then never trip and every run would insert again).
    pub fn new(
        anchor: impl Into<String>,
        marker: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, SpliceError> {
        let anchor_text = anchor.into();
        let marker_text = marker.into();
        let inserted_text = text.into();

        if anchor_text.is_empty() {
            return Err(SpliceError::invalid_insertion("anchor must not be empty"));
        }
        if marker_text.is_empty() {
            return Err(SpliceError::invalid_insertion(
                "idempotence marker must not be empty",
            ));
        }
        if !inserted_text.contains(&marker_text) {
            return Err(SpliceError::invalid_insertion(format!(
                "inserted text does not contain the idempotence marker '{marker_text}'"
            )));
        }

        Ok(Self {
            anchor: anchor_text,
            marker: marker_text,
            text: inserted_text,
        })
    }

    /// Applies the insertion to `buffer`.
    #[must_use]
    pub fn apply(&self, buffer: &str) -> StepResult {
        insert_after_anchor(buffer, &self.anchor, &self.marker, &self.text)
    }
}
