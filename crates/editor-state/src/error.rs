//! Error types for editing transitions (thiserror-based).
//!
//! None of these are fatal: a transition that fails leaves the snapshot
//! untouched and the session simply skips the commit, so the user-visible
//! effect is that the requested edit does not apply.

use thiserror::Error;

/// Errors a transition function can reject an edit with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The referenced clip does not exist in the snapshot.
    #[error("clip not found: {clip_id}")]
    ClipNotFound { clip_id: String },

    /// Trim parameters violate ordering (`start >= end` or negative start).
    #[error("invalid trim range: start {start} .. end {end}")]
    InvalidTrimRange { start: f64, end: f64 },

    /// Split point at or outside the clip bounds would create a zero-length clip.
    #[error("split point {at} outside clip bounds ({start}, {end})")]
    SplitOutOfBounds { at: f64, start: f64, end: f64 },
}

/// Convenience Result type for editing transitions.
pub type EditResult<T> = Result<T, EditError>;
