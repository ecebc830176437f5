//! Clip selection state.
//!
//! The editor selects at most one video clip at a time; the tools panel acts
//! on whatever is selected.

use serde::{Deserialize, Serialize};

/// Tracks which video clip, if any, is currently selected.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionState {
    selected_clip: Option<String>,
}

impl SelectionState {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a clip, replacing any previous selection.
    pub fn select_clip(&mut self, clip_id: &str) {
        self.selected_clip = Some(clip_id.to_string());
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected_clip = None;
    }

    /// The selected clip id, if any.
    pub fn selected_clip(&self) -> Option<&str> {
        self.selected_clip.as_deref()
    }

    /// Check whether the given clip is selected.
    pub fn is_selected(&self, clip_id: &str) -> bool {
        self.selected_clip.as_deref() == Some(clip_id)
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_clip.is_none()
    }
}
