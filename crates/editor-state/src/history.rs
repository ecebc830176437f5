//! Linear snapshot-based undo/redo history.
//!
//! The history is a single ordered sequence of committed snapshots plus a
//! cursor. Committing after an undo truncates the redo tail, so the sequence
//! never branches and a discarded future is gone for good.
//!
//! # Usage
//!
//! ```
//! use vd_editor_state::{EditorHistory, EditorSnapshot};
//!
//! let mut history = EditorHistory::new(100);
//! history.commit("Import video", EditorSnapshot::default());
//!
//! if let Some(prev) = history.undo() {
//!     // restore the working state from `prev`
//!     let _ = prev;
//! }
//! ```

use crate::snapshot::EditorSnapshot;

/// Default maximum number of history entries before the oldest is evicted.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// A single committed entry in the history.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// Human-readable label describing the edit (e.g., "Trim clip").
    pub label: String,
    /// The state snapshot after the edit was applied.
    pub snapshot: EditorSnapshot,
    /// When this entry was committed.
    pub timestamp: std::time::Instant,
}

/// Ordered sequence of snapshots with a current-position cursor.
///
/// - `cursor == None` means nothing has been committed yet.
/// - Otherwise `entries[cursor]` is the current state, entries before it are
///   the undo past and entries after it are the redo future.
#[derive(Clone, Debug)]
pub struct EditorHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl Default for EditorHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl EditorHistory {
    /// Create a history with the given maximum depth (at least 1).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_entries: max_entries.max(1),
        }
    }

    /// Commit a new snapshot as the current state.
    ///
    /// Discards any redo tail beyond the cursor, appends the snapshot, and
    /// moves the cursor to it. Always succeeds; once the tail is discarded it
    /// is permanently unreachable.
    pub fn commit(&mut self, label: &str, snapshot: EditorSnapshot) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        if keep < self.entries.len() {
            tracing::debug!(discarded = self.entries.len() - keep, "Redo tail discarded");
            self.entries.truncate(keep);
        }

        self.entries.push(HistoryEntry {
            label: label.to_string(),
            snapshot,
            timestamp: std::time::Instant::now(),
        });

        // Enforce max history depth, evicting the oldest entries.
        while self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);

        tracing::debug!(label, depth = self.entries.len(), "Snapshot committed");
    }

    /// Step back one entry and return the new current snapshot.
    ///
    /// Returns `None` when there is nothing earlier to go back to (cursor at
    /// the first entry, or empty history); the caller keeps its current state.
    pub fn undo(&mut self) -> Option<&EditorSnapshot> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                let entry = &self.entries[i - 1];
                tracing::debug!(label = %entry.label, position = i - 1, "Undo");
                Some(&entry.snapshot)
            }
            _ => None,
        }
    }

    /// Step forward one entry and return the new current snapshot.
    ///
    /// Returns `None` when there is no redo future; the caller keeps its
    /// current state.
    pub fn redo(&mut self) -> Option<&EditorSnapshot> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                let entry = &self.entries[i + 1];
                tracing::debug!(label = %entry.label, position = i + 1, "Redo");
                Some(&entry.snapshot)
            }
            _ => None,
        }
    }

    /// The current snapshot, or `None` if nothing has been committed.
    pub fn current(&self) -> Option<&EditorSnapshot> {
        self.cursor.map(|i| &self.entries[i].snapshot)
    }

    /// Whether undo would change state.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    /// Whether redo would change state.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    /// Label of the edit that would be undone next (the current entry).
    pub fn undo_label(&self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => Some(self.entries[i].label.as_str()),
            _ => None,
        }
    }

    /// Label of the edit that would be redone next.
    pub fn redo_label(&self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => Some(self.entries[i + 1].label.as_str()),
            _ => None,
        }
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of all entries in commit order. The current entry is at
    /// `position()`.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Cursor position, or `None` when empty.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
        tracing::debug!("History cleared");
    }

    /// The maximum number of entries.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Set the maximum number of entries, evicting the oldest as needed.
    /// The cursor keeps pointing at the same entry where possible.
    pub fn set_max_entries(&mut self, max: usize) {
        self.max_entries = max.max(1);
        while self.entries.len() > self.max_entries {
            self.entries.remove(0);
            self.cursor = self.cursor.map(|i| i.saturating_sub(1));
        }
    }
}
