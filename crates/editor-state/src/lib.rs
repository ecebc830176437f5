//! `vd-editor-state` — Editor state management for the VideoDirector core.
//!
//! This crate provides:
//!
//! - **`EditorSnapshot`**: Immutable value describing the complete editor state
//!   (video clips, audio clips, text overlays, global effects).
//! - **`EditorHistory`**: Linear undo/redo history over snapshots.
//! - **Transition functions**: Pure edits (trim, split, delete, speed, volume,
//!   effects, text, import) mapping a snapshot to a new snapshot.
//! - **`EditorSession`**: Facade tying working state, history, selection, and
//!   playback together for the UI, import, and preview collaborators.
//!
//! # Architecture
//!
//! ```text
//! EditorSession (facade)
//! ├── state: EditorSnapshot          (working state)
//! ├── history: EditorHistory         (committed snapshots + cursor)
//! ├── selection: SelectionState      (which clip is selected)
//! ├── playback: PlaybackState        (playhead transport)
//! └── ids: IdGen                     (unique clip/overlay ids)
//!
//! Edits never mutate a committed snapshot: each transition produces a new
//! snapshot, which the session commits, making undo/redo structural.
//! ```

pub mod error;
pub mod history;
pub mod ids;
pub mod playback;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod transition;

// Re-export primary types at crate root for convenience.
pub use error::{EditError, EditResult};
pub use history::{EditorHistory, HistoryEntry, DEFAULT_MAX_ENTRIES};
pub use ids::IdGen;
pub use playback::PlaybackState;
pub use selection::SelectionState;
pub use session::EditorSession;
pub use snapshot::{AudioClip, EditorSnapshot, TextOverlay, VideoClip};
pub use transition::{
    apply_add_audio_clip, apply_add_text, apply_add_video_clip, apply_delete,
    apply_effects_update, apply_speed_change, apply_split, apply_trim, apply_volume_change,
};
