//! Editing session facade.
//!
//! `EditorSession` is what the collaborators talk to: the import pipeline
//! feeds it decoded-asset metadata, the tools/effects panels translate user
//! gestures into its editing methods, and the preview renderer reads
//! `current()`. Every editing method runs a pure transition and, on success,
//! replaces the working snapshot and commits it; a rejected edit leaves the
//! session untouched and surfaces the reason to the caller.
//!
//! Undo and redo restore the working snapshot from history. Selection and
//! playhead are not part of a snapshot, so they survive undo/redo, with one
//! exception: a selection pointing at a clip absent from the restored
//! snapshot is cleared rather than left dangling.

use vd_common::{EffectPreset, SourceId, TimeCode, VideoEffects};

use crate::error::EditResult;
use crate::history::{EditorHistory, DEFAULT_MAX_ENTRIES};
use crate::ids::IdGen;
use crate::playback::PlaybackState;
use crate::selection::SelectionState;
use crate::snapshot::{EditorSnapshot, VideoClip};
use crate::transition;

/// A single editing session: working state, history, selection, playhead.
#[derive(Debug)]
pub struct EditorSession {
    state: EditorSnapshot,
    history: EditorHistory,
    selection: SelectionState,
    playback: PlaybackState,
    ids: IdGen,
    project_name: String,
    /// Scratch trim range driven by the trim sliders; applied by `trim_selected`.
    trim_start: f64,
    trim_end: f64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create an empty session with the default history depth.
    pub fn new() -> Self {
        Self::with_history_depth(DEFAULT_MAX_ENTRIES)
    }

    /// Create an empty session with the given history depth.
    pub fn with_history_depth(max_entries: usize) -> Self {
        Self {
            state: EditorSnapshot::default(),
            history: EditorHistory::new(max_entries),
            selection: SelectionState::new(),
            playback: PlaybackState::new(),
            ids: IdGen::new(),
            project_name: "Untitled Project".to_string(),
            trim_start: 0.0,
            trim_end: 0.0,
        }
    }

    // --- Reads ---

    /// The current editor state. Total: before the first commit this is the
    /// default snapshot (no clips, neutral effects).
    pub fn current(&self) -> &EditorSnapshot {
        &self.state
    }

    /// The committed history.
    pub fn history(&self) -> &EditorHistory {
        &self.history
    }

    /// The clip selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The playhead transport.
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// The playhead transport, mutable (the preview renderer drives it).
    pub fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }

    /// The project name (derived from the first imported file).
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The currently selected clip, if the selection resolves.
    pub fn selected_clip(&self) -> Option<&VideoClip> {
        self.state.find_clip(self.selection.selected_clip()?)
    }

    /// The scratch trim range shown on the trim sliders.
    pub fn trim_range(&self) -> (f64, f64) {
        (self.trim_start, self.trim_end)
    }

    // --- Selection ---

    /// Select a clip. Returns false (selection unchanged) for unknown ids.
    pub fn select_clip(&mut self, clip_id: &str) -> bool {
        if self.state.find_clip(clip_id).is_none() {
            tracing::debug!(clip_id, "Select ignored: unknown clip");
            return false;
        }
        self.selection.select_clip(clip_id);
        true
    }

    /// Clear the clip selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Import collaborator ---

    /// Register a decoded video asset: appends a clip spanning the probed
    /// duration, selects it, seeds the trim sliders, and names the project
    /// after the file.
    pub fn import_video(&mut self, source: SourceId, file_name: &str, duration: f64) {
        self.state =
            transition::apply_add_video_clip(&self.state, source, duration, &mut self.ids);
        let clip_id = self.state.video_clips.last().expect("just added").id.clone();
        self.selection.select_clip(&clip_id);
        self.trim_start = 0.0;
        self.trim_end = duration;
        self.playback.set_duration(TimeCode::from_secs(duration));
        self.project_name = file_stem(file_name).to_string();
        self.history.commit("Import video", self.state.clone());
        tracing::debug!(clip_id = %clip_id, file_name, duration, "Video imported");
    }

    /// Register a decoded audio asset at the default mix volume.
    pub fn import_audio(&mut self, source: SourceId) {
        self.state = transition::apply_add_audio_clip(&self.state, source, &mut self.ids);
        self.history.commit("Add music", self.state.clone());
    }

    // --- Tools collaborator ---

    /// Move the trim-start slider.
    pub fn set_trim_start(&mut self, start: f64) {
        self.trim_start = start;
    }

    /// Move the trim-end slider.
    pub fn set_trim_end(&mut self, end: f64) {
        self.trim_end = end;
    }

    /// Apply the scratch trim range to the selected clip.
    pub fn trim_selected(&mut self) -> EditResult<()> {
        let Some(clip_id) = self.selection.selected_clip().map(str::to_string) else {
            return Ok(()); // nothing selected, nothing to do
        };
        let result = transition::apply_trim(&self.state, &clip_id, self.trim_start, self.trim_end);
        self.commit_edit("Trim clip", result)
    }

    /// Split the selected clip at the playhead. The first half stays selected.
    pub fn split_at_playhead(&mut self) -> EditResult<()> {
        let Some(clip_id) = self.selection.selected_clip().map(str::to_string) else {
            return Ok(());
        };
        let at = self.playback.current_time.as_secs();
        let pos = self.state.clip_position(&clip_id);
        let result = transition::apply_split(&self.state, &clip_id, at, &mut self.ids);
        self.commit_edit("Split clip", result)?;

        // The original id is retired; keep the user's focus on the first half.
        if let Some(pos) = pos {
            let first_id = self.state.video_clips[pos].id.clone();
            self.selection.select_clip(&first_id);
        }
        Ok(())
    }

    /// Delete the selected clip and clear the selection.
    pub fn delete_selected(&mut self) -> EditResult<()> {
        let Some(clip_id) = self.selection.selected_clip().map(str::to_string) else {
            return Ok(());
        };
        let result = transition::apply_delete(&self.state, &clip_id);
        self.commit_edit("Delete clip", result)?;
        self.selection.clear();
        Ok(())
    }

    /// Change the selected clip's playback speed.
    pub fn set_clip_speed(&mut self, speed: f64) -> EditResult<()> {
        let Some(clip_id) = self.selection.selected_clip().map(str::to_string) else {
            return Ok(());
        };
        let result = transition::apply_speed_change(&self.state, &clip_id, speed);
        self.commit_edit("Change speed", result)
    }

    /// Change the selected clip's volume.
    pub fn set_clip_volume(&mut self, volume: u8) -> EditResult<()> {
        let Some(clip_id) = self.selection.selected_clip().map(str::to_string) else {
            return Ok(());
        };
        let result = transition::apply_volume_change(&self.state, &clip_id, volume);
        self.commit_edit("Change volume", result)
    }

    /// Add a text overlay at the playhead with the panel defaults.
    pub fn add_text(&mut self, text: &str) {
        let at = self.playback.current_time.as_secs();
        self.state = transition::apply_add_text(&self.state, text, at, &mut self.ids);
        self.history.commit("Add text", self.state.clone());
    }

    // --- Effects collaborator ---

    /// Replace the global effects.
    pub fn set_effects(&mut self, effects: VideoEffects) {
        self.state = transition::apply_effects_update(&self.state, effects);
        self.history.commit("Adjust effects", self.state.clone());
    }

    /// Apply one of the built-in color presets.
    pub fn apply_preset(&mut self, preset: EffectPreset) {
        self.state = transition::apply_effects_update(&self.state, preset.effects());
        self.history
            .commit(&format!("{} preset", preset.display_name()), self.state.clone());
    }

    // --- History ---

    /// Step back one committed edit. Returns false when there is nothing to
    /// undo (the state is unchanged).
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.state = snapshot.clone();
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Step forward one undone edit. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.state = snapshot.clone();
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Whether undo would change state.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Internals ---

    fn commit_edit(&mut self, label: &str, result: EditResult<EditorSnapshot>) -> EditResult<()> {
        match result {
            Ok(next) => {
                self.state = next;
                self.history.commit(label, self.state.clone());
                Ok(())
            }
            Err(err) => {
                tracing::debug!(label, %err, "Edit rejected");
                Err(err)
            }
        }
    }

    /// Drop a selection that no longer resolves in the restored snapshot.
    fn prune_selection(&mut self) {
        if let Some(clip_id) = self.selection.selected_clip() {
            if self.state.find_clip(clip_id).is_none() {
                tracing::debug!(clip_id, "Selection cleared: clip absent after restore");
                self.selection.clear();
            }
        }
    }
}

/// File name without its last extension, the way the import panel names
/// projects ("sunset.mp4" -> "sunset").
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(i) if i > 0 => &file_name[..i],
        _ => file_name,
    }
}
