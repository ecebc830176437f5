//! Playhead transport state: play/pause and seeking.
//!
//! The playhead is deliberately outside history's jurisdiction: undo and redo
//! never move it. The preview renderer advances `current_time` on its own
//! clock and reports it back through `seek`.

use serde::{Deserialize, Serialize};
use vd_common::TimeCode;

/// Transport state for the preview playhead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Whether the preview is currently playing.
    pub playing: bool,
    /// Current playhead position.
    pub current_time: TimeCode,
    /// Duration of the loaded asset (0 until metadata is probed).
    pub duration: TimeCode,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    /// Create a paused transport at time 0.
    pub fn new() -> Self {
        Self {
            playing: false,
            current_time: TimeCode::ZERO,
            duration: TimeCode::ZERO,
        }
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.playing = true;
        tracing::debug!(time = %self.current_time, "Playback started");
    }

    /// Pause playback at the current position.
    pub fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(time = %self.current_time, "Playback paused");
    }

    /// Toggle between playing and paused.
    pub fn toggle_play_pause(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playhead, clamped into `[0, duration]`.
    pub fn seek(&mut self, time: TimeCode) {
        self.current_time = time.clamp(TimeCode::ZERO, self.duration);
        tracing::debug!(time = %self.current_time, "Seeked");
    }

    /// Update the asset duration after metadata is probed. Pulls the playhead
    /// back if it now sits past the end.
    pub fn set_duration(&mut self, duration: TimeCode) {
        self.duration = if duration > TimeCode::ZERO {
            duration
        } else {
            TimeCode::ZERO
        };
        if self.current_time > self.duration {
            self.current_time = self.duration;
        }
        tracing::debug!(duration = %self.duration, "Duration set");
    }
}
