//! Immutable editor state snapshot.
//!
//! `EditorSnapshot` is the value committed to history: once a snapshot is in
//! the history it is never mutated, every edit produces a new one. Snapshots
//! are designed to be cheaply cloneable and serializable.

use serde::{Deserialize, Serialize};
use vd_common::{SourceId, VideoEffects};

/// Speed multiplier domain for video clips.
pub const SPEED_RANGE: (f64, f64) = (0.25, 2.5);
/// Volume percentage ceiling for clips.
pub const MAX_VOLUME: u8 = 100;

/// Default volume for freshly imported audio clips.
pub const DEFAULT_AUDIO_VOLUME: u8 = 80;
/// How long a newly added text overlay stays on screen, in seconds.
pub const DEFAULT_TEXT_DURATION: f64 = 5.0;

/// A complete description of the editor state at one point in history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Video clips in timeline order.
    pub video_clips: Vec<VideoClip>,
    /// Audio clips in import order.
    pub audio_clips: Vec<AudioClip>,
    /// Text overlays in creation order.
    pub text_overlays: Vec<TextOverlay>,
    /// Global preview grade (not per-clip).
    pub effects: VideoEffects,
}

/// A span of an external video asset plus per-span edit parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoClip {
    /// Unique clip identifier, stable for the clip's lifetime.
    pub id: String,
    /// Reference to the underlying media asset (owned externally).
    pub source: SourceId,
    /// In-point in seconds into the source asset.
    pub start_time: f64,
    /// Out-point in seconds into the source asset. Always > `start_time`.
    pub end_time: f64,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Volume percentage, 0..=100.
    pub volume: u8,
}

impl VideoClip {
    /// Duration of the clip span in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// An imported audio asset with its mix volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Unique clip identifier.
    pub id: String,
    /// Reference to the underlying media asset (owned externally).
    pub source: SourceId,
    /// Volume percentage, 0..=100.
    pub volume: u8,
}

/// A timed text overlay drawn on top of the preview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Unique overlay identifier.
    pub id: String,
    /// The text to draw.
    pub text: String,
    /// Horizontal position as a percentage of the frame width, 0..=100.
    pub x: f32,
    /// Vertical position as a percentage of the frame height, 0..=100.
    pub y: f32,
    /// Font size in points.
    pub font_size: f32,
    /// CSS hex color string, e.g. `"#00ff88"`.
    pub color: String,
    /// When the overlay appears, in seconds.
    pub start_time: f64,
    /// When the overlay disappears, in seconds. Always > `start_time`.
    pub end_time: f64,
}

impl TextOverlay {
    /// Whether the overlay is visible at the given playhead time.
    pub fn is_visible_at(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

impl EditorSnapshot {
    /// Find a video clip by id.
    pub fn find_clip(&self, clip_id: &str) -> Option<&VideoClip> {
        self.video_clips.iter().find(|c| c.id == clip_id)
    }

    /// Index of a video clip by id.
    pub fn clip_position(&self, clip_id: &str) -> Option<usize> {
        self.video_clips.iter().position(|c| c.id == clip_id)
    }

    /// Total duration covered by all video clip spans, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.video_clips.iter().map(|c| c.duration()).sum()
    }

    /// Text overlays visible at the given playhead time, for the preview renderer.
    pub fn overlays_at(&self, time: f64) -> impl Iterator<Item = &TextOverlay> {
        self.text_overlays
            .iter()
            .filter(move |o| o.is_visible_at(time))
    }

    /// True when nothing has been imported or added yet.
    pub fn is_empty(&self) -> bool {
        self.video_clips.is_empty() && self.audio_clips.is_empty() && self.text_overlays.is_empty()
    }
}
