//! Pure editing transitions: `(snapshot, params) -> new snapshot`.
//!
//! No transition mutates its input or performs I/O. A rejected edit returns
//! an [`EditError`] and the caller keeps the old snapshot; an accepted edit
//! returns a fresh snapshot for the caller to commit. Functions that create
//! clips or overlays take the session's [`IdGen`] so retired ids are never
//! reused.

use vd_common::{SourceId, VideoEffects};

use crate::error::{EditError, EditResult};
use crate::ids::IdGen;
use crate::snapshot::{
    AudioClip, EditorSnapshot, TextOverlay, VideoClip, DEFAULT_AUDIO_VOLUME,
    DEFAULT_TEXT_DURATION, MAX_VOLUME, SPEED_RANGE,
};

fn require_clip(snapshot: &EditorSnapshot, clip_id: &str) -> EditResult<usize> {
    snapshot
        .clip_position(clip_id)
        .ok_or_else(|| EditError::ClipNotFound {
            clip_id: clip_id.to_string(),
        })
}

/// Replace a clip's span with `[start, end]`.
///
/// Rejects unknown clips and degenerate ranges (`start >= end`, negative
/// start); on rejection the clip is left exactly as it was.
pub fn apply_trim(
    snapshot: &EditorSnapshot,
    clip_id: &str,
    start: f64,
    end: f64,
) -> EditResult<EditorSnapshot> {
    let pos = require_clip(snapshot, clip_id)?;
    if start < 0.0 || start >= end {
        return Err(EditError::InvalidTrimRange { start, end });
    }

    let mut next = snapshot.clone();
    let clip = &mut next.video_clips[pos];
    clip.start_time = start;
    clip.end_time = end;
    tracing::debug!(clip_id, start, end, "Clip trimmed");
    Ok(next)
}

/// Split a clip into two adjacent halves at `at`.
///
/// The split point must lie strictly inside the clip span; splitting exactly
/// at a boundary would create a zero-length clip and is rejected. Both halves
/// get fresh ids (the original id is retired) and inherit source, speed, and
/// volume.
pub fn apply_split(
    snapshot: &EditorSnapshot,
    clip_id: &str,
    at: f64,
    ids: &mut IdGen,
) -> EditResult<EditorSnapshot> {
    let pos = require_clip(snapshot, clip_id)?;
    let clip = &snapshot.video_clips[pos];
    if at <= clip.start_time || at >= clip.end_time {
        return Err(EditError::SplitOutOfBounds {
            at,
            start: clip.start_time,
            end: clip.end_time,
        });
    }

    let first = VideoClip {
        id: ids.clip_id(),
        end_time: at,
        ..clip.clone()
    };
    let second = VideoClip {
        id: ids.clip_id(),
        start_time: at,
        ..clip.clone()
    };

    let mut next = snapshot.clone();
    tracing::debug!(
        clip_id,
        at,
        first = %first.id,
        second = %second.id,
        "Clip split"
    );
    next.video_clips.splice(pos..=pos, [first, second]);
    Ok(next)
}

/// Remove a clip, preserving the order of the rest.
pub fn apply_delete(snapshot: &EditorSnapshot, clip_id: &str) -> EditResult<EditorSnapshot> {
    let pos = require_clip(snapshot, clip_id)?;
    let mut next = snapshot.clone();
    next.video_clips.remove(pos);
    tracing::debug!(clip_id, remaining = next.video_clips.len(), "Clip deleted");
    Ok(next)
}

/// Set a clip's playback speed, clamped to the supported multiplier range.
pub fn apply_speed_change(
    snapshot: &EditorSnapshot,
    clip_id: &str,
    speed: f64,
) -> EditResult<EditorSnapshot> {
    let pos = require_clip(snapshot, clip_id)?;
    let mut next = snapshot.clone();
    next.video_clips[pos].speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
    tracing::debug!(clip_id, speed = next.video_clips[pos].speed, "Speed changed");
    Ok(next)
}

/// Set a clip's volume percentage, clamped to 0..=100.
pub fn apply_volume_change(
    snapshot: &EditorSnapshot,
    clip_id: &str,
    volume: u8,
) -> EditResult<EditorSnapshot> {
    let pos = require_clip(snapshot, clip_id)?;
    let mut next = snapshot.clone();
    next.video_clips[pos].volume = volume.min(MAX_VOLUME);
    tracing::debug!(clip_id, volume = next.video_clips[pos].volume, "Volume changed");
    Ok(next)
}

/// Replace the global effects wholesale, clamped into their domains.
pub fn apply_effects_update(snapshot: &EditorSnapshot, effects: VideoEffects) -> EditorSnapshot {
    let mut next = snapshot.clone();
    next.effects = effects.clamped();
    tracing::debug!(filter = %next.effects.css_filter(), "Effects updated");
    next
}

/// Append a text overlay at the given playhead time with the panel defaults:
/// centered, 48pt, the accent green, five seconds on screen.
pub fn apply_add_text(
    snapshot: &EditorSnapshot,
    text: &str,
    at: f64,
    ids: &mut IdGen,
) -> EditorSnapshot {
    let mut next = snapshot.clone();
    let overlay = TextOverlay {
        id: ids.text_id(),
        text: text.to_string(),
        x: 50.0,
        y: 50.0,
        font_size: 48.0,
        color: "#00ff88".to_string(),
        start_time: at,
        end_time: at + DEFAULT_TEXT_DURATION,
    };
    tracing::debug!(id = %overlay.id, at, "Text overlay added");
    next.text_overlays.push(overlay);
    next
}

/// Append a freshly imported video clip spanning the whole probed asset,
/// at normal speed and full volume.
pub fn apply_add_video_clip(
    snapshot: &EditorSnapshot,
    source: SourceId,
    source_duration: f64,
    ids: &mut IdGen,
) -> EditorSnapshot {
    let mut next = snapshot.clone();
    let clip = VideoClip {
        id: ids.clip_id(),
        source,
        start_time: 0.0,
        end_time: source_duration,
        speed: 1.0,
        volume: 100,
    };
    tracing::debug!(id = %clip.id, source = %clip.source, source_duration, "Video clip added");
    next.video_clips.push(clip);
    next
}

/// Append a freshly imported audio clip at the default mix volume.
pub fn apply_add_audio_clip(
    snapshot: &EditorSnapshot,
    source: SourceId,
    ids: &mut IdGen,
) -> EditorSnapshot {
    let mut next = snapshot.clone();
    let clip = AudioClip {
        id: ids.audio_id(),
        source,
        volume: DEFAULT_AUDIO_VOLUME,
    };
    tracing::debug!(id = %clip.id, source = %clip.source, "Audio clip added");
    next.audio_clips.push(clip);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_clip(id: &str, start: f64, end: f64) -> EditorSnapshot {
        EditorSnapshot {
            video_clips: vec![VideoClip {
                id: id.to_string(),
                source: SourceId::new("src-1"),
                start_time: start,
                end_time: end,
                speed: 1.0,
                volume: 100,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn trim_replaces_span() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let next = apply_trim(&snap, "clip-1", 2.0, 8.0).unwrap();

        let clip = next.find_clip("clip-1").unwrap();
        assert_eq!(clip.start_time, 2.0);
        assert_eq!(clip.end_time, 8.0);
        assert!((clip.duration() - 6.0).abs() < f64::EPSILON);
        // Input untouched.
        assert_eq!(snap.find_clip("clip-1").unwrap().end_time, 10.0);
    }

    #[test]
    fn trim_rejects_inverted_range() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let err = apply_trim(&snap, "clip-1", 8.0, 2.0).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidTrimRange {
                start: 8.0,
                end: 2.0
            }
        );
    }

    #[test]
    fn trim_rejects_equal_bounds_and_negative_start() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        assert!(apply_trim(&snap, "clip-1", 4.0, 4.0).is_err());
        assert!(apply_trim(&snap, "clip-1", -1.0, 4.0).is_err());
    }

    #[test]
    fn trim_rejects_unknown_clip() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let err = apply_trim(&snap, "clip-99", 0.0, 5.0).unwrap_err();
        assert_eq!(
            err,
            EditError::ClipNotFound {
                clip_id: "clip-99".to_string()
            }
        );
    }

    #[test]
    fn split_produces_adjacent_halves_with_fresh_ids() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let mut ids = IdGen::new();
        ids.clip_id(); // simulate the original clip having consumed clip-1

        let next = apply_split(&snap, "clip-1", 4.0, &mut ids).unwrap();

        assert_eq!(next.video_clips.len(), 2);
        let (first, second) = (&next.video_clips[0], &next.video_clips[1]);
        assert_eq!((first.start_time, first.end_time), (0.0, 4.0));
        assert_eq!((second.start_time, second.end_time), (4.0, 10.0));
        assert_ne!(first.id, second.id);
        assert!(next.find_clip("clip-1").is_none()); // original id retired
        assert!((first.duration() + second.duration() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn split_halves_inherit_speed_and_volume() {
        let mut snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        snap.video_clips[0].speed = 2.0;
        snap.video_clips[0].volume = 40;

        let mut ids = IdGen::new();
        let next = apply_split(&snap, "clip-1", 5.0, &mut ids).unwrap();
        for clip in &next.video_clips {
            assert_eq!(clip.speed, 2.0);
            assert_eq!(clip.volume, 40);
            assert_eq!(clip.source, SourceId::new("src-1"));
        }
    }

    #[test]
    fn split_at_either_boundary_is_rejected() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let mut ids = IdGen::new();

        for at in [0.0, 10.0, -1.0, 11.0] {
            let err = apply_split(&snap, "clip-1", at, &mut ids).unwrap_err();
            assert!(matches!(err, EditError::SplitOutOfBounds { .. }), "at={at}");
        }
        // Rejected splits must not burn ids.
        assert_eq!(ids.clip_id(), "clip-1");
    }

    #[test]
    fn split_keeps_surrounding_clip_order() {
        let mut snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        snap.video_clips.push(VideoClip {
            id: "clip-2".to_string(),
            source: SourceId::new("src-2"),
            start_time: 0.0,
            end_time: 3.0,
            speed: 1.0,
            volume: 100,
        });

        let mut ids = IdGen::new();
        ids.clip_id();
        ids.clip_id();
        let next = apply_split(&snap, "clip-1", 5.0, &mut ids).unwrap();

        assert_eq!(next.video_clips.len(), 3);
        // Halves sit where the original clip was; clip-2 stays last.
        assert_eq!(next.video_clips[2].id, "clip-2");
    }

    #[test]
    fn delete_removes_only_target_preserving_order() {
        let mut snap = snapshot_with_clip("clip-1", 0.0, 5.0);
        for (id, end) in [("clip-2", 3.0), ("clip-3", 7.0)] {
            snap.video_clips.push(VideoClip {
                id: id.to_string(),
                source: SourceId::new("src-1"),
                start_time: 0.0,
                end_time: end,
                speed: 1.0,
                volume: 100,
            });
        }

        let next = apply_delete(&snap, "clip-2").unwrap();
        let ids: Vec<_> = next.video_clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["clip-1", "clip-3"]);
    }

    #[test]
    fn delete_unknown_clip_is_rejected() {
        let snap = snapshot_with_clip("clip-1", 0.0, 5.0);
        assert!(apply_delete(&snap, "clip-99").is_err());
        assert_eq!(snap.video_clips.len(), 1);
    }

    #[test]
    fn speed_change_clamps_to_domain() {
        let snap = snapshot_with_clip("clip-1", 0.0, 5.0);

        let next = apply_speed_change(&snap, "clip-1", 1.5).unwrap();
        assert_eq!(next.find_clip("clip-1").unwrap().speed, 1.5);

        let next = apply_speed_change(&snap, "clip-1", 100.0).unwrap();
        assert_eq!(next.find_clip("clip-1").unwrap().speed, 2.5);

        let next = apply_speed_change(&snap, "clip-1", 0.0).unwrap();
        assert_eq!(next.find_clip("clip-1").unwrap().speed, 0.25);
    }

    #[test]
    fn volume_change_clamps_to_100() {
        let snap = snapshot_with_clip("clip-1", 0.0, 5.0);

        let next = apply_volume_change(&snap, "clip-1", 55).unwrap();
        assert_eq!(next.find_clip("clip-1").unwrap().volume, 55);

        let next = apply_volume_change(&snap, "clip-1", 200).unwrap();
        assert_eq!(next.find_clip("clip-1").unwrap().volume, 100);
    }

    #[test]
    fn effects_update_replaces_wholesale_and_clamps() {
        let snap = EditorSnapshot::default();
        let next = apply_effects_update(
            &snap,
            VideoEffects {
                brightness: 500.0,
                contrast: 110.0,
                saturation: 90.0,
                hue: 15.0,
                blur: 2.0,
            },
        );
        assert_eq!(next.effects.brightness, 200.0);
        assert_eq!(next.effects.contrast, 110.0);
        assert!(snap.effects.is_neutral()); // input untouched
    }

    #[test]
    fn add_text_uses_panel_defaults() {
        let snap = EditorSnapshot::default();
        let mut ids = IdGen::new();
        let next = apply_add_text(&snap, "Subscribe!", 12.0, &mut ids);

        assert_eq!(next.text_overlays.len(), 1);
        let overlay = &next.text_overlays[0];
        assert_eq!(overlay.text, "Subscribe!");
        assert_eq!((overlay.x, overlay.y), (50.0, 50.0));
        assert_eq!(overlay.font_size, 48.0);
        assert_eq!(overlay.color, "#00ff88");
        assert_eq!(overlay.start_time, 12.0);
        assert_eq!(overlay.end_time, 17.0);
    }

    #[test]
    fn add_video_clip_spans_whole_source() {
        let snap = EditorSnapshot::default();
        let mut ids = IdGen::new();
        let next = apply_add_video_clip(&snap, SourceId::new("footage.mp4"), 42.5, &mut ids);

        assert_eq!(next.video_clips.len(), 1);
        let clip = &next.video_clips[0];
        assert_eq!(clip.start_time, 0.0);
        assert_eq!(clip.end_time, 42.5);
        assert_eq!(clip.speed, 1.0);
        assert_eq!(clip.volume, 100);
    }

    #[test]
    fn add_audio_clip_defaults_to_mix_volume() {
        let snap = EditorSnapshot::default();
        let mut ids = IdGen::new();
        let next = apply_add_audio_clip(&snap, SourceId::new("music.mp3"), &mut ids);

        assert_eq!(next.audio_clips.len(), 1);
        assert_eq!(next.audio_clips[0].volume, DEFAULT_AUDIO_VOLUME);
    }

    #[test]
    fn transitions_are_deterministic() {
        let snap = snapshot_with_clip("clip-1", 0.0, 10.0);
        let a = apply_trim(&snap, "clip-1", 1.0, 9.0).unwrap();
        let b = apply_trim(&snap, "clip-1", 1.0, 9.0).unwrap();
        assert_eq!(a, b);

        let mut ids_a = IdGen::new();
        let mut ids_b = IdGen::new();
        let a = apply_split(&snap, "clip-1", 5.0, &mut ids_a).unwrap();
        let b = apply_split(&snap, "clip-1", 5.0, &mut ids_b).unwrap();
        assert_eq!(a, b);
    }
}
