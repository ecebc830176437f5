//! `vd-common` — Shared value types for the VideoDirector editor core.
//!
//! This crate holds the types that cross the boundary between the editor
//! state core (`vd-editor-state`) and its external collaborators, most
//! importantly the preview renderer:
//!
//! - **Types**: `TimeCode` (seconds newtype), `SourceId` (media asset reference)
//! - **Effects**: `VideoEffects` (global preview grade), `EffectPreset`

pub mod effect;
pub mod types;

// Re-export commonly used items at crate root
pub use effect::{EffectPreset, VideoEffects};
pub use types::{SourceId, TimeCode};
