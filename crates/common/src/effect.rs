//! Global video effect parameters and color presets.
//!
//! Effects are global to the preview in this editor, not per-clip: the
//! preview renderer applies one `VideoEffects` value to the whole frame.
//! `css_filter` produces the filter string the renderer consumes.

use serde::{Deserialize, Serialize};

/// Brightness/contrast/saturation domain, in percent.
pub const PERCENT_RANGE: (f32, f32) = (0.0, 200.0);
/// Hue rotation domain, in degrees.
pub const HUE_RANGE: (f32, f32) = (-180.0, 180.0);
/// Blur domain, in pixels.
pub const BLUR_RANGE: (f32, f32) = (0.0, 20.0);

/// The global preview grade: percentage values for brightness, contrast and
/// saturation, hue rotation in degrees, blur in pixels.
///
/// The default is the neutral grade (everything at 100% / 0), which renders
/// the source unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoEffects {
    /// Brightness percentage, 100 = unchanged.
    pub brightness: f32,
    /// Contrast percentage, 100 = unchanged.
    pub contrast: f32,
    /// Saturation percentage, 100 = unchanged.
    pub saturation: f32,
    /// Hue rotation in degrees, 0 = unchanged.
    pub hue: f32,
    /// Gaussian blur radius in pixels, 0 = unchanged.
    pub blur: f32,
}

impl Default for VideoEffects {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl VideoEffects {
    /// The identity grade: renders the source unchanged.
    pub const NEUTRAL: Self = Self {
        brightness: 100.0,
        contrast: 100.0,
        saturation: 100.0,
        hue: 0.0,
        blur: 0.0,
    };

    /// Return a copy with every parameter clamped into its documented domain.
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1),
            contrast: self.contrast.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1),
            saturation: self.saturation.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1),
            hue: self.hue.clamp(HUE_RANGE.0, HUE_RANGE.1),
            blur: self.blur.clamp(BLUR_RANGE.0, BLUR_RANGE.1),
        }
    }

    /// Whether this is the neutral grade.
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// The CSS-style filter string the preview renderer applies to the frame.
    pub fn css_filter(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%) hue-rotate({}deg) blur({}px)",
            self.brightness, self.contrast, self.saturation, self.hue, self.blur
        )
    }
}

/// Built-in color grading presets from the effects panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectPreset {
    Warm,
    Cool,
    Vibrant,
    BlackWhite,
    Vintage,
    Cinematic,
}

impl EffectPreset {
    /// All presets in panel order.
    pub const ALL: [Self; 6] = [
        Self::Warm,
        Self::Cool,
        Self::Vibrant,
        Self::BlackWhite,
        Self::Vintage,
        Self::Cinematic,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Warm => "Warm",
            Self::Cool => "Cool",
            Self::Vibrant => "Vibrant",
            Self::BlackWhite => "B&W",
            Self::Vintage => "Vintage",
            Self::Cinematic => "Cinematic",
        }
    }

    /// The grade this preset applies.
    pub fn effects(self) -> VideoEffects {
        match self {
            Self::Warm => VideoEffects {
                brightness: 110.0,
                contrast: 105.0,
                saturation: 120.0,
                hue: 10.0,
                blur: 0.0,
            },
            Self::Cool => VideoEffects {
                brightness: 100.0,
                contrast: 110.0,
                saturation: 90.0,
                hue: -10.0,
                blur: 0.0,
            },
            Self::Vibrant => VideoEffects {
                brightness: 105.0,
                contrast: 115.0,
                saturation: 150.0,
                hue: 0.0,
                blur: 0.0,
            },
            Self::BlackWhite => VideoEffects {
                brightness: 100.0,
                contrast: 120.0,
                saturation: 0.0,
                hue: 0.0,
                blur: 0.0,
            },
            Self::Vintage => VideoEffects {
                brightness: 95.0,
                contrast: 90.0,
                saturation: 80.0,
                hue: 20.0,
                blur: 0.0,
            },
            Self::Cinematic => VideoEffects {
                brightness: 90.0,
                contrast: 125.0,
                saturation: 110.0,
                hue: -5.0,
                blur: 0.0,
            },
        }
    }
}
