use serde::{Deserialize, Serialize};

use crate::api::layout::{LayoutParams, LOW_DEFAULT_FPS, WAVE_DEFAULT_FPS};

/// Flat key/value record of every tunable layout parameter.
///
/// Values are stored as given; converting into [`LayoutParams`] applies the
/// usual coercion (battery size at least 1, positive rates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPreset {
    pub battery_x: i32,
    pub battery_y: i32,
    pub battery_width: i32,
    pub battery_height: i32,
    pub fill_offset_at_16: i32,
    pub fill_offset_at_99: i32,
    pub fill_offset_base: i32,
    pub percent_x: i32,
    pub percent_y: i32,
    pub digit_spacing: u32,
    pub wave_fps: f32,
    pub low_fps: f32,
}

impl Default for LayoutPreset {
    fn default() -> Self {
        LayoutParams::default().into()
    }
}

impl LayoutPreset {
    /// Parse a preset from a JSON string. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Coerced layout parameters for this preset.
    pub fn to_layout(&self) -> LayoutParams {
        self.clone().into()
    }
}
