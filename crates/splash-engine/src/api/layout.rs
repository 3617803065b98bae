use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::api::error::{Result, SplashError};
use crate::assets::preset::LayoutPreset;

/// Default wave animation rate in frames per second.
pub const WAVE_DEFAULT_FPS: f32 = 4.0;
/// Default low-battery animation rate in frames per second.
pub const LOW_DEFAULT_FPS: f32 = 6.0;
/// Floor applied to a non-positive wave rate.
pub const WAVE_MIN_FPS: f32 = 0.1;
/// Floor applied to a non-positive low-battery rate.
pub const LOW_MIN_FPS: f32 = 1.0;

/// Parse an animation rate typed by a user or read from a preset.
pub fn parse_rate(text: &str) -> Result<f32> {
    text.trim()
        .parse::<f32>()
        .map_err(|_| SplashError::InvalidRate(text.to_string()))
}

/// Largest battery width or height accepted by the layout.
pub const MAX_BATTERY_EXTENT: u32 = 1 << 15;

/// Narrow a wide geometry result back to canvas coordinates.
pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn coerce_rate(fps: f32, min: f32) -> f32 {
    // NaN fails the comparison as well
    if fps > 0.0 {
        fps
    } else {
        min
    }
}

/// Battery icon geometry in canvas pixels. Width and height lie in
/// `1..=MAX_BATTERY_EXTENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryRect {
    origin: IVec2,
    size: UVec2,
}

impl BatteryRect {
    pub fn new(origin: IVec2, size: UVec2) -> Self {
        Self {
            origin,
            size: size.clamp(UVec2::ONE, UVec2::splat(MAX_BATTERY_EXTENT)),
        }
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Bottom edge (exclusive), saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        saturate(self.origin.y as i64 + self.size.y as i64)
    }
}

/// Control points of the battery-fill vertical offset curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillCurve {
    /// Offset applied at 16% and below.
    pub at_16: i32,
    /// Offset applied at 99% and above.
    pub at_99: i32,
    /// Constant added to every interpolated offset.
    pub base: i32,
}

impl Default for FillCurve {
    fn default() -> Self {
        Self {
            at_16: 36,
            at_99: -180,
            base: 0,
        }
    }
}

/// Mutable layout state of the compositor.
///
/// Every setter coerces its input into a valid range, so render calls never
/// see malformed geometry or rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayoutPreset", into = "LayoutPreset")]
pub struct LayoutParams {
    battery: BatteryRect,
    fill: FillCurve,
    percent_anchor: IVec2,
    digit_spacing: u32,
    wave_fps: f32,
    low_fps: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            battery: BatteryRect::new(IVec2::new(557, 470), UVec2::new(163, 56)),
            fill: FillCurve::default(),
            percent_anchor: IVec2::new(640, 95),
            digit_spacing: 2,
            wave_fps: WAVE_DEFAULT_FPS,
            low_fps: LOW_DEFAULT_FPS,
        }
    }
}

impl LayoutParams {
    pub fn battery(&self) -> BatteryRect {
        self.battery
    }

    pub fn fill(&self) -> FillCurve {
        self.fill
    }

    pub fn percent_anchor(&self) -> IVec2 {
        self.percent_anchor
    }

    pub fn digit_spacing(&self) -> u32 {
        self.digit_spacing
    }

    pub fn wave_fps(&self) -> f32 {
        self.wave_fps
    }

    pub fn low_fps(&self) -> f32 {
        self.low_fps
    }

    /// Set the battery rectangle; width and height are clamped to
    /// `1..=MAX_BATTERY_EXTENT`.
    pub fn set_battery_area(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.battery = BatteryRect::new(
            IVec2::new(x, y),
            UVec2::new(width.max(1) as u32, height.max(1) as u32),
        );
    }

    pub fn set_fill_points(&mut self, at_16: i32, at_99: i32) {
        self.fill.at_16 = at_16;
        self.fill.at_99 = at_99;
    }

    pub fn set_fill_base(&mut self, base: i32) {
        self.fill.base = base;
    }

    pub fn set_percent_anchor(&mut self, x: i32, y: i32) {
        self.percent_anchor = IVec2::new(x, y);
    }

    pub fn set_digit_spacing(&mut self, spacing: u32) {
        self.digit_spacing = spacing;
    }

    /// Non-positive rates fall back to [`WAVE_MIN_FPS`].
    pub fn set_wave_fps(&mut self, fps: f32) {
        self.wave_fps = coerce_rate(fps, WAVE_MIN_FPS);
    }

    /// Non-positive rates fall back to [`LOW_MIN_FPS`].
    pub fn set_low_fps(&mut self, fps: f32) {
        self.low_fps = coerce_rate(fps, LOW_MIN_FPS);
    }

    /// Set the wave rate from text. Unparseable input keeps the current rate.
    pub fn set_wave_fps_str(&mut self, text: &str) {
        match parse_rate(text) {
            Ok(fps) => self.set_wave_fps(fps),
            Err(e) => log::warn!("wave rate unchanged: {e}"),
        }
    }

    /// Set the low-battery rate from text. Unparseable input keeps the current rate.
    pub fn set_low_fps_str(&mut self, text: &str) {
        match parse_rate(text) {
            Ok(fps) => self.set_low_fps(fps),
            Err(e) => log::warn!("low-battery rate unchanged: {e}"),
        }
    }

    /// Vertical fill offset for a battery capacity.
    ///
    /// Flat at the control points outside 16..99, linear in between with the
    /// interpolated value truncated toward zero, then shifted by `base`.
    /// Saturates instead of overflowing for extreme control points.
    pub fn fill_offset(&self, capacity: u8) -> i32 {
        let FillCurve { at_16, at_99, base } = self.fill;
        let offset = match capacity {
            0..=16 => at_16,
            99..=u8::MAX => at_99,
            _ => {
                let t = (capacity as f64 - 16.0) / (99.0 - 16.0);
                (at_16 as f64 + t * (at_99 as f64 - at_16 as f64)) as i32
            }
        };
        saturate(offset as i64 + base as i64)
    }
}

impl From<LayoutPreset> for LayoutParams {
    fn from(preset: LayoutPreset) -> Self {
        let mut params = Self::default();
        params.set_battery_area(
            preset.battery_x,
            preset.battery_y,
            preset.battery_width,
            preset.battery_height,
        );
        params.set_fill_points(preset.fill_offset_at_16, preset.fill_offset_at_99);
        params.set_fill_base(preset.fill_offset_base);
        params.set_percent_anchor(preset.percent_x, preset.percent_y);
        params.set_digit_spacing(preset.digit_spacing);
        params.set_wave_fps(preset.wave_fps);
        params.set_low_fps(preset.low_fps);
        params
    }
}

impl From<LayoutParams> for LayoutPreset {
    fn from(params: LayoutParams) -> Self {
        let BatteryRect { origin, size } = params.battery;
        Self {
            battery_x: origin.x,
            battery_y: origin.y,
            battery_width: size.x as i32,
            battery_height: size.y as i32,
            fill_offset_at_16: params.fill.at_16,
            fill_offset_at_99: params.fill.at_99,
            fill_offset_base: params.fill.base,
            percent_x: params.percent_anchor.x,
            percent_y: params.percent_anchor.y,
            digit_spacing: params.digit_spacing,
            wave_fps: params.wave_fps,
            low_fps: params.low_fps,
        }
    }
}
