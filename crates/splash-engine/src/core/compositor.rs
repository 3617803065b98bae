//! Frame compositor: turns an atlas, layout parameters and animation counters
//! into one splash frame per mode.
//!
//! Every frame starts from opaque black at the atlas' logical size. Sprites
//! that are missing never cause an error; the frame simply gets emptier, or
//! in charging mode the next candidate renderer takes over.

use std::sync::Arc;

use glam::UVec2;

use crate::api::layout::LayoutParams;
use crate::api::types::{ChargingPhase, SplashMode};
use crate::assets::atlas::SpriteAtlas;
use crate::assets::slots::{
    self, Slot, BOOT_LOGO, CHARGING_BACKGROUND, CHARGING_SPLASH, FULL_BACKGROUND,
    LOW_BATTERY_START, NO_BATTERY, RECOVERY_OVERLAY,
};
use crate::components::animation::FrameCounter;
use crate::renderer::frame::{FrameBuilder, SplashFrame};
use crate::systems::battery::{draw_fill, draw_wave, FillGeometry};
use crate::systems::digits::draw_percentage;

/// Capacities at or below this use the low-battery animation.
pub const LOW_BATTERY_THRESHOLD: u8 = 15;

const BOOT_KEYWORDS: &[&str] = &["boot", "logo"];
const RECOVERY_KEYWORDS: &[&str] = &["recovery"];
const CHARGING_KEYWORDS: &[&str] = &["charging"];
const NO_BATTERY_KEYWORDS: &[&str] = &["no", "nobattery"];
const FULL_KEYWORDS: &[&str] = &["full"];

/// A charging renderer that may decline when its sprite is missing.
type Candidate = fn(&Compositor, u8) -> Option<SplashFrame>;

/// Tried in order for animated charging frames; the normal frame follows.
const ANIMATED_CANDIDATES: [(&str, Candidate); 3] = [
    ("no-battery", Compositor::try_no_battery),
    ("full-battery", Compositor::try_full_battery),
    ("low-battery", Compositor::try_low_battery),
];

/// Composites splash frames over a shared atlas.
///
/// Owns the layout parameters and both animation counters. Not meant to be
/// shared between threads; give each rendering thread its own compositor and
/// share only the atlas.
#[derive(Debug, Clone)]
pub struct Compositor {
    atlas: Arc<SpriteAtlas>,
    logical_size: UVec2,
    layout: LayoutParams,
    wave: FrameCounter,
    low_battery: FrameCounter,
}

impl Compositor {
    /// Bind to an atlas with default layout parameters.
    pub fn new(atlas: Arc<SpriteAtlas>) -> Self {
        Self::with_layout(atlas, LayoutParams::default())
    }

    /// Bind to an atlas keeping existing layout parameters.
    pub fn with_layout(atlas: Arc<SpriteAtlas>, layout: LayoutParams) -> Self {
        let logical_size = atlas.logical_size();
        Self {
            atlas,
            logical_size,
            layout,
            wave: FrameCounter::default(),
            low_battery: FrameCounter::default(),
        }
    }

    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    /// Canvas size fixed when the atlas was bound.
    pub fn logical_size(&self) -> UVec2 {
        self.logical_size
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutParams {
        &mut self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutParams) {
        self.layout = layout;
    }

    pub fn wave_frame(&self) -> u8 {
        self.wave.frame()
    }

    pub fn low_battery_frame(&self) -> u8 {
        self.low_battery.frame()
    }

    pub fn step_wave(&mut self) {
        self.wave.step();
    }

    pub fn step_low_battery(&mut self) {
        self.low_battery.step();
    }

    pub fn reset_wave(&mut self) {
        self.wave.reset();
    }

    pub fn reset_low_battery(&mut self) {
        self.low_battery.reset();
    }

    /// Render the frame for a mode. `phase` only matters in charging mode.
    pub fn render(&self, mode: SplashMode, phase: ChargingPhase, capacity: u8) -> SplashFrame {
        match (mode, phase) {
            (SplashMode::Boot, _) => self.render_boot(),
            (SplashMode::Recovery, _) => self.render_recovery(),
            (SplashMode::Charging, ChargingPhase::InitialSplash) => self.render_charging_initial(),
            (SplashMode::Charging, ChargingPhase::Animated) => self.render_charging(capacity),
        }
    }

    /// Boot logo centered on black.
    pub fn render_boot(&self) -> SplashFrame {
        let mut frame = self.blank();
        self.paste_centered(&mut frame, BOOT_LOGO, BOOT_KEYWORDS);
        frame.finish()
    }

    /// Boot frame with the recovery overlay centered on top.
    pub fn render_recovery(&self) -> SplashFrame {
        let mut frame = self.blank();
        self.paste_centered(&mut frame, BOOT_LOGO, BOOT_KEYWORDS);
        self.paste_centered(&mut frame, RECOVERY_OVERLAY, RECOVERY_KEYWORDS);
        frame.finish()
    }

    /// Splash shown right after charging starts; the animated frame for an
    /// empty battery when the atlas has none.
    pub fn render_charging_initial(&self) -> SplashFrame {
        self.centered_only(CHARGING_SPLASH, CHARGING_KEYWORDS)
            .unwrap_or_else(|| self.render_charging(0))
    }

    /// Animated charging frame for `capacity` percent.
    pub fn render_charging(&self, capacity: u8) -> SplashFrame {
        ANIMATED_CANDIDATES
            .iter()
            .find_map(|(name, candidate)| {
                let frame = candidate(self, capacity);
                if frame.is_none() {
                    log::trace!("{name} frame declined at {capacity}%");
                }
                frame
            })
            .unwrap_or_else(|| self.render_normal(capacity))
    }

    fn blank(&self) -> FrameBuilder {
        FrameBuilder::new(self.logical_size)
    }

    /// Paste the sprite for a role, if any, centered. Returns whether it was found.
    fn paste_centered(&self, frame: &mut FrameBuilder, slot: Slot, keywords: &[&str]) -> bool {
        match self.atlas.resolve(slot, keywords) {
            Some(sprite) => {
                frame.paste_centered(slot, sprite);
                true
            }
            None => false,
        }
    }

    /// A frame holding just one centered role sprite, or `None` without it.
    fn centered_only(&self, slot: Slot, keywords: &[&str]) -> Option<SplashFrame> {
        let mut frame = self.blank();
        self.paste_centered(&mut frame, slot, keywords)
            .then(|| frame.finish())
    }

    fn try_no_battery(&self, capacity: u8) -> Option<SplashFrame> {
        if capacity != 0 {
            return None;
        }
        self.centered_only(NO_BATTERY, NO_BATTERY_KEYWORDS)
    }

    fn try_full_battery(&self, capacity: u8) -> Option<SplashFrame> {
        if capacity < 100 {
            return None;
        }
        self.centered_only(FULL_BACKGROUND, FULL_KEYWORDS)
    }

    fn try_low_battery(&self, capacity: u8) -> Option<SplashFrame> {
        if capacity > LOW_BATTERY_THRESHOLD {
            return None;
        }
        let current = slots::low_battery_frame(self.low_battery.frame());
        let (slot, background) = self
            .atlas
            .get(current)
            .map(|s| (current, s))
            .or_else(|| self.atlas.get(LOW_BATTERY_START).map(|s| (LOW_BATTERY_START, s)))?;

        let mut frame = self.blank();
        frame.paste_centered(slot, background);
        self.draw_label(&mut frame, capacity);
        Some(frame.finish())
    }

    /// Background, battery fill, wave and label. Never declines.
    fn render_normal(&self, capacity: u8) -> SplashFrame {
        let mut frame = self.blank();
        self.paste_centered(&mut frame, CHARGING_BACKGROUND, &[]);

        let geometry = FillGeometry::new(&self.layout, capacity);
        if draw_fill(&mut frame, &self.atlas, &self.layout, geometry) {
            draw_wave(&mut frame, &self.atlas, &self.layout, geometry, self.wave.frame());
        }

        self.draw_label(&mut frame, capacity);
        frame.finish()
    }

    fn draw_label(&self, frame: &mut FrameBuilder, capacity: u8) {
        draw_percentage(
            frame,
            &self.atlas,
            capacity,
            self.layout.percent_anchor(),
            self.layout.digit_spacing(),
        );
    }
}
