use std::sync::Arc;

use crate::api::layout::LayoutParams;
use crate::api::types::{ChargingPhase, SplashMode};
use crate::assets::atlas::SpriteAtlas;
use crate::assets::preset::LayoutPreset;
use crate::core::compositor::{Compositor, LOW_BATTERY_THRESHOLD};
use crate::core::time::RateClock;
use crate::renderer::frame::SplashFrame;

/// How long the static charging splash stays up after charging starts.
pub const INITIAL_SPLASH_SECS: f32 = 5.0;
/// The wave never advances more often than this, whatever its rate.
pub const WAVE_MIN_INTERVAL_SECS: f32 = 0.02;

/// An animation clock plus whether its animation is currently playing.
struct Track {
    clock: RateClock,
    running: bool,
}

impl Track {
    fn new(clock: RateClock) -> Self {
        Self {
            clock,
            running: false,
        }
    }

    /// Start or stop the track. Returns true when it just started.
    fn set_running(&mut self, running: bool) -> bool {
        let started = running && !self.running;
        if started {
            self.clock.reset();
        }
        self.running = running;
        started
    }

    fn steps(&mut self, fps: f32, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.clock.set_rate(fps);
        self.clock.accumulate(dt)
    }
}

/// Tick-driven driver over one compositor.
///
/// Owns the selected mode and battery level, times the initial charging
/// splash, and steps the wave and low-battery animations at their configured
/// rates while they apply.
pub struct SplashSession {
    compositor: Compositor,
    mode: SplashMode,
    battery: u8,
    /// Seconds since charging mode was last entered.
    charging_elapsed: f32,
    wave: Track,
    low_battery: Track,
}

impl SplashSession {
    pub fn new(atlas: Arc<SpriteAtlas>) -> Self {
        Self::with_layout(atlas, LayoutParams::default())
    }

    pub fn with_layout(atlas: Arc<SpriteAtlas>, layout: LayoutParams) -> Self {
        let wave =
            RateClock::new(layout.wave_fps()).with_min_interval(WAVE_MIN_INTERVAL_SECS);
        let low_battery = RateClock::new(layout.low_fps());
        Self {
            compositor: Compositor::with_layout(atlas, layout),
            mode: SplashMode::Boot,
            battery: 50,
            charging_elapsed: 0.0,
            wave: Track::new(wave),
            low_battery: Track::new(low_battery),
        }
    }

    /// Swap in a new atlas. Layout parameters are kept; the mode returns to boot.
    pub fn load_atlas(&mut self, atlas: Arc<SpriteAtlas>) {
        log::info!(
            "atlas loaded: {} sprites, slots {:?}",
            atlas.len(),
            atlas.slots()
        );
        let layout = self.compositor.layout().clone();
        self.compositor = Compositor::with_layout(atlas, layout);
        self.set_mode(SplashMode::Boot);
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn layout(&self) -> &LayoutParams {
        self.compositor.layout()
    }

    pub fn layout_mut(&mut self) -> &mut LayoutParams {
        self.compositor.layout_mut()
    }

    /// Replace every layout parameter with a preset's (coerced) values.
    pub fn apply_preset(&mut self, preset: &LayoutPreset) {
        self.compositor.set_layout(preset.to_layout());
    }

    pub fn mode(&self) -> SplashMode {
        self.mode
    }

    pub fn battery(&self) -> u8 {
        self.battery
    }

    /// Select a mode. Selecting charging (again) restarts the splash timer and
    /// both animations.
    pub fn set_mode(&mut self, mode: SplashMode) {
        log::info!("mode: {}", mode.name());
        self.mode = mode;
        self.charging_elapsed = 0.0;
        self.wave.set_running(false);
        self.low_battery.set_running(false);
        self.sync_animations();
    }

    /// Set the battery level, clamped to 0..=100.
    pub fn set_battery(&mut self, percent: i32) {
        self.battery = percent.clamp(0, 100) as u8;
        self.sync_animations();
    }

    /// Charging sub-state for the current elapsed time.
    pub fn phase(&self) -> ChargingPhase {
        if self.charging_elapsed < INITIAL_SPLASH_SECS {
            ChargingPhase::InitialSplash
        } else {
            ChargingPhase::Animated
        }
    }

    /// Advance time by `dt` seconds and render the resulting frame.
    pub fn tick(&mut self, dt: f32) -> SplashFrame {
        let dt = dt.max(0.0);
        if self.mode == SplashMode::Charging {
            self.charging_elapsed += dt;
        }

        self.sync_animations();
        let layout = self.compositor.layout();
        let (wave_fps, low_fps) = (layout.wave_fps(), layout.low_fps());

        for _ in 0..self.wave.steps(wave_fps, dt) {
            self.compositor.step_wave();
        }
        for _ in 0..self.low_battery.steps(low_fps, dt) {
            self.compositor.step_low_battery();
        }

        self.render()
    }

    /// Render the current state without advancing time.
    pub fn render(&self) -> SplashFrame {
        self.compositor.render(self.mode, self.phase(), self.battery)
    }

    /// The wave plays while charging above the low threshold, the low-battery
    /// animation while charging at or below it. Each restarts from frame 0.
    fn sync_animations(&mut self) {
        let charging = self.mode == SplashMode::Charging;
        let low = self.battery <= LOW_BATTERY_THRESHOLD;

        if self.wave.set_running(charging && !low) {
            self.compositor.reset_wave();
        }
        if self.low_battery.set_running(charging && low) {
            log::debug!("low-battery animation started at {}%", self.battery);
            self.compositor.reset_low_battery();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{atlas_of, marked};

    fn session() -> SplashSession {
        let mut entries = vec![
            marked(1, 320, 240),
            marked(3, 100, 100),
            marked(36, 320, 240),
            marked(37, 163, 10),
        ];
        entries.extend((16..36).map(|s| marked(s, 40, 6)));
        let mut session = SplashSession::new(Arc::new(atlas_of(entries)));
        session.layout_mut().set_wave_fps(4.0);
        session.layout_mut().set_low_fps(4.0);
        session
    }

    #[test]
    fn starts_in_boot_mode() {
        let mut s = session();
        assert_eq!(s.mode(), SplashMode::Boot);
        assert_eq!(s.tick(0.25).slots(), vec![1]);
    }

    #[test]
    fn initial_splash_lasts_five_seconds() {
        let mut s = session();
        s.set_mode(SplashMode::Charging);
        for _ in 0..4 {
            assert_eq!(s.tick(1.0).slots(), vec![3]);
        }
        assert_eq!(s.phase(), ChargingPhase::InitialSplash);

        s.tick(1.0);
        assert_eq!(s.phase(), ChargingPhase::Animated);
        assert_eq!(s.render().slots()[0], 36);
    }

    #[test]
    fn reselecting_charging_restarts_splash() {
        let mut s = session();
        s.set_mode(SplashMode::Charging);
        s.tick(6.0);
        assert_eq!(s.phase(), ChargingPhase::Animated);

        s.set_mode(SplashMode::Charging);
        assert_eq!(s.phase(), ChargingPhase::InitialSplash);
    }

    #[test]
    fn wave_steps_only_while_charging_above_threshold() {
        let mut s = session();
        s.tick(1.0);
        assert_eq!(s.compositor().wave_frame(), 0);

        s.set_mode(SplashMode::Charging);
        s.tick(0.25);
        assert_eq!(s.compositor().wave_frame(), 1);
        s.tick(0.5);
        assert_eq!(s.compositor().wave_frame(), 3);
        assert_eq!(s.compositor().low_battery_frame(), 0);
    }

    #[test]
    fn low_battery_animation_replaces_wave() {
        let mut s = session();
        s.set_battery(10);
        s.set_mode(SplashMode::Charging);
        s.tick(0.5);
        assert_eq!(s.compositor().low_battery_frame(), 2);
        assert_eq!(s.compositor().wave_frame(), 0);
    }

    #[test]
    fn crossing_threshold_restarts_animations() {
        let mut s = session();
        s.set_mode(SplashMode::Charging);
        s.tick(0.5);
        assert_eq!(s.compositor().wave_frame(), 2);

        s.set_battery(15);
        assert_eq!(s.compositor().low_battery_frame(), 0);
        s.tick(0.25);
        assert_eq!(s.compositor().low_battery_frame(), 1);

        s.set_battery(16);
        assert_eq!(s.compositor().wave_frame(), 0);
    }

    #[test]
    fn leaving_charging_stops_animations() {
        let mut s = session();
        s.set_mode(SplashMode::Charging);
        s.tick(0.25);
        s.set_mode(SplashMode::Recovery);
        s.tick(1.0);
        assert_eq!(s.compositor().wave_frame(), 1);
    }

    #[test]
    fn wave_rate_is_capped() {
        let mut s = session();
        s.layout_mut().set_wave_fps(1000.0);
        s.set_mode(SplashMode::Charging);
        s.tick(0.1);
        assert_eq!(s.compositor().wave_frame(), 5);
    }

    #[test]
    fn battery_is_clamped() {
        let mut s = session();
        s.set_battery(-5);
        assert_eq!(s.battery(), 0);
        s.set_battery(250);
        assert_eq!(s.battery(), 100);
    }

    #[test]
    fn animated_frame_tracks_battery() {
        let mut s = session();
        s.set_mode(SplashMode::Charging);
        s.tick(5.0);
        s.set_battery(5);
        // Low-battery background frame 0 is slot 26
        assert_eq!(s.render().slots(), vec![26]);
    }

    #[test]
    fn presets_and_atlas_swaps_keep_layout() {
        let mut s = session();
        let preset = LayoutPreset {
            percent_x: 10,
            battery_width: 0,
            ..LayoutPreset::default()
        };
        s.apply_preset(&preset);
        assert_eq!(s.layout().percent_anchor().x, 10);
        assert_eq!(s.layout().battery().size().x, 1);

        s.set_mode(SplashMode::Charging);
        s.load_atlas(Arc::new(atlas_of(vec![marked(39, 64, 64)])));
        assert_eq!(s.mode(), SplashMode::Boot);
        assert_eq!(s.layout().percent_anchor().x, 10);
        assert_eq!(s.compositor().logical_size(), glam::UVec2::new(64, 64));
    }
}
