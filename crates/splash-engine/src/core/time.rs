/// Converts variable frame time into whole animation steps at a fixed rate.
pub struct RateClock {
    /// Seconds per step.
    interval: f32,
    /// Shortest interval allowed, whatever the requested rate.
    min_interval: f32,
    /// Time carried over from previous calls.
    accumulator: f32,
}

/// Cap on steps returned by a single `accumulate` call.
const MAX_STEPS_PER_CALL: u32 = 10;

impl RateClock {
    /// Clock ticking `fps` times per second. `fps` must be positive.
    pub fn new(fps: f32) -> Self {
        Self {
            interval: 1.0 / fps,
            min_interval: 0.0,
            accumulator: 0.0,
        }
    }

    /// Never step more often than once per `min_interval` seconds.
    pub fn with_min_interval(mut self, min_interval: f32) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Change the rate, keeping accumulated time.
    pub fn set_rate(&mut self, fps: f32) {
        self.interval = 1.0 / fps;
    }

    /// Drop accumulated time so the next step is a full interval away.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Seconds per step after applying the minimum interval.
    pub fn interval(&self) -> f32 {
        self.interval.max(self.min_interval)
    }

    /// Add elapsed time. Returns the number of steps to apply.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        let interval = self.interval();
        self.accumulator += dt.max(0.0);
        // Cap to avoid a burst of frames after a stall
        self.accumulator = self.accumulator.min(interval * MAX_STEPS_PER_CALL as f32);
        let steps = (self.accumulator / interval) as u32;
        self.accumulator -= steps as f32 * interval;
        steps
    }
}
