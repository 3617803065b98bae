//! Looping frame counters for the wave and low-battery animations.
//!
//! Counters only move when stepped explicitly; rendering reads them but never
//! advances them.

use crate::assets::slots::ANIMATION_FRAMES;

/// Frame index that wraps after `period` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter {
    frame: u8,
    period: u8,
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new(ANIMATION_FRAMES)
    }
}

impl FrameCounter {
    /// A counter at frame 0. A zero period behaves as a period of 1.
    pub fn new(period: u8) -> Self {
        Self {
            frame: 0,
            period: period.max(1),
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn period(&self) -> u8 {
        self.period
    }

    /// Advance one frame, wrapping to 0 after the last.
    pub fn step(&mut self) {
        self.frame = (self.frame + 1) % self.period;
    }

    /// Restart at frame 0.
    pub fn reset(&mut self) {
        self.frame = 0;
    }
}
