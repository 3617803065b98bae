pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod assets;

#[cfg(test)]
mod test_utils;

// Re-export key types at crate root for convenience
pub use api::error::{Result, SplashError};
pub use api::layout::{BatteryRect, FillCurve, LayoutParams};
pub use api::types::{ChargingPhase, SplashMode};
pub use assets::atlas::SpriteAtlas;
pub use assets::preset::LayoutPreset;
pub use assets::slots::Slot;
pub use assets::sprite::{Rgba, Sprite};
pub use components::animation::FrameCounter;
pub use crate::core::compositor::Compositor;
pub use crate::core::session::SplashSession;
pub use crate::core::time::RateClock;
pub use renderer::canvas::{Canvas, Placement};
pub use renderer::frame::SplashFrame;
