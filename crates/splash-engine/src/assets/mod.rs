// assets/mod.rs
//
// Sprite storage: decoded pixels, slot numbering, the atlas index
// and layout presets.

pub mod atlas;
pub mod preset;
pub mod slots;
pub mod sprite;

pub use atlas::{slot_from_filename, SpriteAtlas, DEFAULT_LOGICAL_SIZE};
pub use preset::LayoutPreset;
pub use slots::Slot;
pub use sprite::{Rgba, Sprite};
