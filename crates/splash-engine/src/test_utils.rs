//! Sprite and atlas builders shared by unit tests.

use crate::assets::atlas::SpriteAtlas;
use crate::assets::slots::Slot;
use crate::assets::sprite::{Rgba, Sprite};

pub fn atlas_of(entries: Vec<(String, Sprite)>) -> SpriteAtlas {
    SpriteAtlas::build(entries).expect("test atlas must not be empty")
}

/// Opaque sprite whose red channel encodes the slot, so pastes are traceable
/// in pixel assertions.
pub fn marked(slot: Slot, width: u32, height: u32) -> (String, Sprite) {
    (
        format!("{slot}.png"),
        Sprite::solid(width, height, Rgba::opaque(slot as u8, 0, 0)),
    )
}

/// Ten digit glyphs and a percent sign, all `width` x 30.
pub fn digit_glyphs(width: u32, percent_width: u32) -> Vec<(String, Sprite)> {
    let mut glyphs: Vec<_> = (5..15).map(|slot| marked(slot, width, 30)).collect();
    glyphs.push(marked(15, percent_width, 30));
    glyphs
}
