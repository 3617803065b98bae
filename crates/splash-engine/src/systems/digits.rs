//! Percentage label rendering.
//!
//! The label is the decimal capacity followed by a percent glyph, each
//! character pasted from its own digit slot. The whole group is centered
//! horizontally on an anchor point; the anchor's y is the glyphs' top edge.

use glam::IVec2;

use crate::api::layout::saturate;
use crate::assets::atlas::SpriteAtlas;
use crate::assets::slots::{self, Slot, PERCENT_SIGN};
use crate::renderer::frame::FrameBuilder;

/// Horizontal advance reserved for a digit whose glyph is missing.
pub const MISSING_GLYPH_ADVANCE: i32 = 12;

/// Where one glyph of the label lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub slot: Slot,
    pub origin: IVec2,
}

/// Lay out the label for `capacity` around `anchor`.
///
/// Only glyphs present in the atlas are returned; missing digits still take
/// up [`MISSING_GLYPH_ADVANCE`] pixels so the rest of the label keeps its
/// position. Positions past the `i32` range saturate.
pub fn layout_percentage(
    atlas: &SpriteAtlas,
    capacity: u8,
    anchor: IVec2,
    spacing: u32,
) -> Vec<GlyphPlacement> {
    let digits: Vec<Slot> = capacity
        .to_string()
        .bytes()
        .map(|b| slots::digit(b - b'0'))
        .collect();

    let advance = |slot: Slot| match atlas.get(slot) {
        Some(glyph) => glyph.width() as i64 + spacing as i64,
        None => MISSING_GLYPH_ADVANCE as i64,
    };

    let percent = atlas.get(PERCENT_SIGN);
    let total_width: i64 = digits.iter().map(|&s| advance(s)).sum::<i64>()
        + percent.map_or(0, |p| p.width() as i64);

    let glyph_at = |slot: Slot, x: i64| GlyphPlacement {
        slot,
        origin: IVec2::new(saturate(x), anchor.y),
    };

    let mut cursor = anchor.x as i64 - total_width.div_euclid(2);
    let mut placements = Vec::with_capacity(digits.len() + 1);
    for slot in digits {
        if atlas.get(slot).is_some() {
            placements.push(glyph_at(slot, cursor));
        }
        cursor += advance(slot);
    }

    if percent.is_some() {
        placements.push(glyph_at(PERCENT_SIGN, cursor));
    }
    placements
}

/// Paste the percentage label for `capacity` onto the frame.
pub fn draw_percentage(
    frame: &mut FrameBuilder,
    atlas: &SpriteAtlas,
    capacity: u8,
    anchor: IVec2,
    spacing: u32,
) {
    for glyph in layout_percentage(atlas, capacity, anchor, spacing) {
        if let Some(sprite) = atlas.get(glyph.slot) {
            frame.paste(glyph.slot, sprite, glyph.origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::sprite::{Rgba, Sprite};
    use crate::test_utils::{atlas_of, digit_glyphs};

    fn glyph(slot: Slot, x: i32, y: i32) -> GlyphPlacement {
        GlyphPlacement {
            slot,
            origin: IVec2::new(x, y),
        }
    }

    #[test]
    fn single_digit_centers_on_anchor() {
        let atlas = atlas_of(digit_glyphs(20, 15));
        let glyphs = layout_percentage(&atlas, 5, IVec2::new(640, 95), 2);

        // total = 20 + 2 + 15 = 37, start = 640 - 18 = 622
        assert_eq!(glyphs, vec![glyph(10, 622, 95), glyph(15, 644, 95)]);
    }

    #[test]
    fn multi_digit_advances_by_width_and_spacing() {
        let atlas = atlas_of(digit_glyphs(20, 15));
        let glyphs = layout_percentage(&atlas, 100, IVec2::new(0, 0), 2);

        // total = 3 * 22 + 15 = 81, start = 0 - 40 = -40
        let xs: Vec<i32> = glyphs.iter().map(|g| g.origin.x).collect();
        let slots: Vec<Slot> = glyphs.iter().map(|g| g.slot).collect();
        assert_eq!(slots, vec![6, 5, 5, 15]);
        assert_eq!(xs, vec![-40, -18, 4, 26]);
    }

    #[test]
    fn missing_digit_reserves_placeholder_width() {
        // Only digit '4' and the percent glyph exist
        let atlas = atlas_of(vec![
            ("9.png".to_string(), Sprite::solid(20, 30, Rgba::BLACK)),
            ("15.png".to_string(), Sprite::solid(15, 30, Rgba::BLACK)),
        ]);
        let glyphs = layout_percentage(&atlas, 42, IVec2::new(100, 10), 2);

        // total = 22 (the '4') + 12 (missing '2') + 15 = 49, start = 100 - 24 = 76
        assert_eq!(glyphs, vec![glyph(9, 76, 10), glyph(15, 110, 10)]);
    }

    #[test]
    fn no_glyphs_at_all_yields_nothing() {
        let atlas = atlas_of(vec![("36.png".to_string(), Sprite::solid(4, 4, Rgba::BLACK))]);
        assert!(layout_percentage(&atlas, 73, IVec2::ZERO, 2).is_empty());
    }

    #[test]
    fn extreme_anchor_and_spacing_saturate() {
        let atlas = atlas_of(digit_glyphs(20, 15));

        // total = 59: glyphs start at MIN - 29, MIN - 7 and MIN + 15
        let left = layout_percentage(&atlas, 50, IVec2::new(i32::MIN, 0), 2);
        let xs: Vec<i32> = left.iter().map(|g| g.origin.x).collect();
        assert_eq!(xs, vec![i32::MIN, i32::MIN, i32::MIN + 15]);

        let right = layout_percentage(&atlas, 50, IVec2::new(i32::MAX, 0), 2);
        assert_eq!(right.last().map(|g| g.origin.x), Some(i32::MAX));

        // Spacing beyond i32::MAX pushes later glyphs right, never wraps left
        let spaced = layout_percentage(&atlas, 50, IVec2::ZERO, u32::MAX);
        assert_eq!(spaced.len(), 3);
        assert!(spaced[0].origin.x < spaced[1].origin.x);
        assert!(spaced[1].origin.x < spaced[2].origin.x);
    }

    #[test]
    fn draw_records_each_glyph() {
        let atlas = atlas_of(digit_glyphs(20, 15));
        let mut frame = FrameBuilder::new(glam::UVec2::new(1280, 720));
        draw_percentage(&mut frame, &atlas, 57, IVec2::new(640, 95), 2);

        let frame = frame.finish();
        assert_eq!(frame.slots(), vec![10, 12, 15]);
        assert!(frame.placements.iter().all(|p| p.y == 95));
    }
}
