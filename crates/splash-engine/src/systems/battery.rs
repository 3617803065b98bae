//! Battery "liquid" fill and the wave riding on top of it.

use glam::IVec2;

use crate::api::layout::{saturate, LayoutParams};
use crate::assets::atlas::SpriteAtlas;
use crate::assets::slots::{self, BATTERY_FILL};
use crate::assets::sprite::Sprite;
use crate::renderer::frame::FrameBuilder;

/// Geometry of the fill for one capacity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillGeometry {
    /// Pixels of the battery rectangle covered at this capacity.
    pub height: i32,
    /// Top edge of the fill, after the offset curve.
    pub top: i32,
}

impl FillGeometry {
    pub fn new(layout: &LayoutParams, capacity: u8) -> Self {
        let battery = layout.battery();
        let battery_h = battery.size().y as i64;
        let height = battery_h * capacity as i64 / 100;
        let top =
            battery.origin().y as i64 + (battery_h - height) + layout.fill_offset(capacity) as i64;
        Self {
            height: saturate(height),
            top: saturate(top),
        }
    }
}

/// Row origins at which the fill tile is pasted: from `top` down to the
/// battery's bottom edge in steps of the tile height.
///
/// Rows whose tile lies wholly above the canvas or starts below
/// `canvas_height` are skipped; they would paste nothing.
pub fn fill_rows(
    layout: &LayoutParams,
    geometry: FillGeometry,
    tile_height: u32,
    canvas_height: u32,
) -> Vec<i32> {
    if geometry.height <= 0 {
        return Vec::new();
    }
    let step = tile_height.max(1) as i64;
    let top = geometry.top as i64;
    let bottom = (layout.battery().bottom() as i64).min(canvas_height as i64);

    // First row whose tile reaches y = 0
    let skipped = (-top).div_euclid(step).max(0);
    let mut y = top + skipped * step;
    let mut rows = Vec::new();
    while y < bottom {
        rows.push(y as i32);
        y += step;
    }
    rows
}

/// Paste the fill tile over the battery rectangle.
///
/// The tile is stretched (nearest neighbour) to the battery width and repeated
/// vertically. Returns `false` when the atlas has no fill tile.
pub fn draw_fill(
    frame: &mut FrameBuilder,
    atlas: &SpriteAtlas,
    layout: &LayoutParams,
    geometry: FillGeometry,
) -> bool {
    let Some(tile) = atlas.get(BATTERY_FILL) else {
        return false;
    };

    let battery = layout.battery();
    let tile: Sprite = tile.resize_width_nearest(battery.size().x);
    for y in fill_rows(layout, geometry, tile.height(), frame.size().y) {
        frame.paste(BATTERY_FILL, &tile, IVec2::new(battery.origin().x, y));
    }
    true
}

/// Origin of a wave sprite: centered over the battery, bottom edge on the
/// fill's top edge, never above the canvas.
pub fn wave_origin(layout: &LayoutParams, geometry: FillGeometry, wave: &Sprite) -> IVec2 {
    let battery = layout.battery();
    let inset = (battery.size().x as i64 - wave.width() as i64).div_euclid(2);
    let x = battery.origin().x as i64 + inset;
    let y = (geometry.top as i64 - wave.height() as i64).max(0);
    IVec2::new(saturate(x), saturate(y))
}

/// Paste the wave frame for `wave_frame` on top of the fill.
pub fn draw_wave(
    frame: &mut FrameBuilder,
    atlas: &SpriteAtlas,
    layout: &LayoutParams,
    geometry: FillGeometry,
    wave_frame: u8,
) {
    let slot = slots::wave_frame(wave_frame);
    if let Some(wave) = atlas.get(slot) {
        frame.paste(slot, wave, wave_origin(layout, geometry, wave));
    }
}
