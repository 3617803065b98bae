use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::assets::slots::Slot;
use crate::assets::sprite::{Rgba, Sprite};

/// `round(a * mask + b * (255 - mask)) / 255` in integer arithmetic.
#[inline]
fn blend_channel(src: u8, dst: u8, mask: u8) -> u8 {
    let tmp = src as u32 * mask as u32 + dst as u32 * (255 - mask as u32) + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

/// Where a sprite was pasted during composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Role the sprite filled (keyword fallbacks report the role's slot).
    pub slot: Slot,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Top-left origin that centers `inner` inside `outer` (floor division).
pub fn centered_origin(outer: UVec2, inner: UVec2) -> IVec2 {
    (outer.as_ivec2() - inner.as_ivec2()).div_euclid(IVec2::splat(2))
}

/// RGBA surface frames are composited on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Fully opaque black canvas.
    pub fn black(size: UVec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
            pixels: vec![Rgba::BLACK; size.x as usize * size.y as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flat RGBA8 view, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Paste `sprite` with its top-left corner at `origin`, using its own
    /// alpha as the blend mask for all four channels. Parts outside the
    /// canvas are clipped.
    pub fn paste(&mut self, sprite: &Sprite, origin: IVec2) {
        let canvas = IVec2::new(self.width as i32, self.height as i32);
        let lo = origin.max(IVec2::ZERO);
        let hi = origin.saturating_add(sprite.size().as_ivec2()).min(canvas);
        if lo.x >= hi.x || lo.y >= hi.y {
            return;
        }

        let src_w = sprite.width() as usize;
        let src = sprite.pixels();
        for y in lo.y..hi.y {
            let sy = (y - origin.y) as usize;
            let row_start = y as usize * self.width as usize;
            for x in lo.x..hi.x {
                let s = src[sy * src_w + (x - origin.x) as usize];
                let d = &mut self.pixels[row_start + x as usize];
                match s.a {
                    0 => {}
                    255 => *d = s,
                    mask => {
                        *d = Rgba::new(
                            blend_channel(s.r, d.r, mask),
                            blend_channel(s.g, d.g, mask),
                            blend_channel(s.b, d.b, mask),
                            blend_channel(s.a, d.a, mask),
                        );
                    }
                }
            }
        }
    }
}
