use glam::{IVec2, UVec2};

use super::canvas::{centered_origin, Canvas, Placement};
use crate::assets::slots::Slot;
use crate::assets::sprite::Sprite;

/// One composited splash frame plus the record of every paste, in paste order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashFrame {
    pub canvas: Canvas,
    pub placements: Vec<Placement>,
}

impl SplashFrame {
    /// Slots pasted, in paste order.
    pub fn slots(&self) -> Vec<Slot> {
        self.placements.iter().map(|p| p.slot).collect()
    }
}

/// Accumulates pastes onto a black canvas of fixed size.
pub struct FrameBuilder {
    canvas: Canvas,
    placements: Vec<Placement>,
}

impl FrameBuilder {
    pub fn new(size: UVec2) -> Self {
        Self {
            canvas: Canvas::black(size),
            placements: Vec::with_capacity(8),
        }
    }

    /// Paste a sprite at `origin` and record it under `slot`.
    pub fn paste(&mut self, slot: Slot, sprite: &Sprite, origin: IVec2) {
        self.canvas.paste(sprite, origin);
        self.placements.push(Placement {
            slot,
            x: origin.x,
            y: origin.y,
            width: sprite.width(),
            height: sprite.height(),
        });
    }

    /// Paste a sprite centered on the canvas.
    pub fn paste_centered(&mut self, slot: Slot, sprite: &Sprite) {
        let origin = centered_origin(self.canvas.size(), sprite.size());
        self.paste(slot, sprite, origin);
    }

    /// Size of the canvas being composited.
    pub fn size(&self) -> UVec2 {
        self.canvas.size()
    }

    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    pub fn finish(self) -> SplashFrame {
        SplashFrame {
            canvas: self.canvas,
            placements: self.placements,
        }
    }
}
