use bytemuck::{Pod, Zeroable};
use glam::UVec2;

/// One RGBA8 pixel. Layout matches the byte order of decoded RGBA buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// A decoded RGBA bitmap. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Build from row-major pixels. Returns `None` if the pixel count does not
    /// match `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from a raw RGBA8 byte buffer as produced by an image decoder.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        let pixels: &[Rgba] = bytemuck::try_cast_slice(bytes).ok()?;
        Self::new(width, height, pixels.to_vec())
    }

    /// A sprite filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
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

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at (x, y), or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Resize horizontally with nearest-neighbour sampling, keeping the height.
    ///
    /// Source column for destination `x` is `floor((x + 0.5) * src_w / dst_w)`,
    /// the pixel-center convention used by common imaging libraries.
    pub fn resize_width_nearest(&self, new_width: u32) -> Sprite {
        if new_width == self.width {
            return self.clone();
        }
        if self.width == 0 || new_width == 0 {
            return Sprite::solid(new_width, self.height, Rgba::TRANSPARENT);
        }

        let scale = self.width as f64 / new_width as f64;
        let columns: Vec<usize> = (0..new_width)
            .map(|x| (((x as f64 + 0.5) * scale) as usize).min(self.width as usize - 1))
            .collect();

        let mut pixels = Vec::with_capacity(new_width as usize * self.height as usize);
        for row in self.pixels.chunks_exact(self.width as usize) {
            pixels.extend(columns.iter().map(|&c| row[c]));
        }

        Sprite {
            width: new_width,
            height: self.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Rgba>(), 4);
    }

    #[test]
    fn from_bytes_checks_length() {
        let bytes = [10u8, 20, 30, 255, 1, 2, 3, 4];
        let sprite = Sprite::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(sprite.pixel(0, 0), Some(Rgba::new(10, 20, 30, 255)));
        assert_eq!(sprite.pixel(1, 0), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(sprite.as_bytes(), &bytes);

        assert!(Sprite::from_rgba_bytes(3, 1, &bytes).is_none());
        assert!(Sprite::from_rgba_bytes(1, 1, &bytes[..5]).is_none());
    }

    #[test]
    fn pixel_out_of_bounds() {
        let sprite = Sprite::solid(2, 2, Rgba::BLACK);
        assert!(sprite.pixel(2, 0).is_none());
        assert!(sprite.pixel(0, 2).is_none());
    }

    #[test]
    fn nearest_resize_doubles_columns() {
        let a = Rgba::opaque(255, 0, 0);
        let b = Rgba::opaque(0, 0, 255);
        let sprite = Sprite::new(2, 1, vec![a, b]).unwrap();

        let wide = sprite.resize_width_nearest(4);
        assert_eq!(wide.size(), UVec2::new(4, 1));
        assert_eq!(wide.pixels(), &[a, a, b, b]);
    }

    #[test]
    fn nearest_resize_samples_pixel_centers_when_shrinking() {
        let px: Vec<Rgba> = (0..4).map(|i| Rgba::opaque(i, 0, 0)).collect();
        let sprite = Sprite::new(4, 2, [px.clone(), px].concat()).unwrap();

        // scale = 2: centers 1.0 and 3.0 -> columns 1 and 3
        let narrow = sprite.resize_width_nearest(2);
        assert_eq!(narrow.height(), 2);
        assert_eq!(narrow.pixel(0, 0).unwrap().r, 1);
        assert_eq!(narrow.pixel(1, 0).unwrap().r, 3);
        assert_eq!(narrow.pixel(1, 1).unwrap().r, 3);
    }
}
