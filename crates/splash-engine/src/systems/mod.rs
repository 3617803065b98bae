pub mod battery;
pub mod digits;

pub use battery::{draw_fill, draw_wave, FillGeometry};
pub use digits::{draw_percentage, layout_percentage, GlyphPlacement};
