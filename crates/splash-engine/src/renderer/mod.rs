pub mod canvas;
pub mod frame;

// Re-export key types for convenient access
pub use canvas::{centered_origin, Canvas, Placement};
pub use frame::{FrameBuilder, SplashFrame};
