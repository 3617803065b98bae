pub mod animation;

pub use animation::FrameCounter;
