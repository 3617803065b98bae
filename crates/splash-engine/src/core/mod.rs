pub mod compositor;
pub mod session;
pub mod time;

pub use compositor::{Compositor, LOW_BATTERY_THRESHOLD};
pub use session::{SplashSession, INITIAL_SPLASH_SECS};
pub use time::RateClock;
