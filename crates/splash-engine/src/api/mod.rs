pub mod error;
pub mod layout;
pub mod types;

pub use error::{Result, SplashError};
pub use layout::{BatteryRect, FillCurve, LayoutParams, MAX_BATTERY_EXTENT};
pub use types::{ChargingPhase, SplashMode};
