/// Which splash the bootloader is showing. Selected by the driver; the
/// compositor never switches modes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplashMode {
    #[default]
    Boot,
    Charging,
    Recovery,
}

/// Sub-state of charging mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChargingPhase {
    /// Static splash shown for the first seconds after charging starts.
    #[default]
    InitialSplash,
    /// Battery-level driven animation.
    Animated,
}

impl SplashMode {
    pub fn name(self) -> &'static str {
        match self {
            SplashMode::Boot => "boot",
            SplashMode::Charging => "charging",
            SplashMode::Recovery => "recovery",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_boot() {
        assert_eq!(SplashMode::default(), SplashMode::Boot);
        assert_eq!(ChargingPhase::default(), ChargingPhase::InitialSplash);
    }

    #[test]
    fn names() {
        assert_eq!(SplashMode::Charging.name(), "charging");
        assert_eq!(SplashMode::Recovery.name(), "recovery");
    }
}
