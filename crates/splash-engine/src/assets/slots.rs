//! Fixed slot contract: which filename index plays which role.

/// Integer index parsed from a sprite's filename.
pub type Slot = u16;

pub const BOOT_LOGO: Slot = 1;
pub const CHARGING_SPLASH: Slot = 3;
pub const NO_BATTERY: Slot = 4;
/// Digit glyphs '0'..'9' occupy `DIGIT_START..DIGIT_START + 10`.
pub const DIGIT_START: Slot = 5;
pub const PERCENT_SIGN: Slot = 15;
/// First of the 10-frame charging-wave animation.
pub const WAVE_START: Slot = 16;
/// First of the 10-frame low-battery background animation.
pub const LOW_BATTERY_START: Slot = 26;
pub const CHARGING_BACKGROUND: Slot = 36;
pub const BATTERY_FILL: Slot = 37;
pub const FULL_BACKGROUND: Slot = 38;
pub const RECOVERY_OVERLAY: Slot = 39;

/// Frames in both looping animations.
pub const ANIMATION_FRAMES: u8 = 10;

/// Slot of the glyph for a decimal digit (0..=9).
pub fn digit(value: u8) -> Slot {
    DIGIT_START + value as Slot
}

/// Slot of the wave sprite for an animation frame.
pub fn wave_frame(frame: u8) -> Slot {
    WAVE_START + (frame % ANIMATION_FRAMES) as Slot
}

/// Slot of the low-battery background for an animation frame.
pub fn low_battery_frame(frame: u8) -> Slot {
    LOW_BATTERY_START + (frame % ANIMATION_FRAMES) as Slot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_glyphs_span_five_to_fourteen() {
        assert_eq!(digit(0), 5);
        assert_eq!(digit(9), 14);
    }

    #[test]
    fn animation_slots_wrap() {
        assert_eq!(wave_frame(0), 16);
        assert_eq!(wave_frame(9), 25);
        assert_eq!(wave_frame(10), 16);
        assert_eq!(low_battery_frame(3), 29);
        assert_eq!(low_battery_frame(13), 29);
    }
}
