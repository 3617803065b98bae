use std::collections::HashMap;

use glam::UVec2;

use crate::api::error::{Result, SplashError};
use crate::assets::slots::{
    Slot, BOOT_LOGO, CHARGING_BACKGROUND, FULL_BACKGROUND, RECOVERY_OVERLAY,
};
use crate::assets::sprite::Sprite;

/// Canvas size used when no background sprite is available.
pub const DEFAULT_LOGICAL_SIZE: UVec2 = UVec2::new(1280, 720);

/// Backgrounds consulted, in order, to size the logical canvas.
const SIZE_SOURCES: [Slot; 4] = [
    BOOT_LOGO,
    CHARGING_BACKGROUND,
    FULL_BACKGROUND,
    RECOVERY_OVERLAY,
];

/// Extract the slot index embedded in a filename: the first run of
/// decimal digits, truncated to its first three digits.
///
/// `"logo_1.png"` → 1, `"splash036.bmp"` → 36, `"boot.png"` → `None`.
pub fn slot_from_filename(name: &str) -> Option<Slot> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let slot = name[start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .take(3)
        .fold(0, |acc: Slot, b| acc * 10 + (b - b'0') as Slot);
    Some(slot)
}

/// All sprites of one asset folder: slot-indexed ones plus keyword-addressed
/// fallbacks whose names carried no index.
///
/// Built once and read-only afterwards; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    slots: HashMap<Slot, Sprite>,
    fallbacks: Vec<(String, Sprite)>,
}

impl SpriteAtlas {
    /// Build an atlas from `(filename, sprite)` pairs in listing order.
    ///
    /// Duplicate slot indices overwrite silently (last one wins).
    pub fn build<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Sprite)>,
        S: Into<String>,
    {
        let mut slots = HashMap::new();
        let mut fallbacks = Vec::new();

        for (name, sprite) in entries {
            let name = name.into();
            match slot_from_filename(&name) {
                Some(slot) => {
                    if slots.insert(slot, sprite).is_some() {
                        log::debug!("slot {slot} overwritten by {name}");
                    }
                }
                None => fallbacks.push((name, sprite)),
            }
        }

        if slots.is_empty() && fallbacks.is_empty() {
            return Err(SplashError::EmptyAtlas);
        }

        log::debug!(
            "atlas built: {} indexed, {} fallback sprites",
            slots.len(),
            fallbacks.len()
        );
        Ok(Self { slots, fallbacks })
    }

    /// Look up a sprite by slot index.
    pub fn get(&self, slot: Slot) -> Option<&Sprite> {
        self.slots.get(&slot)
    }

    /// First fallback sprite whose filename contains `keyword`, ignoring case.
    pub fn find_by_keyword(&self, keyword: &str) -> Option<&Sprite> {
        let keyword = keyword.to_lowercase();
        self.fallbacks
            .iter()
            .find(|(name, _)| name.to_lowercase().contains(&keyword))
            .map(|(_, sprite)| sprite)
    }

    /// Slot lookup, then each keyword in order.
    pub fn resolve(&self, slot: Slot, keywords: &[&str]) -> Option<&Sprite> {
        self.get(slot)
            .or_else(|| keywords.iter().find_map(|k| self.find_by_keyword(k)))
    }

    /// Occupied slot indices, ascending.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self.slots.keys().copied().collect();
        slots.sort_unstable();
        slots
    }

    pub fn fallbacks(&self) -> impl Iterator<Item = (&str, &Sprite)> {
        self.fallbacks.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Total number of sprites, indexed and fallback.
    pub fn len(&self) -> usize {
        self.slots.len() + self.fallbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the logical canvas frames are composited on.
    ///
    /// The first present background among boot logo, charging background,
    /// full background and recovery overlay; the default size otherwise; or
    /// the first fallback sprite's size when nothing is slot-indexed.
    pub fn logical_size(&self) -> UVec2 {
        if self.slots.is_empty() {
            if let Some((_, sprite)) = self.fallbacks.first() {
                return sprite.size();
            }
        }
        SIZE_SOURCES
            .iter()
            .find_map(|&slot| self.get(slot))
            .map(Sprite::size)
            .unwrap_or(DEFAULT_LOGICAL_SIZE)
    }
}
