use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Room sector types from `structs.h` (SECT_* constants).
///
/// Codes 0-9 are the original table. Newer world files extend it with
/// `Desert`, `Swamp` and `Road`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorType {
    Inside = 0,
    City = 1,
    Field = 2,
    Forest = 3,
    Hills = 4,
    Mountain = 5,
    WaterSwim = 6,
    WaterNoswim = 7,
    Underwater = 8,
    Flying = 9,
    Desert = 10,
    Swamp = 11,
    Road = 12,
}

impl SectorType {
    /// Number of sector codes known to pre-extension world files.
    pub const LEGACY_COUNT: u8 = 10;

    /// Whether this sector exists in the pre-extension table.
    pub const fn is_legacy(self) -> bool {
        (self as u8) < Self::LEGACY_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(SectorType::COUNT, 13);
    }

    #[test]
    fn discriminants() {
        assert_eq!(SectorType::Inside as u8, 0);
        assert_eq!(SectorType::WaterNoswim as u8, 7);
        assert_eq!(SectorType::Flying as u8, 9);
        assert_eq!(SectorType::Road as u8, 12);
    }

    #[test]
    fn names() {
        let name: &'static str = SectorType::WaterSwim.into();
        assert_eq!(name, "WATER_SWIM");
        let name: &'static str = SectorType::Inside.into();
        assert_eq!(name, "INSIDE");
    }

    #[test]
    fn legacy_subset() {
        assert_eq!(
            SectorType::iter().filter(|s| s.is_legacy()).count(),
            SectorType::LEGACY_COUNT as usize
        );
        assert!(!SectorType::Desert.is_legacy());
    }

    #[test]
    fn round_trip() {
        for s in SectorType::iter() {
            assert_eq!(SectorType::from_repr(s as u8), Some(s));
        }
    }
}
