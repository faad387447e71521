use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Exit directions, in the order world files number them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
    Northwest = 6,
    Northeast = 7,
    Southeast = 8,
    Southwest = 9,
}

impl Direction {
    /// Number of directions in files that predate diagonal exits.
    pub const LEGACY_COUNT: u8 = 6;

    pub const fn is_diagonal(self) -> bool {
        (self as u8) >= Self::LEGACY_COUNT
    }
}

/// Single-valued door setting used by exits before door flags became a
/// bitvector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorKind {
    None = 0,
    Normal = 1,
    Pickproof = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(Direction::COUNT, 10);
        assert_eq!(DoorKind::COUNT, 3);
    }

    #[test]
    fn diagonals() {
        let diagonals: Vec<_> = Direction::iter().filter(|d| d.is_diagonal()).collect();
        assert_eq!(
            diagonals,
            [
                Direction::Northwest,
                Direction::Northeast,
                Direction::Southeast,
                Direction::Southwest
            ]
        );
    }

    #[test]
    fn names() {
        let name: &'static str = Direction::Up.into();
        assert_eq!(name, "Up");
        let name: &'static str = DoorKind::Pickproof.into();
        assert_eq!(name, "PICKPROOF");
    }
}
