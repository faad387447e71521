use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::position::Position;

/// A mobile (non-player character) parsed from a `.mob` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mob {
    pub number: i32,
    pub aliases: Vec<String>,
    pub short_description: String,
    pub long_description: String,
    pub detailed_description: String,
    pub actions: Vec<&'static str>,
    pub affections: Vec<&'static str>,
    pub alignment: i32,
    pub kind: MobKind,
    pub level: i32,
    pub thac0: i32,
    pub armor_class: i32,
    /// Dice notation (`xdy+z`), kept as written.
    pub hit_points: String,
    /// Dice notation (`xdy+z`), kept as written.
    pub damage: String,
    pub gold: i32,
    pub experience: i32,
    pub load_position: Position,
    pub default_position: Position,
    pub gender: Gender,
}

/// Mob record layout marker from the end of the first stats line.
///
/// Every kind shares the same four stats lines; the kinds only differ in
/// what follows them, which is not modelled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
pub enum MobKind {
    /// Simple
    S,
    /// Enhanced
    E,
    W,
    W1,
    W2,
    W3,
}

/// Mob gender (`SEX_*` constants).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Gender {
    Neutral = 0,
    Male = 1,
    Female = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn counts() {
        assert_eq!(MobKind::COUNT, 6);
        assert_eq!(Gender::COUNT, 3);
    }

    #[test]
    fn kind_from_token() {
        assert_eq!(MobKind::from_str("W3"), Ok(MobKind::W3));
        assert_eq!(MobKind::from_str("S"), Ok(MobKind::S));
        assert!(MobKind::from_str("X").is_err());
        assert!(MobKind::from_str("s").is_err());
    }

    #[test]
    fn gender_round_trip() {
        for g in Gender::iter() {
            assert_eq!(Gender::from_repr(g as u8), Some(g));
        }
    }
}
