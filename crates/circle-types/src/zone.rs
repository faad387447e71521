use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// A zone header parsed from a `.zon` file. Reset commands are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub number: i32,
    pub name: String,
    pub bottom_room: i32,
    pub top_room: i32,
    /// Minutes between resets.
    pub lifespan: i32,
    pub reset_mode: ResetMode,
    pub closed: bool,
}

/// When a zone resets (`reset_mode` in `db.h`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum ResetMode {
    /// Never reset.
    #[serde(rename = "RESET_NEVER")]
    #[strum(serialize = "RESET_NEVER")]
    Never = 0,
    /// Reset only when no players are in the zone.
    #[serde(rename = "RESET_EMPTY")]
    #[strum(serialize = "RESET_EMPTY")]
    Empty = 1,
    #[serde(rename = "RESET_ALWAYS")]
    #[strum(serialize = "RESET_ALWAYS")]
    Always = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants() {
        assert_eq!(ResetMode::COUNT, 3);
        assert_eq!(ResetMode::from_repr(0), Some(ResetMode::Never));
        assert_eq!(ResetMode::from_repr(2), Some(ResetMode::Always));
        assert_eq!(ResetMode::from_repr(3), None);
    }

    #[test]
    fn names() {
        assert_eq!(<&str>::from(ResetMode::Never), "RESET_NEVER");
        assert_eq!(<&str>::from(ResetMode::Always), "RESET_ALWAYS");
    }
}
