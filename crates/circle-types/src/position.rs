use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Character positions from `structs.h` (POS_* constants).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Position {
    #[serde(rename = "POSITION_DEAD")]
    #[strum(serialize = "POSITION_DEAD")]
    Dead = 0,
    #[serde(rename = "POSITION_MORTALLYW")]
    #[strum(serialize = "POSITION_MORTALLYW")]
    MortallyWounded = 1,
    #[serde(rename = "POSITION_INCAP")]
    #[strum(serialize = "POSITION_INCAP")]
    Incapacitated = 2,
    #[serde(rename = "POSITION_STUNNED")]
    #[strum(serialize = "POSITION_STUNNED")]
    Stunned = 3,
    #[serde(rename = "POSITION_SLEEPING")]
    #[strum(serialize = "POSITION_SLEEPING")]
    Sleeping = 4,
    #[serde(rename = "POSITION_RESTING")]
    #[strum(serialize = "POSITION_RESTING")]
    Resting = 5,
    #[serde(rename = "POSITION_SITTING")]
    #[strum(serialize = "POSITION_SITTING")]
    Sitting = 6,
    #[serde(rename = "POSITION_FIGHTING")]
    #[strum(serialize = "POSITION_FIGHTING")]
    Fighting = 7,
    #[serde(rename = "POSITION_STANDING")]
    #[strum(serialize = "POSITION_STANDING")]
    Standing = 8,
}
