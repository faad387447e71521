use serde::Serialize;

use crate::direction::Direction;
use crate::sector_type::SectorType;

/// A room parsed from a world (`.wld`) file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub number: i32,
    /// Owning zone, only present in files that carry it on the metadata line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<i32>,
    pub name: String,
    pub description: String,
    pub flags: Vec<&'static str>,
    pub sector: SectorType,
    pub exits: Vec<Exit>,
    pub extra_descriptions: Vec<ExtraDescription>,
}

/// A way out of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exit {
    pub direction: Direction,
    pub description: String,
    pub keywords: Vec<String>,
    /// Exactly one name for single-valued door kinds, any subset of the
    /// exit flags for bitvector door flags.
    pub door_flags: Vec<&'static str>,
    /// -1 when the door has no key.
    pub key: i32,
    /// -1 when the exit leads nowhere.
    pub destination: i32,
}

/// Something in a room that can be looked at but is not an exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraDescription {
    pub keywords: Vec<String>,
    pub description: String,
}
