//! World file format variants.
//!
//! Area files were written by several generations of the server and its
//! editors. They agree on the overall record shapes and differ in a handful
//! of details, each captured by one field of [`Dialect`].

use crate::bits::DoorFlagEncoding;

/// What the first field of a room's metadata line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomZone {
    /// `<zone#> <bitvector> <sector>`, zone kept on the room.
    Retained,
    /// `<zone#> <bitvector> <sector>`, zone field skipped unread.
    Ignored,
    /// `<bitvector> <sector>`
    Absent,
}

impl RoomZone {
    pub(crate) fn field_count(self) -> usize {
        match self {
            Self::Retained | Self::Ignored => 3,
            Self::Absent => 2,
        }
    }
}

/// How many zones a zone file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLayout {
    /// Exactly one zone, then `$`.
    Single,
    /// Zones until `$` or end of input.
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub room_zone: RoomZone,
    /// Room names are `~`-terminated free text rather than one `~`-ended line.
    pub multiline_names: bool,
    /// A damage line (`0d0+0 0 0`) follows the room metadata.
    pub damage_line: bool,
    /// Exit and extra-description keywords are `~`-terminated free text
    /// rather than one `~`-ended line.
    pub multiline_keywords: bool,
    pub door_flags: DoorFlagEncoding,
    pub extended_sectors: bool,
    pub diagonal_exits: bool,
    pub zone_layout: ZoneLayout,
}

impl Dialect {
    /// Current files: zone numbers on rooms, bitvector door flags, diagonal
    /// exits and the extended sector table.
    pub const fn modern() -> Self {
        Self {
            room_zone: RoomZone::Retained,
            multiline_names: true,
            damage_line: true,
            multiline_keywords: true,
            door_flags: DoorFlagEncoding::Bitmask,
            extended_sectors: true,
            diagonal_exits: true,
            zone_layout: ZoneLayout::Multiple,
        }
    }

    /// Original release files.
    pub const fn legacy() -> Self {
        Self {
            room_zone: RoomZone::Ignored,
            multiline_names: false,
            damage_line: false,
            multiline_keywords: false,
            door_flags: DoorFlagEncoding::Enumerated,
            extended_sectors: false,
            diagonal_exits: false,
            zone_layout: ZoneLayout::Single,
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::modern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_modern() {
        assert_eq!(Dialect::default(), Dialect::modern());
        assert_ne!(Dialect::modern(), Dialect::legacy());
    }

    #[test]
    fn metadata_shapes() {
        assert_eq!(RoomZone::Retained.field_count(), 3);
        assert_eq!(RoomZone::Ignored.field_count(), 3);
        assert_eq!(RoomZone::Absent.field_count(), 2);
    }
}
