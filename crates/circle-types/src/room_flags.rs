use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Room flags from `structs.h` (ROOM_* constants).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct RoomFlags: u32 {
        const DARK        = 1 << 0;
        const DEATH       = 1 << 1;
        const NOMOB       = 1 << 2;
        const INDOORS     = 1 << 3;
        const PEACEFUL    = 1 << 4;
        const SOUNDPROOF  = 1 << 5;
        const NOTRACK     = 1 << 6;
        const NOMAGIC     = 1 << 7;
        const TUNNEL      = 1 << 8;
        const PRIVATE     = 1 << 9;
        const GODROOM     = 1 << 10;
        // The rest are reserved for the server's own bookkeeping.
        const HOUSE       = 1 << 11;
        const HOUSE_CRASH = 1 << 12;
        const ATRIUM      = 1 << 13;
        const OLC         = 1 << 14;
        const BFS_MARK    = 1 << 15;
    }
}

bitflags! {
    /// Exit flags from `structs.h` (EX_* constants).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct ExitFlags: u32 {
        const ISDOOR    = 1 << 0;
        const CLOSED    = 1 << 1;
        const LOCKED    = 1 << 2;
        const PICKPROOF = 1 << 3;
    }
}
