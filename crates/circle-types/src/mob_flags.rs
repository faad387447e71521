use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Mob action flags from `structs.h` (MOB_* constants).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct MobActionFlags: u32 {
        const SPEC         = 1 << 0;
        const SENTINEL     = 1 << 1;
        const SCAVENGER    = 1 << 2;
        const ISNPC        = 1 << 3;
        const AWARE        = 1 << 4;
        const AGGRESSIVE   = 1 << 5;
        const STAY_ZONE    = 1 << 6;
        const WIMPY        = 1 << 7;
        const AGGR_EVIL    = 1 << 8;
        const AGGR_GOOD    = 1 << 9;
        const AGGR_NEUTRAL = 1 << 10;
        const MEMORY       = 1 << 11;
        const HELPER       = 1 << 12;
        const NOCHARM      = 1 << 13;
        const NOSUMMON     = 1 << 14;
        const NOSLEEP      = 1 << 15;
        const NOBASH       = 1 << 16;
        const NOBLIND      = 1 << 17;
        const NOTDEADYET   = 1 << 18;
    }
}

bitflags! {
    /// Affection flags from `structs.h` (AFF_* constants).
    ///
    /// The `UNUSED*` bits have no meaning in the server but still own a
    /// letter code, so files that set them must keep decoding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct AffectionFlags: u32 {
        const BLIND        = 1 << 0;
        const INVISIBLE    = 1 << 1;
        const DETECT_ALIGN = 1 << 2;
        const DETECT_INVIS = 1 << 3;
        const DETECT_MAGIC = 1 << 4;
        const SENSE_LIFE   = 1 << 5;
        const WATERWALK    = 1 << 6;
        const SANCTUARY    = 1 << 7;
        const GROUP        = 1 << 8;
        const CURSE        = 1 << 9;
        const INFRAVISION  = 1 << 10;
        const POISON       = 1 << 11;
        const PROTECT_EVIL = 1 << 12;
        const PROTECT_GOOD = 1 << 13;
        const SLEEP        = 1 << 14;
        const NOTRACK      = 1 << 15;
        const UNUSED16     = 1 << 16;
        const UNUSED17     = 1 << 17;
        const SNEAK        = 1 << 18;
        const HIDE         = 1 << 19;
        const UNUSED20     = 1 << 20;
        const CHARM        = 1 << 21;
    }
}
