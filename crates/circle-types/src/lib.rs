pub mod direction;
pub mod mob;
pub mod mob_flags;
pub mod position;
pub mod room;
pub mod room_flags;
pub mod sector_type;
pub mod zone;

pub use direction::{Direction, DoorKind};
pub use mob::{Gender, Mob, MobKind};
pub use mob_flags::{AffectionFlags, MobActionFlags};
pub use position::Position;
pub use room::{Exit, ExtraDescription, Room};
pub use room_flags::{ExitFlags, RoomFlags};
pub use sector_type::SectorType;
pub use zone::{ResetMode, Zone};
