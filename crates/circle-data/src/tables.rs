//! Lookups from the numeric codes used in world files to symbolic values.
//!
//! Codes are matched as written: `"07"` is not the same code as `"7"`.

use circle_types::{Direction, DoorKind, Gender, Position, ResetMode, SectorType};

use crate::error::ParseError;

fn lookup<T>(
    code: &str,
    field: &'static str,
    from_repr: impl FnOnce(u8) -> Option<T>,
) -> Result<T, ParseError> {
    code.parse::<u8>()
        .ok()
        .filter(|n| n.to_string() == code)
        .and_then(from_repr)
        .ok_or_else(|| ParseError::UnknownCode {
            field,
            code: code.into(),
        })
}

/// Sector type; codes past the original ten need `extended`.
pub fn sector(code: &str, extended: bool) -> Result<SectorType, ParseError> {
    lookup(code, "room sector type", |n| {
        SectorType::from_repr(n).filter(|s| extended || s.is_legacy())
    })
}

/// Exit direction; diagonal codes need `diagonals`.
pub fn direction(code: &str, diagonals: bool) -> Result<Direction, ParseError> {
    lookup(code, "exit direction", |n| {
        Direction::from_repr(n).filter(|d| diagonals || !d.is_diagonal())
    })
}

pub fn door_kind(code: &str) -> Result<DoorKind, ParseError> {
    lookup(code, "door flag", DoorKind::from_repr)
}

/// `field` tells load and default positions apart in diagnostics.
pub fn position(code: &str, field: &'static str) -> Result<Position, ParseError> {
    lookup(code, field, Position::from_repr)
}

pub fn gender(code: &str) -> Result<Gender, ParseError> {
    lookup(code, "gender", Gender::from_repr)
}

pub fn reset_mode(code: &str) -> Result<ResetMode, ParseError> {
    lookup(code, "reset mode", ResetMode::from_repr)
}
