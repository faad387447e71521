//! Whole-file conversion: open an area file, pick the parser for its kind
//! and attach the file and line to whatever goes wrong.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use circle_types::{Mob, Room, Zone};
use serde::Serialize;

use crate::dialect::Dialect;
use crate::error::{ConvertError, ParseError};
use crate::line_cursor::LineCursor;
use crate::{mob_parser, room_parser, zone_parser};

/// Which kind of area file is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Rooms,
    Mobs,
    Zones,
}

/// Records parsed from one file. Serializes as `{"rooms": [...]}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Records {
    Rooms(Vec<Room>),
    Mobs(Vec<Mob>),
    Zones(Vec<Zone>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Self::Rooms(rooms) => rooms.len(),
            Self::Mobs(mobs) => mobs.len(),
            Self::Zones(zones) => zones.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse records of the given kind from any buffered reader.
pub fn parse_reader<R: BufRead>(
    cursor: &mut LineCursor<R>,
    mode: Mode,
    dialect: &Dialect,
) -> Result<Records, ParseError> {
    Ok(match mode {
        Mode::Rooms => Records::Rooms(room_parser::parse_rooms(cursor, dialect)?),
        Mode::Mobs => Records::Mobs(mob_parser::parse_mobs(cursor)?),
        Mode::Zones => Records::Zones(zone_parser::parse_zones(cursor, dialect)?),
    })
}

/// Parse one area file.
pub fn parse_file(path: &Path, mode: Mode, dialect: &Dialect) -> Result<Records, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cursor = LineCursor::new(BufReader::new(file));
    let records = parse_reader(&mut cursor, mode, dialect).map_err(|source| {
        ConvertError::Parse {
            path: path.to_path_buf(),
            line: cursor.line(),
            source,
        }
    })?;
    log::info!(
        "parsed {} {mode:?} from {} ({} lines)",
        records.len(),
        path.display(),
        cursor.line()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_serialize_under_their_kind() {
        let json = serde_json::to_value(Records::Zones(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "zones": [] }));
        let json = serde_json::to_value(Records::Mobs(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "mobs": [] }));
    }

    #[test]
    fn reader_dispatches_on_mode() {
        let mut cursor = LineCursor::from_text("$\n");
        let records = parse_reader(&mut cursor, Mode::Mobs, &Dialect::modern()).unwrap();
        assert_eq!(records, Records::Mobs(Vec::new()));
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = parse_file(
            Path::new("/nonexistent/area/30.wld"),
            Mode::Rooms,
            &Dialect::modern(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Open { .. }));
        assert_eq!(err.line(), None);
        assert!(err.to_string().starts_with("/nonexistent/area/30.wld: "));
    }
}
