//! Parser for world (`.wld`) files.
//!
//! A room is a header, a name, a description, a metadata line and then a
//! body of exits (`D<dir>`) and extra descriptions (`E`) closed by `S`:
//!
//! ```text
//! #3001
//! The Temple Of Midgaard~
//! You are in the southern end of the temple hall.
//! ~
//! 30 dk 0
//! D0
//! ~
//! ~
//! 0 -1 3054
//! S
//! ```

use std::io::BufRead;

use circle_types::{Exit, ExtraDescription, Room, SectorType};

use crate::bits::ROOM_FLAGS;
use crate::dialect::{Dialect, RoomZone};
use crate::error::{ParseError, parse_i32, structure};
use crate::fields::{TERMINATOR, parse_header, single_line_field, split_fields};
use crate::line_cursor::LineCursor;
use crate::tables;

/// Parse every room in a world file, stopping at `$` or end of input.
pub fn parse_rooms<R: BufRead>(
    cursor: &mut LineCursor<R>,
    dialect: &Dialect,
) -> Result<Vec<Room>, ParseError> {
    let mut rooms = Vec::new();
    while cursor.advance()? {
        if cursor.current().trim() == "$" {
            return Ok(rooms);
        }
        let room = parse_room(cursor, dialect)?;
        log::debug!("parsed room #{} {:?}", room.number, room.name);
        rooms.push(room);
    }
    // Files are meant to end with `$`, but plenty of them don't.
    log::debug!("world file ended without $ after {} rooms", rooms.len());
    Ok(rooms)
}

/// Parse one room. The cursor must be on the room's `#<number>` line and is
/// left on its last line.
pub fn parse_room<R: BufRead>(
    cursor: &mut LineCursor<R>,
    dialect: &Dialect,
) -> Result<Room, ParseError> {
    let number = parse_header(cursor.current(), "room number")?;
    let name = if dialect.multiline_names {
        cursor.scan_until_suffix(TERMINATOR)?
    } else {
        cursor.require_advance()?;
        single_line_field(cursor.current(), "room name")?
    };
    let description = cursor.scan_until_suffix(TERMINATOR)?;

    cursor.require_advance()?;
    let metadata = parse_metadata(cursor.current(), dialect)?;
    if dialect.damage_line {
        // not modelled
        cursor.require_advance()?;
    }

    let mut room = Room {
        number,
        zone: metadata.zone,
        name,
        description,
        flags: metadata.flags,
        sector: metadata.sector,
        exits: Vec::new(),
        extra_descriptions: Vec::new(),
    };

    while cursor.advance()? {
        match classify(cursor.current())? {
            BodyLine::End => return Ok(room),
            BodyLine::Exit(code) => room.exits.push(parse_exit(cursor, &code, dialect)?),
            BodyLine::Extra => room.extra_descriptions.push(parse_extra(cursor, dialect)?),
        }
    }
    Ok(room)
}

struct Metadata {
    zone: Option<i32>,
    flags: Vec<&'static str>,
    sector: SectorType,
}

fn parse_metadata(line: &str, dialect: &Dialect) -> Result<Metadata, ParseError> {
    let shape = match dialect.room_zone {
        RoomZone::Absent => "room metadata to be <bitvector> <sector>",
        RoomZone::Retained | RoomZone::Ignored => {
            "room metadata to be <zone#> <bitvector> <sector>"
        }
    };
    let fields = split_fields(line, dialect.room_zone.field_count(), shape)?;
    let (zone, rest) = match dialect.room_zone {
        RoomZone::Retained => (Some(parse_i32(fields[0], "zone number")?), &fields[1..]),
        RoomZone::Ignored => (None, &fields[1..]),
        RoomZone::Absent => (None, &fields[..]),
    };
    Ok(Metadata {
        zone,
        flags: ROOM_FLAGS.decode(rest[0])?,
        sector: tables::sector(rest[1], dialect.extended_sectors)?,
    })
}

enum BodyLine {
    End,
    Exit(String),
    Extra,
}

fn classify(line: &str) -> Result<BodyLine, ParseError> {
    let line = line.trim();
    if line == "S" {
        Ok(BodyLine::End)
    } else if line == "E" {
        Ok(BodyLine::Extra)
    } else if let Some(code) = line.strip_prefix('D') {
        Ok(BodyLine::Exit(code.trim().to_string()))
    } else {
        Err(structure(format!(
            "unexpected token in room definition: {line:?}"
        )))
    }
}

fn parse_exit<R: BufRead>(
    cursor: &mut LineCursor<R>,
    code: &str,
    dialect: &Dialect,
) -> Result<Exit, ParseError> {
    let direction = tables::direction(code, dialect.diagonal_exits)?;
    let description = cursor.scan_until_suffix(TERMINATOR)?;
    let keywords = parse_keywords(cursor, dialect, "exit keyword list")?;

    cursor.require_advance()?;
    let fields = split_fields(
        cursor.current(),
        3,
        "direction fields to be <door_flag> <key_number> <room_linked>",
    )?;
    Ok(Exit {
        direction,
        description,
        keywords,
        door_flags: dialect.door_flags.decode(fields[0])?,
        key: parse_i32(fields[1], "key number")?,
        destination: parse_i32(fields[2], "target room number")?,
    })
}

fn parse_extra<R: BufRead>(
    cursor: &mut LineCursor<R>,
    dialect: &Dialect,
) -> Result<ExtraDescription, ParseError> {
    let keywords = parse_keywords(cursor, dialect, "extra description keywords")?;
    let description = cursor.scan_until_suffix(TERMINATOR)?;
    Ok(ExtraDescription {
        keywords,
        description,
    })
}

fn parse_keywords<R: BufRead>(
    cursor: &mut LineCursor<R>,
    dialect: &Dialect,
    field: &str,
) -> Result<Vec<String>, ParseError> {
    let text = if dialect.multiline_keywords {
        cursor.scan_until_suffix(TERMINATOR)?
    } else {
        cursor.require_advance()?;
        single_line_field(cursor.current(), field)?
    };
    Ok(text.split_whitespace().map(str::to_string).collect())
}
