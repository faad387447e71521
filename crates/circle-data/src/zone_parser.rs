//! Parser for zone (`.zon`) files.
//!
//! Only the zone header is modelled. The reset commands that follow it
//! (`M`, `O`, `G`, `E`, `P`, `D`, `R` lines and `*` comments) are skipped
//! up to the `S` line that closes them.

use std::io::BufRead;

use circle_types::Zone;

use crate::dialect::{Dialect, ZoneLayout};
use crate::error::{ParseError, parse_i32, structure};
use crate::fields::{TERMINATOR, parse_header, split_fields_between};
use crate::line_cursor::LineCursor;
use crate::tables;

/// Parse the zones in a zone file according to the dialect's layout.
pub fn parse_zones<R: BufRead>(
    cursor: &mut LineCursor<R>,
    dialect: &Dialect,
) -> Result<Vec<Zone>, ParseError> {
    match dialect.zone_layout {
        ZoneLayout::Single => parse_single_zone(cursor).map(|zone| vec![zone]),
        ZoneLayout::Multiple => parse_zone_list(cursor),
    }
}

fn parse_single_zone<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Zone, ParseError> {
    cursor.require_advance()?;
    let zone = parse_zone(cursor)?;
    cursor.require_advance()?;
    if cursor.current().trim() != "$" {
        return Err(structure(format!(
            "unexpected data at end of zone file: {:?}",
            cursor.current()
        )));
    }
    Ok(zone)
}

fn parse_zone_list<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<Zone>, ParseError> {
    let mut zones = Vec::new();
    while cursor.advance()? {
        if cursor.current().trim() == "$" {
            break;
        }
        zones.push(parse_zone(cursor)?);
    }
    Ok(zones)
}

/// Parse one zone. The cursor must be on the `#<number>` line and is left
/// on the `S` line closing its commands.
pub fn parse_zone<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Zone, ParseError> {
    let number = parse_header(cursor.current(), "zone number")?;
    let name = cursor.scan_until_suffix(TERMINATOR)?;

    cursor.require_advance()?;
    // `closed` is missing from older zone files
    let fields = split_fields_between(
        cursor.current(),
        4..=5,
        "zone metadata to be <bottom_room#> <top_room#> <lifespan> <reset_mode> <closed>",
    )?;
    let bottom_room = parse_i32(fields[0], "bottom room number")?;
    let top_room = parse_i32(fields[1], "top room number")?;
    let lifespan = parse_i32(fields[2], "lifespan number")?;
    let reset_mode = tables::reset_mode(fields[3])?;
    let closed = match fields.get(4).copied() {
        None | Some("0") => false,
        Some("1") => true,
        Some(other) => {
            return Err(structure(format!(
                "unexpected value for `closed`: {other:?}"
            )));
        }
    };

    let commands = cursor.scan_until_sentinel("S")?;
    log::debug!(
        "parsed zone #{number} {name:?}, skipped {} command lines",
        commands.lines().count()
    );

    Ok(Zone {
        number,
        name,
        bottom_room,
        top_room,
        lifespan,
        reset_mode,
        closed,
    })
}
