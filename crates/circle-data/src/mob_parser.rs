//! Parser for mob (`.mob`) files.
//!
//! Each mob is a header, four `~`-terminated text fields and four stats
//! lines. Whatever a mob carries after those (enhanced attributes, skill
//! lines) is skipped up to the next `#` header or the closing `$`.

use std::io::BufRead;
use std::str::FromStr;

use circle_types::{Mob, MobKind};

use crate::bits::{AFFECTION_FLAGS, MOB_ACTION_FLAGS};
use crate::error::{ParseError, parse_i32, structure};
use crate::fields::{TERMINATOR, parse_header, split_fields};
use crate::line_cursor::LineCursor;
use crate::tables;

/// Parse every mob in a mob file. The file must end with a `$` line.
pub fn parse_mobs<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<Mob>, ParseError> {
    let mut mobs = Vec::new();
    cursor.require_advance()?;
    while cursor.current().trim() != "$" {
        let mob = parse_mob(cursor)?;
        log::debug!("parsed mob #{} {:?}", mob.number, mob.short_description);
        mobs.push(mob);
    }
    Ok(mobs)
}

/// Parse one mob. The cursor must be on the `#<number>` line and is left
/// on the following record's header (or the `$` line).
pub fn parse_mob<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Mob, ParseError> {
    let number = parse_header(cursor.current(), "mob number")?;
    let aliases = cursor
        .scan_until_suffix(TERMINATOR)?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let short_description = cursor.scan_until_suffix(TERMINATOR)?;
    let long_description = cursor.scan_until_suffix(TERMINATOR)?;
    let detailed_description = cursor.scan_until_suffix(TERMINATOR)?;

    cursor.require_advance()?;
    let fields = split_fields(
        cursor.current(),
        4,
        "mob metadata to be <action_bits> <affection_bits> <alignment> <type>",
    )?;
    let actions = MOB_ACTION_FLAGS.decode(fields[0])?;
    let affections = AFFECTION_FLAGS.decode(fields[1])?;
    let alignment = parse_i32(fields[2], "alignment")?;
    let kind = MobKind::from_str(fields[3]).map_err(|_| {
        structure(format!(
            "expected mob type to be one of S, E, W, W1, W2, W3, but was {:?}",
            fields[3]
        ))
    })?;

    cursor.require_advance()?;
    let fields = split_fields(
        cursor.current(),
        5,
        "mob metadata to be <level> <thac0> <armor class> <max hit points> <bare hand damage>",
    )?;
    let level = parse_i32(fields[0], "level")?;
    let thac0 = parse_i32(fields[1], "thac0")?;
    let armor_class = parse_i32(fields[2], "armor class")?;
    let hit_points = fields[3].to_string();
    let damage = fields[4].to_string();

    cursor.require_advance()?;
    let fields = split_fields(
        cursor.current(),
        2,
        "mob metadata to be <gold> <experience points>",
    )?;
    let gold = parse_i32(fields[0], "gold")?;
    let experience = parse_i32(fields[1], "experience")?;

    cursor.require_advance()?;
    let fields = split_fields(
        cursor.current(),
        3,
        "mob metadata to be <load position> <default position> <sex>",
    )?;
    let load_position = tables::position(fields[0], "load position")?;
    let default_position = tables::position(fields[1], "default position")?;
    let gender = tables::gender(fields[2])?;

    cursor.scan_until_any_prefix(&["#", "$"])?;

    Ok(Mob {
        number,
        aliases,
        short_description,
        long_description,
        detailed_description,
        actions,
        affections,
        alignment,
        kind,
        level,
        thac0,
        armor_class,
        hit_points,
        damage,
        gold,
        experience,
        load_position,
        default_position,
        gender,
    })
}
