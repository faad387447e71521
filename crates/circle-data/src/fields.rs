//! Helpers for the fixed-shape lines shared by every record type.

use std::ops::RangeInclusive;

use crate::error::{ParseError, structure};

/// Field terminator for free text.
pub const TERMINATOR: &str = "~";

/// Parse a `#<number>` record header.
pub fn parse_header(line: &str, field: &'static str) -> Result<i32, ParseError> {
    let line = line.trim();
    let digits = line
        .strip_prefix('#')
        .ok_or_else(|| structure(format!("{field} must start with #, but found: {line:?}")))?;
    digits
        .parse::<i32>()
        .map_err(|_| ParseError::MalformedNumber {
            field,
            text: digits.into(),
        })
}

/// A single line that must end with the terminator, returned without it.
pub fn single_line_field(line: &str, field: &str) -> Result<String, ParseError> {
    line.strip_suffix(TERMINATOR)
        .map(str::to_string)
        .ok_or_else(|| structure(format!("expected {field} to end in ~, but got {line:?}")))
}

/// Split a line on whitespace, requiring exactly `count` fields. `shape`
/// describes the expected layout for the error message.
pub fn split_fields<'a>(
    line: &'a str,
    count: usize,
    shape: &str,
) -> Result<Vec<&'a str>, ParseError> {
    split_fields_between(line, count..=count, shape)
}

/// Like [`split_fields`], for lines whose trailing fields may be left out.
pub fn split_fields_between<'a>(
    line: &'a str,
    counts: RangeInclusive<usize>,
    shape: &str,
) -> Result<Vec<&'a str>, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if !counts.contains(&fields.len()) {
        return Err(structure(format!("expected {shape}, but got {line:?}")));
    }
    Ok(fields)
}
