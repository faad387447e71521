//! Bitvector decoding.
//!
//! A bitvector field is written either as a decimal bitmask (`"32792"`) or,
//! in older files, as one letter per set bit (`"dgo"`). Both decode to the
//! flag names of a [`FlagTable`].

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use bitflags::Flags;
use circle_types::{AffectionFlags, ExitFlags, MobActionFlags, RoomFlags};

use crate::error::ParseError;
use crate::tables;

pub static ROOM_FLAGS: LazyLock<FlagTable> = LazyLock::new(FlagTable::from_flags::<RoomFlags>);
pub static EXIT_FLAGS: LazyLock<FlagTable> = LazyLock::new(FlagTable::from_flags::<ExitFlags>);
pub static MOB_ACTION_FLAGS: LazyLock<FlagTable> =
    LazyLock::new(FlagTable::from_flags::<MobActionFlags>);
pub static AFFECTION_FLAGS: LazyLock<FlagTable> =
    LazyLock::new(FlagTable::from_flags::<AffectionFlags>);

/// Names for one flag universe, by bit value and by letter code.
#[derive(Debug, Clone)]
pub struct FlagTable {
    max_bit: u32,
    bits: BTreeMap<u32, &'static str>,
    letters: HashMap<char, &'static str>,
}

impl FlagTable {
    pub fn new(
        max_bit: u32,
        bits: BTreeMap<u32, &'static str>,
        letters: HashMap<char, &'static str>,
    ) -> Self {
        Self {
            max_bit,
            bits,
            letters,
        }
    }

    /// Build a table from a `bitflags` type. Letter codes follow bit
    /// position: `a`-`z` for bits 0-25, then `A`-`F`.
    pub fn from_flags<F: Flags<Bits = u32>>() -> Self {
        let mut bits = BTreeMap::new();
        let mut letters = HashMap::new();
        for flag in F::FLAGS {
            let value = flag.value().bits();
            if !value.is_power_of_two() {
                continue;
            }
            bits.insert(value, flag.name());
            if let Some(letter) = bit_letter(value.trailing_zeros()) {
                letters.insert(letter, flag.name());
            }
        }
        let max_bit = bits.keys().next_back().copied().unwrap_or(0);
        Self::new(max_bit, bits, letters)
    }

    pub fn max_bit(&self) -> u32 {
        self.max_bit
    }

    /// Expand a bitvector token into flag names.
    ///
    /// Numeric tokens yield names in ascending bit order; bits the table
    /// does not name are dropped, and a mask too large for `i64` is a
    /// [`ParseError::MalformedNumber`]. Letter tokens yield one name per letter,
    /// in input order, and fail on the first unknown letter.
    pub fn decode(&self, token: &str) -> Result<Vec<&'static str>, ParseError> {
        if is_decimal(token) {
            let mask = token
                .parse::<i64>()
                .map_err(|_| ParseError::MalformedNumber {
                    field: "bitvector",
                    text: token.into(),
                })?;
            let mut names = Vec::new();
            let mut bit: i64 = 1;
            while bit <= i64::from(self.max_bit) {
                if mask & bit != 0
                    && let Some(name) = self.bits.get(&(bit as u32))
                {
                    names.push(*name);
                }
                bit <<= 1;
            }
            let unknown = mask & !((i64::from(self.max_bit) << 1) - 1);
            if unknown != 0 {
                log::debug!("ignoring unknown bits {unknown:#x} in bitvector {token}");
            }
            return Ok(names);
        }
        token
            .chars()
            .map(|c| {
                self.letters
                    .get(&c)
                    .copied()
                    .ok_or(ParseError::UnknownFlagLetter(c))
            })
            .collect()
    }
}

fn is_decimal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn bit_letter(position: u32) -> Option<char> {
    match position {
        0..=25 => Some((b'a' + position as u8) as char),
        26..=31 => Some((b'A' + (position - 26) as u8) as char),
        _ => None,
    }
}

/// How an exit's door field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorFlagEncoding {
    /// One [`DoorKind`](circle_types::DoorKind) code.
    Enumerated,
    /// A bitvector over [`ExitFlags`].
    Bitmask,
}

impl DoorFlagEncoding {
    pub fn decode(self, token: &str) -> Result<Vec<&'static str>, ParseError> {
        match self {
            Self::Enumerated => Ok(vec![tables::door_kind(token)?.into()]),
            Self::Bitmask => EXIT_FLAGS.decode(token),
        }
    }
}
