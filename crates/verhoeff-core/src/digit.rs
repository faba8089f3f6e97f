//! Validated decimal digit newtype.
//!
//! A [`Digit`] always holds a value in `0..=9`, and every table lookup in the
//! engine is indexed through one.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors produced when constructing a [`Digit`] from an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    /// The integer is outside `0..=9`.
    #[error("digit out of range: expected 0-9, got {value}")]
    OutOfRange {
        /// The value that was rejected.
        value: u8,
    },

    /// The character is not an ASCII digit `'0'..='9'`.
    #[error("not an ASCII digit: {character:?}")]
    NotAsciiDigit {
        /// The character that was rejected.
        character: char,
    },
}

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero: the group identity and the generation placeholder.
    pub const ZERO: Digit = Digit(0);

    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Wraps a table entry.
    ///
    /// Only called with values read from the constant tables, whose entries
    /// are all in `0..=9` (checked by the table tests).
    pub(crate) const fn from_table(value: u8) -> Self {
        Digit(value)
    }

    /// Returns the numeric value of this digit.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as a table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the ASCII character for this digit.
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parses a single ASCII digit character.
    pub fn from_char(character: char) -> Result<Self, DigitError> {
        match character {
            '0'..='9' => Ok(Digit(character as u8 - b'0')),
            _ => Err(DigitError::NotAsciiDigit { character }),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(DigitError::OutOfRange { value })
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Digit::from_char(character)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Digit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Digit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Digit::try_from(raw).map_err(de::Error::custom)
    }
}

/// Converts a slice of raw integers into digits, stopping at the first value
/// outside `0..=9`.
///
/// # Errors
///
/// Returns [`DigitError::OutOfRange`] for the first rejected value.
pub fn digits_from_values(values: &[u8]) -> Result<Vec<Digit>, DigitError> {
    values.iter().map(|&v| Digit::try_from(v)).collect()
}

/// Renders digits as an ASCII string.
pub fn digits_to_string(digits: &[Digit]) -> String {
    digits.iter().map(|d| d.to_char()).collect()
}
