//! Parsing of ASCII digit strings into [`Digit`] values.
//!
//! Characters are checked before length, so a long string with a stray letter
//! reports the letter.

use thiserror::Error;

use crate::digit::Digit;

/// Default cap on the number of digits accepted by [`parse_digits`].
pub const DEFAULT_MAX_DIGITS: usize = 64;

/// Errors produced while parsing a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no characters.
    #[error("no digits given")]
    Empty,

    /// A character is not an ASCII digit.
    #[error("not a valid number: {character:?} at position {position} is not a digit")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 0-based character index of the offending character.
        position: usize,
    },

    /// The input is longer than the configured limit.
    #[error("number is too long: {length} digits, limit is {limit}")]
    LengthExceeded {
        /// Number of characters in the input.
        length: usize,
        /// The configured limit.
        limit: usize,
    },
}

/// Parses `input` as a string of ASCII digits.
///
/// # Errors
///
/// - [`ParseError::Empty`] if `input` is empty.
/// - [`ParseError::InvalidCharacter`] for the first character outside
///   `'0'..='9'`.
/// - [`ParseError::LengthExceeded`] if `input` has more than `max_len`
///   characters.
///
/// # Examples
///
/// ```
/// use verhoeff_core::{ParseError, parse_digits};
///
/// assert_eq!(parse_digits("0236", 64).map(|d| d.len()), Ok(4));
/// assert!(matches!(
///     parse_digits("02x6", 64),
///     Err(ParseError::InvalidCharacter { character: 'x', position: 2 })
/// ));
/// ```
pub fn parse_digits(input: &str, max_len: usize) -> Result<Vec<Digit>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut digits = Vec::with_capacity(input.len().min(max_len));
    let mut length = 0;
    for (position, character) in input.chars().enumerate() {
        let Ok(digit) = Digit::from_char(character) else {
            return Err(ParseError::InvalidCharacter {
                character,
                position,
            });
        };
        // Past the limit only the character check still runs.
        if digits.len() < max_len {
            digits.push(digit);
        }
        length = position + 1;
    }

    if length > max_len {
        return Err(ParseError::LengthExceeded {
            length,
            limit: max_len,
        });
    }
    Ok(digits)
}
