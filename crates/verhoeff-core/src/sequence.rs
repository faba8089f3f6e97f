//! Digit sequences in processing order, and the transformation from the
//! order in which a number is written.
//!
//! The permutation table is indexed by *processing* position, not by the
//! position a digit occupies in the written number. Processing order puts the
//! check digit (or the generation placeholder) at position 0 and then walks the
//! number from its rightmost digit to its leftmost. Keeping that reordering in
//! [`processing_order`] means the fold never has to reason about layouts.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digit::Digit;

/// Where the check digit sits in a written digit string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// `<check><number>`: the check digit (or placeholder `0`) is written
    /// first. This is the layout accepted by the `verhoeff` command line.
    #[default]
    CheckDigitFirst,
    /// `<number><check>`: the check digit is appended, as Verhoeff numbers are
    /// usually printed.
    CheckDigitLast,
}

/// Errors produced when constructing a [`DigitSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A sequence needs at least the check position.
    #[error("digit sequence is empty")]
    Empty,
}

/// Reorders a written digit string into processing order.
///
/// For [`Layout::CheckDigitFirst`] the first digit stays in place and the rest
/// are reversed; for [`Layout::CheckDigitLast`] the whole string is reversed.
/// Both produce the same processing order for the same logical number.
///
/// ```
/// use verhoeff_core::{Layout, digits_from_values, processing_order};
///
/// let written = digits_from_values(&[3, 2, 3, 6]).unwrap();
/// let order = processing_order(&written, Layout::CheckDigitFirst);
/// assert_eq!(order, digits_from_values(&[3, 6, 3, 2]).unwrap());
/// ```
pub fn processing_order(written: &[Digit], layout: Layout) -> Vec<Digit> {
    match layout {
        Layout::CheckDigitFirst => match written.split_first() {
            Some((check, number)) => std::iter::once(*check)
                .chain(number.iter().rev().copied())
                .collect(),
            None => Vec::new(),
        },
        Layout::CheckDigitLast => written.iter().rev().copied().collect(),
    }
}

/// Inverse of [`processing_order`]: restores the written digit string.
pub fn written_order(processing: &[Digit], layout: Layout) -> Vec<Digit> {
    // Both reorderings are involutions.
    processing_order(processing, layout)
}

/// A non-empty digit sequence in processing order.
///
/// Position 0 holds the check digit being validated, or the placeholder `0`
/// when generating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<Digit>);

impl DigitSequence {
    /// Wraps digits that are already in processing order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if `digits` is empty.
    pub fn new(digits: Vec<Digit>) -> Result<Self, SequenceError> {
        if digits.is_empty() {
            Err(SequenceError::Empty)
        } else {
            Ok(Self(digits))
        }
    }

    /// Builds a sequence from a written digit string in the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if `written` is empty.
    pub fn from_written(written: &[Digit], layout: Layout) -> Result<Self, SequenceError> {
        Self::new(processing_order(written, layout))
    }

    /// Builds a generation request: the placeholder `0` at position 0 followed
    /// by `number` (written left to right, no check digit) in processing order.
    ///
    /// An empty `number` yields the single-digit sequence `[0]`.
    pub fn placeholder_for(number: &[Digit]) -> Self {
        Self(
            std::iter::once(Digit::ZERO)
                .chain(number.iter().rev().copied())
                .collect(),
        )
    }

    /// Returns a copy of this sequence with position 0 replaced by `check`.
    #[must_use]
    pub fn with_check_digit(&self, check: Digit) -> Self {
        let mut digits = self.0.clone();
        // Non-empty by construction.
        if let Some(first) = digits.first_mut() {
            *first = check;
        }
        Self(digits)
    }

    /// Returns the digit at processing position 0.
    pub fn check_position(&self) -> Digit {
        self.0.first().copied().unwrap_or(Digit::ZERO)
    }

    /// Returns the digits in processing order.
    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    /// Returns the number of digits, including the check position.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Restores the written digit string in the given layout.
    pub fn to_written(&self, layout: Layout) -> Vec<Digit> {
        written_order(&self.0, layout)
    }

    /// Iterates over `(position, digit)` pairs in processing order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, Digit)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl AsRef<[Digit]> for DigitSequence {
    fn as_ref(&self) -> &[Digit] {
        &self.0
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for d in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{d}")?;
            first = false;
        }
        Ok(())
    }
}
