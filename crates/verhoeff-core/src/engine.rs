//! The Verhoeff fold and the generate/validate operations built on it.
//!
//! Every function here is pure and total over its input types: a
//! [`DigitSequence`] is non-empty and every [`Digit`] is in `0..=9`, so there
//! is no error path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digit::Digit;
use crate::sequence::{DigitSequence, Layout};
use crate::tables::{INVERSE, MULTIPLICATION, PERMUTATION, PERMUTATION_PERIOD};

/// Result of validating a complete digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The sequence folds to the identity.
    Valid,
    /// The sequence folds to any other element.
    Invalid,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// What a caller wants from a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Position 0 is a placeholder; compute the check digit.
    Generate,
    /// Position 0 is a real check digit; report whether it matches.
    Validate,
}

impl Mode {
    /// Infers the mode from the check position: `0` requests generation,
    /// anything else requests validation.
    ///
    /// Under this rule a number whose genuine check digit is `0` is treated as
    /// a generation request; callers that need to validate such numbers pass
    /// [`Mode::Validate`] explicitly.
    pub fn infer(sequence: &DigitSequence) -> Self {
        if sequence.check_position() == Digit::ZERO {
            Self::Generate
        } else {
            Self::Validate
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate => f.write_str("generate"),
            Self::Validate => f.write_str("validate"),
        }
    }
}

/// Output of [`checksum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The generated check digit.
    CheckDigit(Digit),
    /// The validation verdict.
    Verdict(Verdict),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckDigit(d) => write!(f, "check digit = {d}"),
            Self::Verdict(v) => write!(f, "{v}"),
        }
    }
}

/// Combines the running state `c` with digit `v` at processing position `i`.
#[inline]
fn step(c: Digit, i: usize, v: Digit) -> Digit {
    let permuted = PERMUTATION[i % PERMUTATION_PERIOD][v.index()];
    Digit::from_table(MULTIPLICATION[c.index()][usize::from(permuted)])
}

/// Folds a sequence into its checksum state.
///
/// Starting from `c = 0`, each digit `v` at processing position `i` updates
/// `c = d[c][num[i mod 8][v]]`. A sequence with a correct check digit at
/// position 0 folds to `0`.
///
/// # Examples
///
/// ```
/// use verhoeff_core::{DigitSequence, digits_from_values, fold};
///
/// let seq = DigitSequence::new(digits_from_values(&[3, 6, 3, 2]).unwrap()).unwrap();
/// assert_eq!(fold(&seq).value(), 0);
/// ```
pub fn fold(sequence: &DigitSequence) -> Digit {
    sequence
        .positions()
        .fold(Digit::ZERO, |c, (i, v)| step(c, i, v))
}

/// Computes the check digit for a generation request.
///
/// `sequence` carries the placeholder `0` at position 0 (see
/// [`DigitSequence::placeholder_for`]). The result is `inv[fold(sequence)]`;
/// writing it into position 0 makes the whole sequence fold to `0`.
pub fn compute_check_digit(sequence: &DigitSequence) -> Digit {
    Digit::from_table(INVERSE[fold(sequence).index()])
}

/// Validates a sequence whose position 0 is the real check digit.
pub fn validate(sequence: &DigitSequence) -> Verdict {
    Verdict::from(fold(sequence) == Digit::ZERO)
}

/// Runs the requested operation on `sequence`.
pub fn checksum(sequence: &DigitSequence, mode: Mode) -> Outcome {
    match mode {
        Mode::Generate => Outcome::CheckDigit(compute_check_digit(sequence)),
        Mode::Validate => Outcome::Verdict(validate(sequence)),
    }
}

/// Runs [`checksum`] with the mode inferred from the check position.
pub fn checksum_auto(sequence: &DigitSequence) -> Outcome {
    checksum(sequence, Mode::infer(sequence))
}

/// Computes the check digit for `number`, written left to right without a
/// check digit. Returns `None` when `number` is empty.
///
/// ```
/// use verhoeff_core::{digits_from_values, generate_for};
///
/// let number = digits_from_values(&[2, 3, 6]).unwrap();
/// assert_eq!(generate_for(&number).map(|d| d.value()), Some(3));
/// ```
pub fn generate_for(number: &[Digit]) -> Option<Digit> {
    if number.is_empty() {
        return None;
    }
    Some(compute_check_digit(&DigitSequence::placeholder_for(number)))
}

/// Validates a complete written number in the given layout. Returns `None`
/// when `written` is empty.
pub fn is_valid(written: &[Digit], layout: Layout) -> Option<Verdict> {
    DigitSequence::from_written(written, layout)
        .ok()
        .map(|seq| validate(&seq))
}

/// Returns `number` with its check digit attached in the given layout, or
/// `None` when `number` is empty.
pub fn complete(number: &[Digit], layout: Layout) -> Option<Vec<Digit>> {
    let check = generate_for(number)?;
    let mut written = Vec::with_capacity(number.len() + 1);
    match layout {
        Layout::CheckDigitFirst => {
            written.push(check);
            written.extend_from_slice(number);
        }
        Layout::CheckDigitLast => {
            written.extend_from_slice(number);
            written.push(check);
        }
    }
    Some(written)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::digit::digits_from_values;

    fn ds(values: &[u8]) -> Vec<Digit> {
        digits_from_values(values).expect("valid digits")
    }

    fn seq(values: &[u8]) -> DigitSequence {
        DigitSequence::new(ds(values)).expect("non-empty")
    }

    fn digit(v: u8) -> Digit {
        Digit::try_from(v).expect("digit")
    }

    // ── fold ────────────────────────────────────────────────────────────────

    /// 236 with check digit 3, in processing order.
    #[test]
    fn fold_known_valid_vector_is_zero() {
        assert_eq!(fold(&seq(&[3, 6, 3, 2])), Digit::ZERO);
    }

    #[test]
    fn fold_placeholder_236_is_two() {
        assert_eq!(fold(&seq(&[0, 6, 3, 2])), digit(2));
    }

    #[test]
    fn fold_mutated_vector_is_non_zero() {
        assert_ne!(fold(&seq(&[2, 3, 6, 4])), Digit::ZERO);
    }

    #[test]
    fn fold_of_2363_in_processing_order_is_not_zero() {
        // [2,3,6,3] is 363 with check digit 2, which is not a valid pair.
        assert_eq!(fold(&seq(&[2, 3, 6, 3])), digit(8));
    }

    #[test]
    fn fold_single_digit_uses_row_zero_only() {
        for d in Digit::ALL {
            let expected = MULTIPLICATION[0][usize::from(PERMUTATION[0][d.index()])];
            assert_eq!(fold(&seq(&[d.value()])).value(), expected);
            assert_eq!(fold(&seq(&[d.value()])), d, "row 0 and d[0] are identities");
        }
    }

    #[test]
    fn fold_wraps_permutation_row_after_eight_positions() {
        // Position 8 uses row 0 again, so a trailing digit at position 8 acts
        // like the digit itself.
        let nine = seq(&[0, 0, 0, 0, 0, 0, 0, 0, 5]);
        let eight = seq(&[0, 0, 0, 0, 0, 0, 0, 0]);
        let expected = MULTIPLICATION[fold(&eight).index()][5];
        assert_eq!(fold(&nine).value(), expected);
    }

    #[test]
    fn fold_is_deterministic() {
        let s = seq(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
        assert_eq!(fold(&s), fold(&s.clone()));
    }

    // ── compute_check_digit ─────────────────────────────────────────────────

    #[test]
    fn compute_check_digit_for_236_is_3() {
        assert_eq!(compute_check_digit(&seq(&[0, 6, 3, 2])), digit(3));
    }

    #[test]
    fn compute_check_digit_for_142857_is_0() {
        let s = DigitSequence::placeholder_for(&ds(&[1, 4, 2, 8, 5, 7]));
        assert_eq!(compute_check_digit(&s), Digit::ZERO);
    }

    #[test]
    fn compute_check_digit_for_single_placeholder_is_0() {
        assert_eq!(compute_check_digit(&seq(&[0])), Digit::ZERO);
    }

    #[test]
    fn generated_digit_completes_a_valid_sequence() {
        let placeholder = DigitSequence::placeholder_for(&ds(&[8, 4, 7, 3, 2, 1, 9, 9, 0, 5]));
        let check = compute_check_digit(&placeholder);
        let full = placeholder.with_check_digit(check);
        assert_eq!(validate(&full), Verdict::Valid);
    }

    // ── validate ────────────────────────────────────────────────────────────

    #[test]
    fn validate_known_vector() {
        assert_eq!(validate(&seq(&[3, 6, 3, 2])), Verdict::Valid);
    }

    #[test]
    fn validate_mutated_vector() {
        assert_eq!(validate(&seq(&[2, 3, 6, 4])), Verdict::Invalid);
    }

    #[test]
    fn validate_single_zero_is_valid() {
        assert_eq!(validate(&seq(&[0])), Verdict::Valid);
    }

    #[test]
    fn validate_single_non_zero_is_invalid() {
        for v in 1..=9 {
            assert_eq!(validate(&seq(&[v])), Verdict::Invalid, "digit {v}");
        }
    }

    // ── Mode / checksum ─────────────────────────────────────────────────────

    #[test]
    fn infer_zero_check_position_is_generate() {
        assert_eq!(Mode::infer(&seq(&[0, 6, 3, 2])), Mode::Generate);
    }

    #[test]
    fn infer_non_zero_check_position_is_validate() {
        assert_eq!(Mode::infer(&seq(&[3, 6, 3, 2])), Mode::Validate);
    }

    #[test]
    fn checksum_auto_generates_for_placeholder() {
        assert_eq!(
            checksum_auto(&seq(&[0, 6, 3, 2])),
            Outcome::CheckDigit(digit(3))
        );
    }

    #[test]
    fn checksum_auto_validates_real_check_digit() {
        assert_eq!(
            checksum_auto(&seq(&[3, 6, 3, 2])),
            Outcome::Verdict(Verdict::Valid)
        );
        assert_eq!(
            checksum_auto(&seq(&[2, 3, 6, 3])),
            Outcome::Verdict(Verdict::Invalid)
        );
    }

    #[test]
    fn explicit_validate_accepts_zero_check_digit() {
        // 142857 has check digit 0.
        let s = DigitSequence::from_written(&ds(&[0, 1, 4, 2, 8, 5, 7]), Layout::CheckDigitFirst)
            .expect("non-empty");
        assert_eq!(
            checksum(&s, Mode::Validate),
            Outcome::Verdict(Verdict::Valid)
        );
    }

    #[test]
    fn outcome_display_matches_cli_wording() {
        assert_eq!(Outcome::CheckDigit(digit(3)).to_string(), "check digit = 3");
        assert_eq!(Outcome::Verdict(Verdict::Valid).to_string(), "valid");
        assert_eq!(Outcome::Verdict(Verdict::Invalid).to_string(), "invalid");
    }

    // ── written-number helpers ──────────────────────────────────────────────

    #[test]
    fn generate_for_236() {
        assert_eq!(generate_for(&ds(&[2, 3, 6])), Some(digit(3)));
    }

    #[test]
    fn generate_for_empty_is_none() {
        assert_eq!(generate_for(&[]), None);
    }

    #[test]
    fn is_valid_check_last_2363() {
        assert_eq!(
            is_valid(&ds(&[2, 3, 6, 3]), Layout::CheckDigitLast),
            Some(Verdict::Valid)
        );
        assert_eq!(
            is_valid(&ds(&[2, 3, 6, 4]), Layout::CheckDigitLast),
            Some(Verdict::Invalid)
        );
    }

    #[test]
    fn is_valid_check_first_3236() {
        assert_eq!(
            is_valid(&ds(&[3, 2, 3, 6]), Layout::CheckDigitFirst),
            Some(Verdict::Valid)
        );
    }

    #[test]
    fn is_valid_empty_is_none() {
        assert_eq!(is_valid(&[], Layout::CheckDigitLast), None);
    }

    #[test]
    fn complete_places_check_digit_per_layout() {
        let number = ds(&[2, 3, 6]);
        assert_eq!(
            complete(&number, Layout::CheckDigitLast),
            Some(ds(&[2, 3, 6, 3]))
        );
        assert_eq!(
            complete(&number, Layout::CheckDigitFirst),
            Some(ds(&[3, 2, 3, 6]))
        );
    }

    #[test]
    fn verdict_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Verdict::Invalid).expect("serialize"),
            "\"invalid\""
        );
        assert_eq!(
            serde_json::to_string(&Mode::Generate).expect("serialize"),
            "\"generate\""
        );
    }
}
