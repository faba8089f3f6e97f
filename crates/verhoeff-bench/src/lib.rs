//! Digit-string generator and benchmark utilities for verhoeff-core.
//!
//! Generation is deterministic for a given seed so that benchmark runs are
//! comparable across machines and commits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use verhoeff_core::{Digit, DigitSequence, Layout, complete};

/// Predefined number lengths for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 8 digits, one full permutation period.
    Small,
    /// 64 digits, the command-line limit.
    Medium,
    /// 1 024 digits.
    Large,
    /// 65 536 digits.
    XLarge,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Number of digits in a number of this tier, check digit excluded.
    pub fn digits(self) -> usize {
        match self {
            SizeTier::Small => 8,
            SizeTier::Medium => 64,
            SizeTier::Large => 1 << 10,
            SizeTier::XLarge => 1 << 16,
        }
    }

    /// Short label used as a benchmark id.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }
}

/// Generates `len` uniformly random digits.
pub fn generate_digits(len: usize, seed: u64) -> Vec<Digit> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| Digit::ALL[rng.gen_range(0..Digit::ALL.len())])
        .collect()
}

/// Generates a random number and completes it with its check digit, written
/// in `layout`.
///
/// Returns an empty vector only when `len` is 0.
pub fn generate_valid(len: usize, seed: u64, layout: Layout) -> Vec<Digit> {
    let number = generate_digits(len, seed);
    complete(&number, layout).unwrap_or_default()
}

/// Generates a placeholder sequence (generation request) for a random number.
pub fn generate_placeholder(len: usize, seed: u64) -> DigitSequence {
    DigitSequence::placeholder_for(&generate_digits(len, seed))
}

/// Generates an ASCII digit string of `len` characters.
pub fn generate_text(len: usize, seed: u64) -> String {
    verhoeff_core::digits_to_string(&generate_digits(len, seed))
}
