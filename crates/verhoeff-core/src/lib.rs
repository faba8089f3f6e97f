#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Verhoeff check digits over the dihedral group D5.
//!
//! The crate is split the way the computation is: [`tables`] holds the three
//! constant tables, [`digit`] and [`sequence`] model the inputs,
//! [`engine`] folds them, and [`parse`] turns text into digits.
//!
//! ```
//! use verhoeff_core::{DigitSequence, Layout, Verdict, parse_digits, validate};
//!
//! let written = parse_digits("2363", 64).unwrap();
//! let seq = DigitSequence::from_written(&written, Layout::CheckDigitLast).unwrap();
//! assert_eq!(validate(&seq), Verdict::Valid);
//! ```

pub mod digit;
pub mod engine;
pub mod parse;
pub mod sequence;
pub mod tables;

pub use digit::{Digit, DigitError, digits_from_values, digits_to_string};
pub use engine::{
    Mode, Outcome, Verdict, checksum, checksum_auto, complete, compute_check_digit, fold,
    generate_for, is_valid, validate,
};
pub use parse::{DEFAULT_MAX_DIGITS, ParseError, parse_digits};
pub use sequence::{DigitSequence, Layout, SequenceError, processing_order, written_order};

/// Returns the current version of the verhoeff-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
