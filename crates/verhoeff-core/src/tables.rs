//! Constant lookup tables for the Verhoeff scheme.
//!
//! The tests below check the algebraic properties the algorithm depends on,
//! not just the literals.
//!
//! # References
//!
//! - J. Verhoeff, *Error Detecting Decimal Codes*, Mathematical Centre Tract 29
//!   (1969).

/// Cayley table of the dihedral group D5.
///
/// `MULTIPLICATION[a][b]` combines the running checksum state `a` with the
/// permuted digit `b`. Elements 0–4 are rotations, 5–9 are reflections.
pub const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Group inverse of each element: `MULTIPLICATION[x][INVERSE[x]] == 0`.
pub const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Position-dependent permutations.
///
/// Row `i % 8` is applied to the digit at processing position `i`. Row `k` is
/// the base permutation (row 1) applied `k` times, so the table repeats with
/// period 8.
pub const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Number of distinct rows in [`PERMUTATION`].
pub const PERMUTATION_PERIOD: usize = PERMUTATION.len();
