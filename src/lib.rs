//! # Tower Counting Library
//!
//! This library counts the ways to stack bricks into a tower of an exact
//! height, modulo a fixed prime. Bricks come from a finite set of heights,
//! may be reused without limit, and their order matters; the count is doubled
//! because every valid tower can be finished in either of two colors. The
//! tower height may be astronomically large, so the engine never iterates
//! height-by-height: it raises the companion matrix of the recurrence to a
//! huge power with binary exponentiation instead.
//!
//! ## Key Features
//! - **Recurrence Table**: Dynamic programming derives the tower counts for
//!   all heights up to the recurrence order, seeded by the empty tower.
//! - **Companion Matrix**: The linear recurrence over the last 16 counts is
//!   encoded as a 16x16 shift matrix with the brick availabilities in its
//!   final row.
//! - **Fast Exponentiation**: Binary exponentiation raises the companion
//!   matrix to an arbitrary-precision power in O(log height) multiplications.
//! - **Pluggable Multiplication**: The squaring step accepts interchangeable
//!   strategies, from the standard cubic multiply to a divide-and-conquer
//!   Strassen multiply, with an optional rayon-parallel Strassen variant.
//!
//! ## Overview of Modules
//!
//! ### `modular`
//! Residue arithmetic under the prime modulus 10^9 + 7. Addition,
//! subtraction, and multiplication all return values already reduced into
//! `[0, MODULUS)`.
//!
//! ### `matrix`
//! The square residue [`matrix::Matrix`] value type, the
//! [`matrix::MatrixMultiplier`] strategy trait with its three
//! implementations, and [`matrix::matrix_pow`] for arbitrary-precision
//! exponents.
//!
//! ### `towers`
//! The orchestration layer: brick-height validation, the recurrence table,
//! the companion matrix, and [`towers::count`], which picks the direct table
//! lookup for small heights and the matrix-power path for everything else.
//!
//! ## Usage Example
//! ```rust
//! use num_bigint::BigUint;
//! use tower_counting::matrix::StrassenMultiply;
//! use tower_counting::towers::count;
//!
//! // Towers of height 3 from bricks of heights 1 and 2: three orderings,
//! // each in two colors.
//! let height = BigUint::from(3u32);
//! assert_eq!(count(&height, &[1, 2], &StrassenMultiply).unwrap(), 6);
//!
//! // The height may be far too large to iterate over.
//! let height = BigUint::parse_bytes(b"1000000000000000000", 10).unwrap();
//! assert_eq!(count(&height, &[1], &StrassenMultiply).unwrap(), 2);
//! ```

pub mod matrix;
pub mod modular;
pub mod towers;
