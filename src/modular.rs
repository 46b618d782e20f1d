//! Residue arithmetic under the fixed prime modulus.
//!
//! Every tower-count quantity in this crate is a residue: a `u64` already
//! reduced into `[0, MODULUS)`. The operations here keep that invariant, in
//! particular [`sub`] adds the modulus before reducing so Strassen's
//! subtractions of partial products never go negative.

/// The prime modulus all tower counts are reduced by.
pub const MODULUS: u64 = 1_000_000_007;

/// Adds two residues, reducing the result into `[0, MODULUS)`.
pub fn add(a: u64, b: u64) -> u64 {
    debug_assert!(a < MODULUS && b < MODULUS);
    let sum = a + b;
    if sum >= MODULUS {
        sum - MODULUS
    } else {
        sum
    }
}

/// Subtracts `b` from `a` in the residue ring.
pub fn sub(a: u64, b: u64) -> u64 {
    debug_assert!(a < MODULUS && b < MODULUS);
    // Lift above zero before reducing; residues are unsigned.
    (a + MODULUS - b) % MODULUS
}

/// Multiplies two residues. The full product of two values below 10^9 + 7
/// fits in a u64, so no widening is needed before the reduction.
pub fn mul(a: u64, b: u64) -> u64 {
    debug_assert!(a < MODULUS && b < MODULUS);
    a * b % MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_at_modulus() {
        assert_eq!(add(MODULUS - 1, 1), 0);
        assert_eq!(add(MODULUS - 1, 2), 1);
        assert_eq!(add(3, 4), 7);
    }

    #[test]
    fn sub_stays_non_negative() {
        assert_eq!(sub(0, 1), MODULUS - 1);
        assert_eq!(sub(5, 9), MODULUS - 4);
        assert_eq!(sub(9, 5), 4);
    }

    #[test]
    fn mul_reduces() {
        assert_eq!(mul(MODULUS - 1, MODULUS - 1), 1);
        assert_eq!(mul(2, 3), 6);
        assert_eq!(mul(0, MODULUS - 1), 0);
    }
}
