use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::matrix::{matrix_pow, Matrix, MatrixMultiplier};
use crate::modular;

/// Order of the tower recurrence: the largest usable brick height and the
/// side length of the companion matrix. A power of two, which is what the
/// Strassen strategy requires.
pub const MATRIX_ORDER: usize = 16;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TowerCountError {
    #[error("brick height {0} is outside the supported range 1..={MATRIX_ORDER}")]
    BrickHeightOutOfRange(usize),
    #[error("tower height must be at least 1")]
    ZeroHeight,
}

/// Validates brick heights into the 0/1 availability vector: index `i` is 1
/// iff a brick of height `i + 1` is available. Duplicate heights collapse.
pub fn availability_vector(
    brick_heights: &[usize],
) -> Result<[u64; MATRIX_ORDER], TowerCountError> {
    let mut availability = [0; MATRIX_ORDER];
    for &height in brick_heights {
        if height < 1 || height > MATRIX_ORDER {
            return Err(TowerCountError::BrickHeightOutOfRange(height));
        }
        availability[height - 1] = 1;
    }
    Ok(availability)
}

/// Computes the number of towers for every height `1..=MATRIX_ORDER` by
/// bottom-up dynamic programming: `f(h)` sums `f(h - b)` over the available
/// brick heights `b <= h`, with the empty tower `f(0) = 1` seeding the
/// recurrence. The sentinel stays internal; the returned table holds
/// `f(1)..=f(MATRIX_ORDER)`.
pub fn recurrence_table(availability: &[u64; MATRIX_ORDER]) -> [u64; MATRIX_ORDER] {
    let mut counts = [0; MATRIX_ORDER + 1];
    counts[0] = 1;
    for height in 1..=MATRIX_ORDER {
        let mut total = 0;
        for brick in 1..=height {
            if availability[brick - 1] == 1 {
                total = modular::add(total, counts[height - brick]);
            }
        }
        counts[height] = total;
    }

    let mut table = [0; MATRIX_ORDER];
    table.copy_from_slice(&counts[1..]);
    table
}

/// Builds the companion matrix of the tower recurrence. Rows `0..W-1` shift
/// the state window up by one; the last row places a 1 at column `W - b` for
/// each available brick height `b`, so multiplying by the matrix advances the
/// window of the last `W` tower counts by one height step.
pub fn companion_matrix(availability: &[u64; MATRIX_ORDER]) -> Matrix {
    let mut matrix = Matrix::zero(MATRIX_ORDER);
    for i in 0..MATRIX_ORDER - 1 {
        matrix.set(i, i + 1, 1);
    }
    for brick in 1..=MATRIX_ORDER {
        if availability[brick - 1] == 1 {
            matrix.set(MATRIX_ORDER - 1, MATRIX_ORDER - brick, 1);
        }
    }
    matrix
}

/// Counts the ordered ways to stack bricks of the given heights into a tower
/// of exactly `height`, doubled for the two-color attribute, as a residue
/// modulo [`modular::MODULUS`].
///
/// Heights up to [`MATRIX_ORDER`] read straight from the recurrence table;
/// anything taller raises the companion matrix to `height - MATRIX_ORDER`
/// with the supplied multiplication strategy and dots its last row with the
/// table. The height may be astronomically large; only `O(log height)` matrix
/// multiplications are performed.
///
/// # Errors
/// Fails fast with [`TowerCountError`] if a brick height falls outside
/// `1..=MATRIX_ORDER` or the tower height is zero; no computation starts on
/// invalid input.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use tower_counting::matrix::StrassenMultiply;
/// use tower_counting::towers::count;
/// // (1,1,1), (1,2) and (2,1), each in two colors.
/// let ways = count(&BigUint::from(3u32), &[1, 2], &StrassenMultiply).unwrap();
/// assert_eq!(ways, 6);
/// ```
pub fn count<M: MatrixMultiplier>(
    height: &BigUint,
    brick_heights: &[usize],
    multiplier: &M,
) -> Result<u64, TowerCountError> {
    if height.is_zero() {
        return Err(TowerCountError::ZeroHeight);
    }
    let availability = availability_vector(brick_heights)?;
    let table = recurrence_table(&availability);

    if let Some(h) = height.to_usize().filter(|&h| h <= MATRIX_ORDER) {
        return Ok(modular::mul(2, table[h - 1]));
    }

    let companion = companion_matrix(&availability);
    let exponent = height - BigUint::from(MATRIX_ORDER);
    let powered = matrix_pow(&companion, &exponent, multiplier);

    let mut total = 0;
    for j in 0..MATRIX_ORDER {
        total = modular::add(
            total,
            modular::mul(powered.get(MATRIX_ORDER - 1, j), table[j]),
        );
    }
    Ok(modular::mul(2, total))
}
