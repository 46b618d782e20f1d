use num_bigint::BigUint;
use tower_counting::matrix::{ParallelStrassenMultiply, StandardMultiply, StrassenMultiply};
use tower_counting::towers::{count, TowerCountError, MATRIX_ORDER};

#[test]
fn table_path_and_matrix_path_cover_the_boundary() {
    // Heights around MATRIX_ORDER cross from the table lookup onto the
    // matrix-power path; the counts must line up with a plain DP.
    let bricks = [1, 4, 9];
    let mut counts = vec![0u64; 2 * MATRIX_ORDER + 1];
    counts[0] = 1;
    for h in 1..counts.len() {
        for &b in &bricks {
            if b <= h {
                counts[h] = (counts[h] + counts[h - b]) % 1_000_000_007;
            }
        }
    }

    for h in 1..=2 * MATRIX_ORDER {
        let expected = counts[h] * 2 % 1_000_000_007;
        let height = BigUint::from(h);
        assert_eq!(count(&height, &bricks, &StandardMultiply), Ok(expected));
        assert_eq!(count(&height, &bricks, &StrassenMultiply), Ok(expected));
        assert_eq!(
            count(&height, &bricks, &ParallelStrassenMultiply),
            Ok(expected)
        );
    }
}

#[test]
fn huge_height_with_all_bricks() {
    let height = BigUint::parse_bytes(b"98765432109876543210987654321", 10).unwrap();
    let bricks: Vec<usize> = (1..=MATRIX_ORDER).collect();
    let standard = count(&height, &bricks, &StandardMultiply).unwrap();
    assert_eq!(count(&height, &bricks, &StrassenMultiply), Ok(standard));
    assert_eq!(
        count(&height, &bricks, &ParallelStrassenMultiply),
        Ok(standard)
    );
    assert!(standard < 1_000_000_007);
}

#[test]
fn invalid_configurations_fail_before_computing() {
    let height = BigUint::from(5u32);
    assert_eq!(
        count(&height, &[3, MATRIX_ORDER + 1], &StandardMultiply),
        Err(TowerCountError::BrickHeightOutOfRange(MATRIX_ORDER + 1))
    );
    assert_eq!(
        count(&height, &[0], &StandardMultiply),
        Err(TowerCountError::BrickHeightOutOfRange(0))
    );
    assert_eq!(
        count(&BigUint::from(0u32), &[1, 2], &StandardMultiply),
        Err(TowerCountError::ZeroHeight)
    );
}

#[test]
fn empty_brick_set_counts_nothing() {
    let height = BigUint::from(7u32);
    assert_eq!(count(&height, &[], &StandardMultiply), Ok(0));
    let tall = BigUint::parse_bytes(b"100000000000000", 10).unwrap();
    assert_eq!(count(&tall, &[], &StrassenMultiply), Ok(0));
}
