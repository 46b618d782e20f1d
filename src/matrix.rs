use num_bigint::BigUint;
use num_traits::Zero;

use crate::modular;

// Sub-products smaller than this are not worth a rayon fork.
const PARALLEL_CUTOFF: usize = 8;

/// Square matrix of residues, stored row-major in a flat buffer.
///
/// Matrices are value types: every operation returns a new matrix and never
/// mutates an operand, so the recursive Strassen splitting never aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    side: usize,
    data: Vec<u64>,
}

impl Matrix {
    /// Creates a `side` x `side` matrix of zeros.
    pub fn zero(side: usize) -> Self {
        Matrix {
            side,
            data: vec![0; side * side],
        }
    }

    /// Creates the `side` x `side` identity matrix.
    pub fn identity(side: usize) -> Self {
        let mut matrix = Matrix::zero(side);
        for i in 0..side {
            matrix.set(i, i, 1);
        }
        matrix
    }

    /// Builds a matrix from nested rows. Rows must be square; intended for
    /// tests and small fixtures.
    pub fn from_rows(rows: &[&[u64]]) -> Self {
        let side = rows.len();
        let mut matrix = Matrix::zero(side);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), side, "matrix rows must form a square");
            for (j, &value) in row.iter().enumerate() {
                matrix.set(i, j, value);
            }
        }
        matrix
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.side + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.data[row * self.side + col] = value;
    }

    // Whole-matrix view for the block-based Strassen routines.
    fn view(&self) -> Block<'_> {
        Block {
            data: &self.data,
            stride: self.side,
            row: 0,
            col: 0,
            side: self.side,
        }
    }

    // Writes `block` into the quadrant whose top-left corner is (row, col).
    fn write_block(&mut self, block: &Matrix, row: usize, col: usize) {
        for i in 0..block.side {
            for j in 0..block.side {
                self.set(row + i, col + j, block.get(i, j));
            }
        }
    }
}

/// Strategy seam for matrix multiplication: both input matrices share a side
/// length and every entry of the product is a residue. Implementations must
/// agree element-wise with each other on all inputs.
pub trait MatrixMultiplier: Sync {
    fn multiply(&self, m1: &Matrix, m2: &Matrix) -> Matrix;
}

/// Standard cubic multiplication, reducing after every accumulation step.
pub struct StandardMultiply;

impl MatrixMultiplier for StandardMultiply {
    fn multiply(&self, m1: &Matrix, m2: &Matrix) -> Matrix {
        assert_eq!(m1.side, m2.side, "operands must share a side length");
        let side = m1.side;
        let mut result = Matrix::zero(side);
        for i in 0..side {
            for j in 0..side {
                let mut acc = 0;
                for k in 0..side {
                    acc = modular::add(acc, modular::mul(m1.get(i, k), m2.get(k, j)));
                }
                result.set(i, j, acc);
            }
        }
        result
    }
}

/// Strassen divide-and-conquer multiplication: seven recursive sub-products
/// per level instead of eight. Requires a power-of-two side length.
pub struct StrassenMultiply;

impl MatrixMultiplier for StrassenMultiply {
    fn multiply(&self, m1: &Matrix, m2: &Matrix) -> Matrix {
        assert_eq!(m1.side, m2.side, "operands must share a side length");
        assert!(
            m1.side.is_power_of_two(),
            "Strassen multiplication requires a power-of-two side length"
        );
        strassen_block(&m1.view(), &m2.view(), false)
    }
}

/// Strassen multiplication with the seven sub-products of the top recursion
/// levels forked onto the rayon pool. Produces the exact same residues as
/// [`StrassenMultiply`].
pub struct ParallelStrassenMultiply;

impl MatrixMultiplier for ParallelStrassenMultiply {
    fn multiply(&self, m1: &Matrix, m2: &Matrix) -> Matrix {
        assert_eq!(m1.side, m2.side, "operands must share a side length");
        assert!(
            m1.side.is_power_of_two(),
            "Strassen multiplication requires a power-of-two side length"
        );
        strassen_block(&m1.view(), &m2.view(), true)
    }
}

// Read-only view of a square region inside a matrix buffer. Recursing on
// (offset, side) views instead of copied sub-matrices keeps the splitting
// allocation-free; only the linear combinations allocate.
#[derive(Clone, Copy)]
struct Block<'a> {
    data: &'a [u64],
    stride: usize,
    row: usize,
    col: usize,
    side: usize,
}

impl<'a> Block<'a> {
    fn at(&self, i: usize, j: usize) -> u64 {
        self.data[(self.row + i) * self.stride + self.col + j]
    }

    fn quadrant(&self, qi: usize, qj: usize) -> Block<'a> {
        let half = self.side / 2;
        Block {
            data: self.data,
            stride: self.stride,
            row: self.row + qi * half,
            col: self.col + qj * half,
            side: half,
        }
    }
}

fn add_blocks(m1: &Block<'_>, m2: &Block<'_>) -> Matrix {
    let mut result = Matrix::zero(m1.side);
    for i in 0..m1.side {
        for j in 0..m1.side {
            result.set(i, j, modular::add(m1.at(i, j), m2.at(i, j)));
        }
    }
    result
}

fn sub_blocks(m1: &Block<'_>, m2: &Block<'_>) -> Matrix {
    let mut result = Matrix::zero(m1.side);
    for i in 0..m1.side {
        for j in 0..m1.side {
            result.set(i, j, modular::sub(m1.at(i, j), m2.at(i, j)));
        }
    }
    result
}

fn strassen_block(m1: &Block<'_>, m2: &Block<'_>, parallel: bool) -> Matrix {
    let side = m1.side;
    if side == 1 {
        let mut result = Matrix::zero(1);
        result.set(0, 0, modular::mul(m1.at(0, 0), m2.at(0, 0)));
        return result;
    }

    let a11 = m1.quadrant(0, 0);
    let a12 = m1.quadrant(0, 1);
    let a21 = m1.quadrant(1, 0);
    let a22 = m1.quadrant(1, 1);
    let b11 = m2.quadrant(0, 0);
    let b12 = m2.quadrant(0, 1);
    let b21 = m2.quadrant(1, 0);
    let b22 = m2.quadrant(1, 1);

    // Linear combinations feeding the seven products.
    let s1 = add_blocks(&a11, &a22);
    let s2 = add_blocks(&b11, &b22);
    let s3 = add_blocks(&a21, &a22);
    let s4 = sub_blocks(&b12, &b22);
    let s5 = sub_blocks(&b21, &b11);
    let s6 = add_blocks(&a11, &a12);
    let s7 = sub_blocks(&a21, &a11);
    let s8 = add_blocks(&b11, &b12);
    let s9 = sub_blocks(&a12, &a22);
    let s10 = add_blocks(&b21, &b22);

    let (p1, p2, p3, p4, p5, p6, p7);
    if parallel && side > PARALLEL_CUTOFF {
        // Fork the seven independent sub-products; join before assembly.
        let ((m_1, (m_2, m_3)), ((m_4, m_5), (m_6, m_7))) = rayon::join(
            || {
                rayon::join(
                    || strassen_block(&s1.view(), &s2.view(), parallel),
                    || {
                        rayon::join(
                            || strassen_block(&s3.view(), &b11, parallel),
                            || strassen_block(&a11, &s4.view(), parallel),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || strassen_block(&a22, &s5.view(), parallel),
                            || strassen_block(&s6.view(), &b22, parallel),
                        )
                    },
                    || {
                        rayon::join(
                            || strassen_block(&s7.view(), &s8.view(), parallel),
                            || strassen_block(&s9.view(), &s10.view(), parallel),
                        )
                    },
                )
            },
        );
        p1 = m_1;
        p2 = m_2;
        p3 = m_3;
        p4 = m_4;
        p5 = m_5;
        p6 = m_6;
        p7 = m_7;
    } else {
        p1 = strassen_block(&s1.view(), &s2.view(), false);
        p2 = strassen_block(&s3.view(), &b11, false);
        p3 = strassen_block(&a11, &s4.view(), false);
        p4 = strassen_block(&a22, &s5.view(), false);
        p5 = strassen_block(&s6.view(), &b22, false);
        p6 = strassen_block(&s7.view(), &s8.view(), false);
        p7 = strassen_block(&s9.view(), &s10.view(), false);
    }

    // C11 = P1 + P4 - P5 + P7, C12 = P3 + P5, C21 = P2 + P4,
    // C22 = P1 + P3 - P2 + P6.
    let t1 = add_blocks(&p1.view(), &p4.view());
    let t2 = sub_blocks(&t1.view(), &p5.view());
    let c11 = add_blocks(&t2.view(), &p7.view());
    let c12 = add_blocks(&p3.view(), &p5.view());
    let c21 = add_blocks(&p2.view(), &p4.view());
    let t3 = add_blocks(&p1.view(), &p3.view());
    let t4 = sub_blocks(&t3.view(), &p2.view());
    let c22 = add_blocks(&t4.view(), &p6.view());

    let half = side / 2;
    let mut result = Matrix::zero(side);
    result.write_block(&c11, 0, 0);
    result.write_block(&c12, 0, half);
    result.write_block(&c21, half, 0);
    result.write_block(&c22, half, half);
    result
}

/// Raises `base` to an arbitrary-precision exponent using squaring (O(log n)
/// multiplications), delegating each product to the supplied strategy.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use tower_counting::matrix::{matrix_pow, Matrix, StandardMultiply};
/// let m = Matrix::from_rows(&[&[1, 1], &[1, 0]]);
/// let m8 = matrix_pow(&m, &BigUint::from(8u32), &StandardMultiply);
/// assert_eq!(m8.get(0, 0), 34); // Fibonacci(9)
/// ```
pub fn matrix_pow<M: MatrixMultiplier>(base: &Matrix, exp: &BigUint, multiplier: &M) -> Matrix {
    let mut result = Matrix::identity(base.side());
    let mut base = base.clone();
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.bit(0) {
            result = multiplier.multiply(&result, &base);
        }
        base = multiplier.multiply(&base, &base);
        exp >>= 1;
    }

    result
}
