//! Reusable carriers and structures for law tests
//!
//! Integer arithmetic wraps, so the integer fixtures form a ring (modulo
//! 2^64) instead of panicking on overflow.

use lawcheck_core::{
    AbelianGroup, Carrier, CommutativeRing, Equivalence, Monoid, NoncommutativeRing, Operation,
    Quasigroup, Semilattice,
};
use proptest::arbitrary::any;

/// Wrapping `+` on `i64`
pub fn integer_addition() -> Operation<i64> {
    Operation::new("+", |a: &i64, b: &i64| a.wrapping_add(*b))
}

/// Wrapping `*` on `i64`
pub fn integer_multiplication() -> Operation<i64> {
    Operation::new("*", |a: &i64, b: &i64| a.wrapping_mul(*b))
}

/// Integers under addition
pub fn integer_additive_group() -> AbelianGroup<i64> {
    AbelianGroup::new(integer_addition(), Carrier::arbitrary(), 0, |x: &i64| {
        x.wrapping_neg()
    })
}

/// Integers under multiplication
pub fn integer_multiplicative_monoid() -> Monoid<i64> {
    Monoid::new(integer_multiplication(), Carrier::arbitrary(), 1)
}

/// The integers as a commutative ring
pub fn integer_ring() -> CommutativeRing<i64> {
    CommutativeRing::new(integer_additive_group(), integer_multiplicative_monoid())
}

/// Integers under subtraction; `a - x = b` and `y - a = b` are solved exactly
pub fn subtraction_quasigroup() -> Quasigroup<i64> {
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    Quasigroup::new(sub, Carrier::arbitrary(), |a: &i64, b: &i64| {
        (b.wrapping_sub(*a).wrapping_neg(), b.wrapping_add(*a))
    })
}

/// Non-negative integers under `max`, idempotent at 0
pub fn max_semilattice() -> Semilattice<u32> {
    let max = Operation::new("max", |a: &u32, b: &u32| (*a).max(*b));
    Semilattice::new(max, Carrier::arbitrary(), 0)
}

/// Floats equal up to `tolerance`, relative to the larger magnitude (at least 1)
pub fn approximately(tolerance: f64) -> Equivalence<f64> {
    Equivalence::new(move |a: &f64, b: &f64| {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= tolerance * scale
    })
}

/// Finite floats in `-1e6..1e6`, compared with [`approximately`]
pub fn bounded_floats(tolerance: f64) -> Carrier<f64> {
    Carrier::with_equivalence(-1.0e6..1.0e6f64, approximately(tolerance))
}

/// Floats under addition, compared approximately
pub fn float_additive_group(tolerance: f64) -> AbelianGroup<f64> {
    let add = Operation::new("+", |a: &f64, b: &f64| a + b);
    AbelianGroup::new(add, bounded_floats(tolerance), 0.0, |x: &f64| -x)
}

/// 2x2 integer matrix, row major
pub type Matrix2 = [[i64; 2]; 2];

/// All-zero matrix
pub const MATRIX_ZERO: Matrix2 = [[0, 0], [0, 0]];

/// Identity matrix
pub const MATRIX_IDENTITY: Matrix2 = [[1, 0], [0, 1]];

/// Entrywise wrapping sum
pub fn matrix_add(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut sum = MATRIX_ZERO;
    for (i, row) in sum.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][j].wrapping_add(b[i][j]);
        }
    }
    sum
}

/// Wrapping matrix product
pub fn matrix_mul(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut product = MATRIX_ZERO;
    for (i, row) in product.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0]
                .wrapping_mul(b[0][j])
                .wrapping_add(a[i][1].wrapping_mul(b[1][j]));
        }
    }
    product
}

/// 2x2 integer matrices as a noncommutative ring
pub fn matrix_ring() -> NoncommutativeRing<Matrix2> {
    let carrier = Carrier::new(any::<Matrix2>());
    let negate = |m: &Matrix2| m.map(|row| row.map(i64::wrapping_neg));
    NoncommutativeRing::new(
        AbelianGroup::new(
            Operation::new("+", matrix_add),
            carrier.clone(),
            MATRIX_ZERO,
            negate,
        ),
        Monoid::new(Operation::new("*", matrix_mul), carrier, MATRIX_IDENTITY),
        ([[0, 1], [0, 0]], [[0, 0], [1, 0]]),
    )
}
