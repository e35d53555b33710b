//! Compilation properties of structure descriptors
//!
//! - Compiling the same descriptor twice yields the same descriptions
//! - Law predicates hold on arbitrary operands for lawful operations
//! - Law predicates reject known counterexamples for unlawful ones

use lawcheck_core::{
    AbelianGroup, Carrier, CheckableStructure, Equivalence, Monoid, NoncommutativeRing, Operation,
    OperationLaw, OperationStructure, PartialOrder, Quasigroup, Relation, Ring, Trial,
    WitnessSampler,
};
use proptest::prelude::*;

fn add() -> Operation<i64> {
    Operation::new("+", |a: &i64, b: &i64| a.wrapping_add(*b))
}

fn mul() -> Operation<i64> {
    Operation::new("*", |a: &i64, b: &i64| a.wrapping_mul(*b))
}

fn integer_ring() -> Ring<i64> {
    let carrier = Carrier::<i64>::arbitrary();
    Ring::new(
        AbelianGroup::new(add(), carrier.clone(), 0, |x: &i64| x.wrapping_neg()),
        Monoid::new(mul(), carrier, 1),
    )
}

fn subtraction_quasigroup() -> Quasigroup<i64> {
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    Quasigroup::new(sub, Carrier::arbitrary(), |a: &i64, b: &i64| {
        (a.wrapping_sub(*b), b.wrapping_add(*a))
    })
}

#[test]
fn descriptions_are_stable_across_compilations() {
    let ring = integer_ring();
    let first = ring.checks().unwrap();
    let second = ring.checks().unwrap();
    assert_eq!(first.descriptions(), second.descriptions());

    let quasigroup = subtraction_quasigroup();
    assert_eq!(
        quasigroup.checks().unwrap().descriptions(),
        quasigroup.checks().unwrap().descriptions()
    );
}

#[test]
fn seeded_witnesses_reproduce() {
    let quasigroup = subtraction_quasigroup();
    let first = quasigroup.checks_with(&mut WitnessSampler::from_seed(11)).unwrap();
    let second = quasigroup.checks_with(&mut WitnessSampler::from_seed(11)).unwrap();
    assert_eq!(first.descriptions(), second.descriptions());
}

#[test]
fn noncommutative_witness_is_evaluated_once() {
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    let structure = OperationStructure::custom(
        "Subtraction",
        sub,
        Carrier::arbitrary(),
        vec![OperationLaw::Noncommutative { witness: (5, 2) }],
    );
    let set = structure.checks().unwrap();
    assert_eq!(
        set.checks()[0].description(),
        "operation `-` over i64 is not commutative (witness: 5, 2)"
    );
    assert!(set.checks()[0].evaluate(Trial::Once).unwrap());
}

#[test]
fn noncommutative_ring_over_matrices_compiles() {
    type Matrix = [[i64; 2]; 2];
    let carrier = Carrier::<Matrix>::new(any::<[[i64; 2]; 2]>());
    let add = Operation::new("+", |a: &Matrix, b: &Matrix| {
        let mut sum = [[0i64; 2]; 2];
        for (i, row) in sum.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][j].wrapping_add(b[i][j]);
            }
        }
        sum
    });
    let mul = Operation::new("*", |a: &Matrix, b: &Matrix| {
        let mut product = [[0i64; 2]; 2];
        for (i, row) in product.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0]
                    .wrapping_mul(b[0][j])
                    .wrapping_add(a[i][1].wrapping_mul(b[1][j]));
            }
        }
        product
    });
    let ring = NoncommutativeRing::new(
        AbelianGroup::new(add, carrier.clone(), [[0, 0], [0, 0]], |m: &Matrix| {
            [
                [m[0][0].wrapping_neg(), m[0][1].wrapping_neg()],
                [m[1][0].wrapping_neg(), m[1][1].wrapping_neg()],
            ]
        }),
        Monoid::new(mul, carrier, [[1, 0], [0, 1]]),
        ([[0, 1], [0, 0]], [[0, 0], [1, 0]]),
    );

    let set = ring.checks().unwrap();
    let witness = set.iter().last().unwrap();
    assert_eq!(witness.law(), "noncommutativity");
    assert!(witness.evaluate(Trial::Once).unwrap());
}

proptest! {
    #[test]
    fn integer_ring_checks_hold(x in any::<i64>(), y in any::<i64>(), z in any::<i64>()) {
        for check in &integer_ring().checks().unwrap() {
            let trial = match check.predicate().shape() {
                "unary" => Trial::Unary(&x),
                "binary" => Trial::Binary(&x, &y),
                _ => Trial::Ternary(&x, &y, &z),
            };
            prop_assert!(check.evaluate(trial).unwrap(), "{}", check.description());
        }
    }

    #[test]
    fn latin_square_checks_hold_for_subtraction(j in any::<i64>()) {
        for check in quasigroup_latin_checks() {
            prop_assert!(check.evaluate(Trial::Unary(&j)).unwrap());
        }
    }

    #[test]
    fn partial_order_on_lengths_is_antisymmetric_up_to_length(
        a in "[a-c]{0,4}",
        b in "[a-c]{0,4}",
    ) {
        let shorter = Relation::new("len<=", |a: &String, b: &String| a.len() <= b.len());
        let order = PartialOrder::new(
            shorter,
            Carrier::new("[a-c]{0,4}"),
            Equivalence::by_key(|s: &String| s.len()),
        );
        let set = order.checks().unwrap();
        prop_assert!(set.checks()[0].evaluate(Trial::Binary(&a, &b)).unwrap());
    }
}

fn quasigroup_latin_checks() -> Vec<lawcheck_core::Check<i64>> {
    subtraction_quasigroup()
        .checks()
        .unwrap()
        .iter()
        .filter(|check| check.law() == "latin square")
        .cloned()
        .collect()
}

#[test]
fn subtraction_is_not_associative() {
    let semigroup = lawcheck_core::Semigroup::new(
        Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b)),
        Carrier::arbitrary(),
    );
    let set = semigroup.checks().unwrap();
    let associativity = &set.checks()[1];
    assert!(!associativity.evaluate(Trial::Ternary(&1, &2, &3)).unwrap());
}
