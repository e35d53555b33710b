//! End-to-end law checks
//!
//! Lawful structures pass under the driver; unlawful ones are falsified with
//! a shrunk counterexample naming the broken law.

use lawcheck_core::{
    Carrier, CheckableStructure, Equivalence, Group, Monoid, Operation, OperationLaw,
    OperationStructure, PartialOrder, Quasigroup, Relation, RelationLaw, RelationStructure, Ring,
    Semigroup, TotalOrder, WitnessSampler,
};
use lawcheck_testkit::fixtures::{
    float_additive_group, integer_additive_group, integer_ring, matrix_ring, max_semilattice,
    subtraction_quasigroup,
};
use lawcheck_testkit::logging::init_test_tracing;
use lawcheck_testkit::{
    assert_all_passed, assert_counterexample, assert_falsified, CheckStatus, DriverConfig,
    LawDriver,
};

fn driver() -> LawDriver {
    init_test_tracing();
    LawDriver::new(DriverConfig {
        cases: 64,
        seed: Some(2016),
        ..DriverConfig::default()
    })
    .unwrap()
}

#[test]
fn integers_form_a_commutative_ring() {
    let report = driver().check(&integer_ring()).unwrap();
    assert_all_passed!(report);
    assert_eq!(report.outcomes.len(), 12);
    assert_eq!(report.structure, "CommutativeRing");
}

#[test]
fn matrices_form_a_noncommutative_ring() {
    let report = driver().check(&matrix_ring()).unwrap();
    assert_all_passed!(report);
    let witness = report.outcomes.last().unwrap();
    assert_eq!(witness.law, "noncommutativity");
    assert_eq!(witness.status, CheckStatus::Passed { cases: 1 });
}

#[test]
fn subtraction_is_a_quasigroup() {
    assert_all_passed!(driver().check(&subtraction_quasigroup()).unwrap());
}

#[test]
fn overflowing_solver_is_reported_not_raised() {
    let solver = |a: &i64, b: &i64| (-(b - a), b + a);
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    let mut driver = driver();

    let quasigroup = Quasigroup::new(sub.clone(), Carrier::arbitrary(), solver);
    for seed in 0..20 {
        let set = quasigroup
            .checks_with(&mut WitnessSampler::from_seed(seed))
            .unwrap();
        let report = driver.run(&set);
        assert_eq!(report.outcomes.len(), 3);
        assert!(report
            .outcomes
            .iter()
            .all(|outcome| outcome.status.is_passed() || outcome.status.is_falsified()));
    }

    // witnesses near the top of the range always overflow `b + a`
    let near_max = Quasigroup::new(sub, Carrier::new(i64::MAX - 1..=i64::MAX), solver);
    let report = driver.check(&near_max).unwrap();
    for outcome in &report.outcomes[1..] {
        assert_eq!(outcome.law, "latin square");
        // unchecked arithmetic only panics with overflow checks enabled
        if cfg!(debug_assertions) {
            assert!(outcome.status.is_falsified(), "{outcome}");
        } else {
            assert!(outcome.status.is_passed(), "{outcome}");
        }
    }
}

#[test]
fn max_is_a_semilattice() {
    assert_all_passed!(driver().check(&max_semilattice()).unwrap());
}

#[test]
fn float_addition_holds_up_to_tolerance() {
    assert_all_passed!(driver().check(&float_additive_group(1e-6)).unwrap());

    // exact comparison exposes rounding in associativity
    let add = Operation::new("+", |a: &f64, b: &f64| a + b);
    let exact = Semigroup::new(add, Carrier::new(-1.0e6..1.0e6f64));
    let report = driver().check(&exact).unwrap();
    assert_falsified!(report, "associativity");
}

#[test]
fn integer_group_inverts_by_negation() {
    let group = Group::new(
        Operation::new("+", |a: &i64, b: &i64| a.wrapping_add(*b)),
        Carrier::arbitrary(),
        0,
        |x: &i64| x.wrapping_neg(),
    );
    assert_all_passed!(driver().check(&group).unwrap());
}

#[test]
fn subtraction_semigroup_is_falsified_with_a_minimal_triple() {
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    let report = driver()
        .check(&Semigroup::new(sub, Carrier::new(0i64..1000)))
        .unwrap();

    assert_falsified!(report, "associativity");
    // (a - b) - c and a - (b - c) differ by 2c, so shrinking ends at c = 1
    assert_counterexample(&report, "operation `-` over i64 is associative", "(0, 0, 1)");
    assert_eq!(report.failures().len(), 1);
}

#[test]
fn absorbing_element_discriminates_broken_multiplication() {
    let broken = Operation::new("*", |a: &i64, b: &i64| a.wrapping_add(*b));
    let ring = Ring::new(
        integer_additive_group(),
        Monoid::new(broken, Carrier::arbitrary(), 0),
    );
    let report = driver().check(&ring).unwrap();

    assert_falsified!(report, "absorbing element");
    let absorbing = report
        .outcome("operation `*` over i64 has absorbing element 0")
        .unwrap();
    assert!(absorbing.status.is_falsified());
    assert_eq!(
        absorbing.origin.map(|tag| tag.to_string()).as_deref(),
        Some("multiplication")
    );
}

#[test]
fn idempotence_and_absorption_report_separately() {
    let max = Operation::new("max", |a: &u32, b: &u32| (*a).max(*b));
    let structure = OperationStructure::custom(
        "Max",
        max,
        Carrier::arbitrary(),
        vec![OperationLaw::Idempotence(0), OperationLaw::AbsorbingElement(0)],
    );
    let report = driver().check(&structure).unwrap();

    assert!(report.outcomes[0].status.is_passed());
    assert_eq!(report.outcomes[0].law, "idempotence");
    assert_falsified!(report, "absorbing element");
}

#[test]
fn integer_orders_hold() {
    let le = Relation::new("<=", |a: &i64, b: &i64| a <= b);
    let partial = PartialOrder::new(le.clone(), Carrier::arbitrary(), Equivalence::structural());
    let total = TotalOrder::new(le, Carrier::arbitrary(), Equivalence::structural());
    assert_all_passed!(driver().check(&partial).unwrap());
    assert_all_passed!(driver().check(&total).unwrap());
}

#[test]
fn strict_order_is_not_reflexive() {
    let lt = Relation::new("<", |a: &i64, b: &i64| a < b);
    let report = driver()
        .check(&PartialOrder::new(lt, Carrier::arbitrary(), Equivalence::structural()))
        .unwrap();
    assert_falsified!(report, "reflexive");
    assert!(report
        .outcome("relation `<` over i64 is irreflexive")
        .is_none());
}

#[test]
fn divisibility_is_not_total() {
    let divides = Relation::new("|", |a: &u8, b: &u8| *a != 0 && b % a == 0);
    let structure = RelationStructure::custom(
        "Divisibility",
        divides,
        Carrier::new(1u8..=30),
        vec![RelationLaw::Reflexive, RelationLaw::Transitive, RelationLaw::Total],
    );
    let report = driver().check(&structure).unwrap();
    assert_eq!(report.passed(), 2);
    assert_falsified!(report, "total");
}

#[test]
fn report_serializes_for_structured_output() {
    let report = driver().check(&max_semilattice()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["structure"], "Semilattice");
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 4);
    assert_eq!(json["outcomes"][0]["status"], "passed");
}

#[test]
fn compiled_descriptions_are_stable() {
    let first = integer_ring().checks().unwrap();
    let second = integer_ring().checks().unwrap();
    assert_eq!(first.descriptions(), second.descriptions());
}

#[test]
fn properties_accepts_lawful_structures() {
    lawcheck_testkit::assert_lawful!(max_semilattice());
}

#[test]
#[should_panic(expected = "law check(s) failed")]
fn properties_panics_with_the_report() {
    let sub = Operation::new("-", |a: &i64, b: &i64| a.wrapping_sub(*b));
    lawcheck_testkit::properties(&Semigroup::new(sub, Carrier::arbitrary()));
}
