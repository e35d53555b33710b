//! Relation family: orderings and equivalence relations

use super::{named_structure, RelationStructure};
use crate::carrier::{Carrier, Equivalence, Operand};
use crate::laws::RelationLaw;
use crate::operation::Relation;

/// Reflexive, antisymmetric, transitive relation
#[derive(Clone, Debug)]
pub struct PartialOrder<T> {
    structure: RelationStructure<T>,
}

impl<T: Operand> PartialOrder<T> {
    /// Declare `relation` a partial order; `equivalence` decides when two
    /// elements are equal under the order
    pub fn new(relation: Relation<T>, carrier: Carrier<T>, equivalence: Equivalence<T>) -> Self {
        Self {
            structure: RelationStructure::custom(
                "PartialOrder",
                relation,
                carrier,
                partial_order_laws(equivalence),
            ),
        }
    }
}

named_structure!(PartialOrder => RelationStructure);

/// Partial order in which every pair is comparable
#[derive(Clone, Debug)]
pub struct TotalOrder<T> {
    structure: RelationStructure<T>,
}

impl<T: Operand> TotalOrder<T> {
    /// Declare `relation` a total order
    pub fn new(relation: Relation<T>, carrier: Carrier<T>, equivalence: Equivalence<T>) -> Self {
        let mut laws = partial_order_laws(equivalence);
        laws.push(RelationLaw::Total);
        Self {
            structure: RelationStructure::custom("TotalOrder", relation, carrier, laws),
        }
    }
}

named_structure!(TotalOrder => RelationStructure);

/// Symmetric, transitive, reflexive relation
#[derive(Clone, Debug)]
pub struct EquivalenceRelation<T> {
    structure: RelationStructure<T>,
}

impl<T: Operand> EquivalenceRelation<T> {
    /// Declare `relation` an equivalence relation
    pub fn new(relation: Relation<T>, carrier: Carrier<T>) -> Self {
        Self {
            structure: RelationStructure::custom(
                "Equivalence",
                relation,
                carrier,
                vec![
                    RelationLaw::Symmetric,
                    RelationLaw::Transitive,
                    RelationLaw::Reflexive,
                ],
            ),
        }
    }
}

impl<T: Operand + PartialEq> EquivalenceRelation<T> {
    /// `==` on `T`, as an equivalence relation
    pub fn structural(carrier: Carrier<T>) -> Self {
        Self::new(Relation::new("==", |a: &T, b: &T| a == b), carrier)
    }
}

named_structure!(EquivalenceRelation => RelationStructure);

fn partial_order_laws<T>(equivalence: Equivalence<T>) -> Vec<RelationLaw<T>> {
    vec![
        RelationLaw::Antisymmetric { equivalence },
        RelationLaw::Transitive,
        RelationLaw::Reflexive,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Trial;
    use crate::structures::CheckableStructure;

    fn le() -> Relation<i64> {
        Relation::new("<=", |a: &i64, b: &i64| a <= b)
    }

    #[test]
    fn test_partial_order_laws() {
        let order = PartialOrder::new(le(), Carrier::arbitrary(), Equivalence::structural());
        let set = order.checks().unwrap();
        let laws: Vec<_> = set.iter().map(|check| check.law()).collect();
        assert_eq!(laws, ["antisymmetric", "transitive", "reflexive"]);

        let reflexive = &set.checks()[2];
        assert!(reflexive.evaluate(Trial::Unary(&4)).unwrap());
    }

    #[test]
    fn test_total_order_appends_totality() {
        let order = TotalOrder::new(le(), Carrier::arbitrary(), Equivalence::structural());
        let set = order.checks().unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.checks()[3].law(), "total");
    }

    #[test]
    fn test_structural_equivalence_relation() {
        let equivalence = EquivalenceRelation::<String>::structural(Carrier::arbitrary());
        let set = equivalence.checks().unwrap();
        let descriptions = set.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].starts_with("relation `==` over "));
        assert!(descriptions[0].ends_with("String is symmetric"));
        assert!(descriptions[2].ends_with("is reflexive"));
    }
}
