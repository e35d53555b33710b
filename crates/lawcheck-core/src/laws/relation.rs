//! Law catalog and compiler for homogeneous binary relations
//!
//! | Law | Check |
//! |-----|-------|
//! | total | `a R b ∨ b R a` |
//! | reflexive | `a R a` |
//! | irreflexive | `¬(a R a)` |
//! | symmetric | `a R b ⇔ b R a` |
//! | asymmetric | `a R b ⇒ ¬(b R a)` |
//! | antisymmetric `eq` | `eq(i, j)` exactly when `i R j ∧ j R i` |
//! | transitive | `a R b ∧ b R c ⇒ a R c` |
//! | left euclidean | `x R z ∧ y R z ⇒ x R y` |
//! | right euclidean | `z R x ∧ z R y ⇒ x R y` |

use std::fmt;
use std::sync::Arc;

use crate::carrier::{Carrier, Equivalence, Operand};
use crate::check::{Check, Predicate};
use crate::operation::Relation;

/// Law over a homogeneous binary relation
pub enum RelationLaw<T> {
    /// Every pair is related in at least one direction
    Total,
    /// Every element is related to itself
    Reflexive,
    /// No element is related to itself
    Irreflexive,
    /// Relatedness does not depend on argument order
    Symmetric,
    /// Never related in both directions
    Asymmetric,
    /// Related in both directions exactly when equal under the given equivalence
    Antisymmetric {
        /// "Equal under the order", distinct from the carrier's equivalence
        equivalence: Equivalence<T>,
    },
    /// `a R b ∧ b R c ⇒ a R c`
    Transitive,
    /// Two elements related to a common third are related to each other
    LeftEuclidean,
    /// Two elements a common third is related to are related to each other
    RightEuclidean,
}

impl<T> RelationLaw<T> {
    /// Law name
    pub fn name(&self) -> &'static str {
        match self {
            RelationLaw::Total => "total",
            RelationLaw::Reflexive => "reflexive",
            RelationLaw::Irreflexive => "irreflexive",
            RelationLaw::Symmetric => "symmetric",
            RelationLaw::Asymmetric => "asymmetric",
            RelationLaw::Antisymmetric { .. } => "antisymmetric",
            RelationLaw::Transitive => "transitive",
            RelationLaw::LeftEuclidean => "left euclidean",
            RelationLaw::RightEuclidean => "right euclidean",
        }
    }
}

impl<T: Operand> RelationLaw<T> {
    /// Compile this law against `relation`; each relation law yields one check
    pub fn compile(&self, relation: &Relation<T>, carrier: &Carrier<T>) -> Vec<Check<T>> {
        let law = self.name();
        let description = format!(
            "relation `{}` over {} is {}",
            relation.name(),
            carrier.type_name(),
            law
        );
        let r = relation.clone();

        let predicate = match self {
            RelationLaw::Total => {
                Predicate::Binary(Arc::new(move |a: &T, b: &T| r.relates(a, b) || r.relates(b, a)))
            }
            RelationLaw::Reflexive => Predicate::Unary(Arc::new(move |a: &T| r.relates(a, a))),
            RelationLaw::Irreflexive => Predicate::Unary(Arc::new(move |a: &T| !r.relates(a, a))),
            RelationLaw::Symmetric => {
                Predicate::Binary(Arc::new(move |a: &T, b: &T| r.relates(a, b) == r.relates(b, a)))
            }
            RelationLaw::Asymmetric => {
                Predicate::Binary(Arc::new(move |a: &T, b: &T| !r.relates(a, b) || !r.relates(b, a)))
            }
            RelationLaw::Antisymmetric { equivalence } => {
                let eq = equivalence.clone();
                Predicate::Binary(Arc::new(move |i: &T, j: &T| {
                    if r.relates(i, j) && r.relates(j, i) {
                        eq.holds(i, j)
                    } else {
                        !eq.holds(i, j)
                    }
                }))
            }
            RelationLaw::Transitive => Predicate::Ternary(Arc::new(move |a: &T, b: &T, c: &T| {
                !(r.relates(a, b) && r.relates(b, c)) || r.relates(a, c)
            })),
            RelationLaw::LeftEuclidean => Predicate::Ternary(Arc::new(move |x: &T, y: &T, z: &T| {
                !(r.relates(x, z) && r.relates(y, z)) || r.relates(x, y)
            })),
            RelationLaw::RightEuclidean => Predicate::Ternary(Arc::new(move |x: &T, y: &T, z: &T| {
                !(r.relates(z, x) && r.relates(z, y)) || r.relates(x, y)
            })),
        };

        vec![Check::new(law, description, predicate)]
    }
}

impl<T> Clone for RelationLaw<T> {
    fn clone(&self) -> Self {
        match self {
            RelationLaw::Total => RelationLaw::Total,
            RelationLaw::Reflexive => RelationLaw::Reflexive,
            RelationLaw::Irreflexive => RelationLaw::Irreflexive,
            RelationLaw::Symmetric => RelationLaw::Symmetric,
            RelationLaw::Asymmetric => RelationLaw::Asymmetric,
            RelationLaw::Antisymmetric { equivalence } => RelationLaw::Antisymmetric {
                equivalence: equivalence.clone(),
            },
            RelationLaw::Transitive => RelationLaw::Transitive,
            RelationLaw::LeftEuclidean => RelationLaw::LeftEuclidean,
            RelationLaw::RightEuclidean => RelationLaw::RightEuclidean,
        }
    }
}

impl<T> fmt::Display for RelationLaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T> fmt::Debug for RelationLaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
