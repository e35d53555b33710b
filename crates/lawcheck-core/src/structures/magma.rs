//! Magma family: one closed binary operation
//!
//! Every structure here starts with `totality`, then adds its own laws:
//!
//! - Magma: nothing else
//! - Semigroup: associativity
//! - Monoid: associativity, identity
//! - Quasigroup: latin square
//! - Loop: identity, latin square
//! - Group: associativity, identity, invertibility
//! - AbelianGroup: commutativity, associativity, identity, invertibility
//! - Semilattice: associativity, commutativity, idempotence

use super::{named_structure, OperationStructure};
use crate::carrier::{Carrier, Operand};
use crate::laws::OperationLaw;
use crate::operation::{Inverse, LatinSquareSolver, Operation};

/// A set with a closed binary operation and no further laws
#[derive(Clone, Debug)]
pub struct Magma<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Magma<T> {
    /// Declare `operation` a magma over `carrier`
    pub fn new(operation: Operation<T>, carrier: Carrier<T>) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Magma",
                operation,
                carrier,
                vec![OperationLaw::Totality],
            ),
        }
    }
}

named_structure!(Magma => OperationStructure);

/// Associative magma
#[derive(Clone, Debug)]
pub struct Semigroup<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Semigroup<T> {
    /// Declare `operation` a semigroup over `carrier`
    pub fn new(operation: Operation<T>, carrier: Carrier<T>) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Semigroup",
                operation,
                carrier,
                vec![OperationLaw::Totality, OperationLaw::Associativity],
            ),
        }
    }
}

named_structure!(Semigroup => OperationStructure);

/// Semigroup with a two-sided identity
#[derive(Clone, Debug)]
pub struct Monoid<T> {
    structure: OperationStructure<T>,
    identity: T,
}

impl<T: Operand> Monoid<T> {
    /// Declare `operation` a monoid over `carrier` with identity `identity`
    pub fn new(operation: Operation<T>, carrier: Carrier<T>, identity: T) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Monoid",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::Associativity,
                    OperationLaw::Identity(identity.clone()),
                ],
            ),
            identity,
        }
    }

    /// The declared identity element
    pub fn identity(&self) -> &T {
        &self.identity
    }
}

named_structure!(Monoid => OperationStructure);

/// Magma where `a ∘ x = b` and `y ∘ a = b` always have unique solutions
#[derive(Clone, Debug)]
pub struct Quasigroup<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Quasigroup<T> {
    /// Declare `operation` a quasigroup; `latin_square(a, b)` returns the
    /// solutions `(x, y)`
    pub fn new(
        operation: Operation<T>,
        carrier: Carrier<T>,
        latin_square: impl Fn(&T, &T) -> (T, T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Quasigroup",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::LatinSquare(LatinSquareSolver::new(latin_square)),
                ],
            ),
        }
    }
}

named_structure!(Quasigroup => OperationStructure);

/// Quasigroup with a two-sided identity
#[derive(Clone, Debug)]
pub struct Loop<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Loop<T> {
    /// Declare `operation` a loop with identity `identity`
    pub fn new(
        operation: Operation<T>,
        carrier: Carrier<T>,
        identity: T,
        latin_square: impl Fn(&T, &T) -> (T, T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Loop",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::Identity(identity),
                    OperationLaw::LatinSquare(LatinSquareSolver::new(latin_square)),
                ],
            ),
        }
    }
}

named_structure!(Loop => OperationStructure);

/// Monoid where every element has an inverse
#[derive(Clone, Debug)]
pub struct Group<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Group<T> {
    /// Declare `operation` a group with identity `identity` and inversion `inverse`
    pub fn new(
        operation: Operation<T>,
        carrier: Carrier<T>,
        identity: T,
        inverse: impl Fn(&T) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Group",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::Associativity,
                    OperationLaw::Identity(identity.clone()),
                    OperationLaw::Invertibility {
                        identity,
                        inverse: Inverse::new(inverse),
                    },
                ],
            ),
        }
    }
}

named_structure!(Group => OperationStructure);

/// Commutative group
#[derive(Clone, Debug)]
pub struct AbelianGroup<T> {
    structure: OperationStructure<T>,
    identity: T,
}

impl<T: Operand> AbelianGroup<T> {
    /// Declare `operation` an abelian group with identity `identity` and
    /// inversion `inverse`
    pub fn new(
        operation: Operation<T>,
        carrier: Carrier<T>,
        identity: T,
        inverse: impl Fn(&T) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            structure: OperationStructure::custom(
                "AbelianGroup",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::Commutativity,
                    OperationLaw::Associativity,
                    OperationLaw::Identity(identity.clone()),
                    OperationLaw::Invertibility {
                        identity: identity.clone(),
                        inverse: Inverse::new(inverse),
                    },
                ],
            ),
            identity,
        }
    }

    /// The declared identity element
    pub fn identity(&self) -> &T {
        &self.identity
    }
}

named_structure!(AbelianGroup => OperationStructure);

/// Commutative, associative operation with an idempotent element
#[derive(Clone, Debug)]
pub struct Semilattice<T> {
    structure: OperationStructure<T>,
}

impl<T: Operand> Semilattice<T> {
    /// Declare `operation` a semilattice; `idempotent_element` must satisfy
    /// `e ∘ e ≡ e`
    pub fn new(operation: Operation<T>, carrier: Carrier<T>, idempotent_element: T) -> Self {
        Self {
            structure: OperationStructure::custom(
                "Semilattice",
                operation,
                carrier,
                vec![
                    OperationLaw::Totality,
                    OperationLaw::Associativity,
                    OperationLaw::Commutativity,
                    OperationLaw::Idempotence(idempotent_element),
                ],
            ),
        }
    }
}

named_structure!(Semilattice => OperationStructure);
