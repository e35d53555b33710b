//! Ring family: two operations over one carrier
//!
//! A composite compiles the additive structure, then the multiplicative one,
//! then the laws that mention both operations. Every check is tagged with the
//! operation it came from. The composite compares with the addition's carrier
//! throughout, and uses the additive identity as the multiplicative zero.
//!
//! Cross-operation laws, attached to multiplication:
//!
//! - Semiring, Ring: left and right distributivity over addition, absorbing zero
//! - CommutativeRing: the above plus commutativity
//! - NoncommutativeRing: the above plus a noncommuting witness pair

use super::{named_structure, AbelianGroup, CheckableStructure, Monoid, OperationStructure};
use crate::carrier::{Carrier, Operand, WitnessSampler};
use crate::check::{CheckSet, OperationTag};
use crate::errors::Result;
use crate::laws::OperationLaw;

/// Addition and multiplication structures plus their cross laws
#[derive(Clone, Debug)]
pub struct RingStructure<T> {
    name: &'static str,
    carrier: Carrier<T>,
    addition: OperationStructure<T>,
    multiplication: OperationStructure<T>,
    cross_laws: Vec<OperationLaw<T>>,
}

impl<T: Operand> RingStructure<T> {
    fn assemble(
        name: &'static str,
        addition: OperationStructure<T>,
        zero: T,
        multiplication: OperationStructure<T>,
        extra: Option<OperationLaw<T>>,
    ) -> Self {
        let sum = addition.operation().clone();
        let mut cross_laws = vec![
            OperationLaw::Distributive { over: sum.clone() },
            OperationLaw::RightDistributive { over: sum },
            OperationLaw::AbsorbingElement(zero),
        ];
        cross_laws.extend(extra);

        Self {
            name,
            carrier: CheckableStructure::carrier(&addition).clone(),
            addition,
            multiplication,
            cross_laws,
        }
    }

    /// The additive structure
    pub fn addition(&self) -> &OperationStructure<T> {
        &self.addition
    }

    /// The multiplicative structure
    pub fn multiplication(&self) -> &OperationStructure<T> {
        &self.multiplication
    }

    /// Laws that reference both operations
    pub fn cross_laws(&self) -> &[OperationLaw<T>] {
        &self.cross_laws
    }
}

impl<T: Operand> CheckableStructure<T> for RingStructure<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    fn checks_with(&self, sampler: &mut WitnessSampler) -> Result<CheckSet<T>> {
        let mut checks: Vec<_> = self
            .addition
            .compile_over(&self.carrier, sampler)?
            .into_iter()
            .map(|check| check.tagged(OperationTag::Addition))
            .collect();

        checks.extend(
            self.multiplication
                .compile_over(&self.carrier, sampler)?
                .into_iter()
                .map(|check| check.tagged(OperationTag::Multiplication)),
        );

        let product = self.multiplication.operation();
        for law in &self.cross_laws {
            let compiled = law.compile(product, &self.carrier, sampler)?;
            tracing::debug!(
                structure = self.name,
                law = law.name(),
                checks = compiled.len(),
                "compiled cross-operation law"
            );
            checks.extend(
                compiled
                    .into_iter()
                    .map(|check| check.tagged(OperationTag::Multiplication)),
            );
        }

        Ok(CheckSet::new(self.name, self.carrier.clone(), checks))
    }
}

/// Two monoids joined by distributivity, with an absorbing zero
#[derive(Clone, Debug)]
pub struct Semiring<T> {
    structure: RingStructure<T>,
}

impl<T: Operand> Semiring<T> {
    /// Combine an additive and a multiplicative monoid
    ///
    /// Every check samples from and compares with the addition's carrier;
    /// the multiplication's carrier and equivalence are not used.
    pub fn new(addition: Monoid<T>, multiplication: Monoid<T>) -> Self {
        let zero = addition.identity().clone();
        Self {
            structure: RingStructure::assemble(
                "Semiring",
                addition.into(),
                zero,
                multiplication.into(),
                None,
            ),
        }
    }
}

named_structure!(Semiring => RingStructure);

/// Abelian group under addition, monoid under multiplication; multiplication
/// is not assumed commutative
#[derive(Clone, Debug)]
pub struct Ring<T> {
    structure: RingStructure<T>,
}

impl<T: Operand> Ring<T> {
    /// Combine an additive abelian group and a multiplicative monoid
    ///
    /// Every check samples from and compares with the addition's carrier;
    /// the multiplication's carrier and equivalence are not used.
    pub fn new(addition: AbelianGroup<T>, multiplication: Monoid<T>) -> Self {
        let zero = addition.identity().clone();
        Self {
            structure: RingStructure::assemble(
                "Ring",
                addition.into(),
                zero,
                multiplication.into(),
                None,
            ),
        }
    }
}

named_structure!(Ring => RingStructure);

/// Ring whose multiplication commutes
#[derive(Clone, Debug)]
pub struct CommutativeRing<T> {
    structure: RingStructure<T>,
}

impl<T: Operand> CommutativeRing<T> {
    /// Combine an additive abelian group and a commutative multiplicative monoid
    pub fn new(addition: AbelianGroup<T>, multiplication: Monoid<T>) -> Self {
        let zero = addition.identity().clone();
        Self {
            structure: RingStructure::assemble(
                "CommutativeRing",
                addition.into(),
                zero,
                multiplication.into(),
                Some(OperationLaw::Commutativity),
            ),
        }
    }
}

named_structure!(CommutativeRing => RingStructure);

/// Ring with at least one pair of elements whose products differ by order
#[derive(Clone, Debug)]
pub struct NoncommutativeRing<T> {
    structure: RingStructure<T>,
}

impl<T: Operand> NoncommutativeRing<T> {
    /// Combine an additive abelian group and a multiplicative monoid;
    /// `witness` must satisfy `a ∘ b ≢ b ∘ a`
    pub fn new(addition: AbelianGroup<T>, multiplication: Monoid<T>, witness: (T, T)) -> Self {
        let zero = addition.identity().clone();
        Self {
            structure: RingStructure::assemble(
                "NoncommutativeRing",
                addition.into(),
                zero,
                multiplication.into(),
                Some(OperationLaw::Noncommutative { witness }),
            ),
        }
    }
}

named_structure!(NoncommutativeRing => RingStructure);
