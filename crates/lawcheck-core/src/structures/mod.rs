//! Structure descriptors
//!
//! A structure is a named bundle of an operation (or relation), a carrier and
//! an ordered law list. Compiling it compiles each law against its own
//! operation, in declaration order, and concatenates the checks.
//!
//! Law families are kept apart by type: [`OperationStructure`] only accepts
//! [`OperationLaw`]s and [`RelationStructure`] only accepts [`RelationLaw`]s.

pub mod magma;
pub mod order;
pub mod ring;

pub use magma::{AbelianGroup, Group, Loop, Magma, Monoid, Quasigroup, Semigroup, Semilattice};
pub use order::{EquivalenceRelation, PartialOrder, TotalOrder};
pub use ring::{CommutativeRing, NoncommutativeRing, Ring, RingStructure, Semiring};

use crate::carrier::{Carrier, Operand, WitnessSampler};
use crate::check::{Check, CheckSet};
use crate::errors::Result;
use crate::laws::{OperationLaw, RelationLaw};
use crate::operation::{Operation, Relation};

/// Anything that compiles into a [`CheckSet`]
pub trait CheckableStructure<T: Operand> {
    /// Structure name used in reports
    fn name(&self) -> &str;

    /// Carrier the checks sample from
    fn carrier(&self) -> &Carrier<T>;

    /// Compile with an explicit witness sampler
    fn checks_with(&self, sampler: &mut WitnessSampler) -> Result<CheckSet<T>>;

    /// Compile with the deterministic sampler; repeated calls yield identical
    /// descriptions
    fn checks(&self) -> Result<CheckSet<T>> {
        self.checks_with(&mut WitnessSampler::deterministic())
    }
}

/// Closed binary operation plus the laws it must satisfy
#[derive(Clone, Debug)]
pub struct OperationStructure<T> {
    name: String,
    operation: Operation<T>,
    carrier: Carrier<T>,
    laws: Vec<OperationLaw<T>>,
}

impl<T: Operand> OperationStructure<T> {
    /// Structure with an arbitrary law list
    pub fn custom(
        name: impl Into<String>,
        operation: Operation<T>,
        carrier: Carrier<T>,
        laws: Vec<OperationLaw<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            carrier,
            laws,
        }
    }

    /// The operation under test
    pub fn operation(&self) -> &Operation<T> {
        &self.operation
    }

    /// Laws in declaration order
    pub fn laws(&self) -> &[OperationLaw<T>] {
        &self.laws
    }

    /// Compile every law, comparing with `carrier` instead of the structure's own
    pub(crate) fn compile_over(
        &self,
        carrier: &Carrier<T>,
        sampler: &mut WitnessSampler,
    ) -> Result<Vec<Check<T>>> {
        let mut checks = Vec::new();
        for law in &self.laws {
            let compiled = law.compile(&self.operation, carrier, sampler)?;
            tracing::debug!(
                structure = %self.name,
                law = law.name(),
                checks = compiled.len(),
                "compiled operation law"
            );
            checks.extend(compiled);
        }
        Ok(checks)
    }
}

impl<T: Operand> CheckableStructure<T> for OperationStructure<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    fn checks_with(&self, sampler: &mut WitnessSampler) -> Result<CheckSet<T>> {
        let checks = self.compile_over(&self.carrier, sampler)?;
        Ok(CheckSet::new(self.name.clone(), self.carrier.clone(), checks))
    }
}

/// Homogeneous relation plus the laws it must satisfy
#[derive(Clone, Debug)]
pub struct RelationStructure<T> {
    name: String,
    relation: Relation<T>,
    carrier: Carrier<T>,
    laws: Vec<RelationLaw<T>>,
}

impl<T: Operand> RelationStructure<T> {
    /// Structure with an arbitrary law list
    pub fn custom(
        name: impl Into<String>,
        relation: Relation<T>,
        carrier: Carrier<T>,
        laws: Vec<RelationLaw<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            relation,
            carrier,
            laws,
        }
    }

    /// The relation under test
    pub fn relation(&self) -> &Relation<T> {
        &self.relation
    }

    /// Laws in declaration order
    pub fn laws(&self) -> &[RelationLaw<T>] {
        &self.laws
    }
}

impl<T: Operand> CheckableStructure<T> for RelationStructure<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    fn checks_with(&self, _sampler: &mut WitnessSampler) -> Result<CheckSet<T>> {
        let mut checks = Vec::new();
        for law in &self.laws {
            let compiled = law.compile(&self.relation, &self.carrier);
            tracing::debug!(
                structure = %self.name,
                law = law.name(),
                checks = compiled.len(),
                "compiled relation law"
            );
            checks.extend(compiled);
        }
        Ok(CheckSet::new(self.name.clone(), self.carrier.clone(), checks))
    }
}

/// Implements `Deref` to the wrapped structure and forwards
/// [`CheckableStructure`] for the named structure newtypes.
macro_rules! named_structure {
    ($name:ident => $inner:ident) => {
        impl<T> std::ops::Deref for $name<T> {
            type Target = $crate::structures::$inner<T>;

            fn deref(&self) -> &Self::Target {
                &self.structure
            }
        }

        impl<T: $crate::carrier::Operand> $crate::structures::CheckableStructure<T> for $name<T> {
            fn name(&self) -> &str {
                $crate::structures::CheckableStructure::name(&self.structure)
            }

            fn carrier(&self) -> &$crate::carrier::Carrier<T> {
                $crate::structures::CheckableStructure::carrier(&self.structure)
            }

            fn checks_with(
                &self,
                sampler: &mut $crate::carrier::WitnessSampler,
            ) -> $crate::errors::Result<$crate::check::CheckSet<T>> {
                $crate::structures::CheckableStructure::checks_with(&self.structure, sampler)
            }
        }

        impl<T> From<$name<T>> for $crate::structures::$inner<T> {
            fn from(named: $name<T>) -> Self {
                named.structure
            }
        }
    };
}

pub(crate) use named_structure;
