//! lawcheck core - algebraic structures as executable law sets
//!
//! A structure is an operation (or relation) over a carrier together with the
//! laws it claims to satisfy. This crate turns each law into one or more
//! randomized checks; running them is left to a driver.
//!
//! # Layers
//!
//! ## Operand capability
//! - `Carrier`: proptest strategy for drawing operands plus an `Equivalence`
//! - `WitnessSampler`: draws the fixed witnesses some laws need at compile time
//!
//! ## Law catalogs
//! - `OperationLaw`: associativity, identity, invertibility, latin square, ...
//! - `RelationLaw`: reflexive, transitive, antisymmetric, euclidean, ...
//!
//! ## Structures
//! - Magma family: `Magma`, `Semigroup`, `Monoid`, `Quasigroup`, `Loop`,
//!   `Group`, `AbelianGroup`, `Semilattice`
//! - Relation family: `PartialOrder`, `TotalOrder`, `EquivalenceRelation`
//! - Ring family: `Semiring`, `Ring`, `CommutativeRing`, `NoncommutativeRing`
//!
//! ## Compiled checks
//! - `CheckSet`: ordered `Check`s plus the carrier to sample from
//! - `CheckSink`: where a driver receives them
//!
//! # Example
//!
//! ```rust
//! use lawcheck_core::{Carrier, CheckableStructure, Group, Operation};
//!
//! let add = Operation::new("+", |a: &i64, b: &i64| a.wrapping_add(*b));
//! let group = Group::new(add, Carrier::arbitrary(), 0, |x: &i64| x.wrapping_neg());
//! let checks = group.checks().unwrap();
//! assert_eq!(checks.len(), 4);
//! ```

#![forbid(unsafe_code)]

/// Operand capability: sampling and equivalence
pub mod carrier;

/// Compiled checks and the sink contract
pub mod check;

/// Error handling
pub mod errors;

/// Law catalogs and their compilers
pub mod laws;

/// Operation, relation and witness-function descriptors
pub mod operation;

/// Structure descriptors
pub mod structures;

pub use carrier::{Carrier, Equivalence, Operand, WitnessSampler};
pub use check::{Check, CheckSet, CheckSink, OperationTag, Predicate, Trial};
pub use errors::{LawError, Result};
pub use laws::{OperationLaw, RelationLaw};
pub use operation::{Inverse, LatinSquareSolver, Operation, Relation};
pub use structures::{
    AbelianGroup, CheckableStructure, CommutativeRing, EquivalenceRelation, Group, Loop, Magma,
    Monoid, NoncommutativeRing, OperationStructure, PartialOrder, Quasigroup, RelationStructure,
    Ring, RingStructure, Semigroup, Semilattice, Semiring, TotalOrder,
};
