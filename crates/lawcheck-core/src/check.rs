//! Compiled checks
//!
//! A [`Check`] is what a law compiles into: a description plus a predicate
//! that must hold for every trial the driver samples. The predicate's variant
//! tells the driver how many operands to draw; it never draws them itself.

use std::fmt;
use std::sync::Arc;

use crate::carrier::{Carrier, Operand};
use crate::errors::{LawError, Result};

/// Which side of a composite structure produced a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTag {
    /// The additive operation of a ring-family structure
    Addition,
    /// The multiplicative operation of a ring-family structure
    Multiplication,
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationTag::Addition => f.write_str("addition"),
            OperationTag::Multiplication => f.write_str("multiplication"),
        }
    }
}

/// Predicate of a check, shaped by what it consumes per trial
pub enum Predicate<T> {
    /// Fixed witnesses only; evaluated once per run
    Once(Arc<dyn Fn() -> bool + Send + Sync>),
    /// A sampled repeat count in `0..=max`
    Count {
        /// Largest count the driver may draw
        max: usize,
        /// Predicate over the count
        test: Arc<dyn Fn(usize) -> bool + Send + Sync>,
    },
    /// One sampled operand
    Unary(Arc<dyn Fn(&T) -> bool + Send + Sync>),
    /// Two independently sampled operands
    Binary(Arc<dyn Fn(&T, &T) -> bool + Send + Sync>),
    /// Three independently sampled operands
    Ternary(Arc<dyn Fn(&T, &T, &T) -> bool + Send + Sync>),
}

impl<T> Predicate<T> {
    /// Trial shape name
    pub fn shape(&self) -> &'static str {
        match self {
            Predicate::Once(_) => "once",
            Predicate::Count { .. } => "count",
            Predicate::Unary(_) => "unary",
            Predicate::Binary(_) => "binary",
            Predicate::Ternary(_) => "ternary",
        }
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Once(test) => Predicate::Once(Arc::clone(test)),
            Predicate::Count { max, test } => Predicate::Count {
                max: *max,
                test: Arc::clone(test),
            },
            Predicate::Unary(test) => Predicate::Unary(Arc::clone(test)),
            Predicate::Binary(test) => Predicate::Binary(Arc::clone(test)),
            Predicate::Ternary(test) => Predicate::Ternary(Arc::clone(test)),
        }
    }
}

/// Inputs for a single evaluation of a check
#[derive(Debug, Clone, Copy)]
pub enum Trial<'a, T> {
    /// No sampled input
    Once,
    /// A repeat count
    Count(usize),
    /// One operand
    Unary(&'a T),
    /// Two operands
    Binary(&'a T, &'a T),
    /// Three operands
    Ternary(&'a T, &'a T, &'a T),
}

impl<T> Trial<'_, T> {
    /// Trial shape name
    pub fn shape(&self) -> &'static str {
        match self {
            Trial::Once => "once",
            Trial::Count(_) => "count",
            Trial::Unary(_) => "unary",
            Trial::Binary(..) => "binary",
            Trial::Ternary(..) => "ternary",
        }
    }
}

/// One named, randomized check
pub struct Check<T> {
    law: &'static str,
    description: String,
    origin: Option<OperationTag>,
    predicate: Predicate<T>,
}

impl<T: Operand> Check<T> {
    pub(crate) fn new(law: &'static str, description: String, predicate: Predicate<T>) -> Self {
        Self {
            law,
            description,
            origin: None,
            predicate,
        }
    }

    /// Mark which composite operation produced this check
    pub fn tagged(mut self, origin: OperationTag) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Name of the law this check came from
    pub fn law(&self) -> &'static str {
        self.law
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Originating operation inside a composite, if any
    pub fn origin(&self) -> Option<OperationTag> {
        self.origin
    }

    /// The predicate the driver evaluates
    pub fn predicate(&self) -> &Predicate<T> {
        &self.predicate
    }

    /// Evaluate against caller-supplied inputs
    pub fn evaluate(&self, trial: Trial<'_, T>) -> Result<bool> {
        match (&self.predicate, trial) {
            (Predicate::Once(test), Trial::Once) => Ok(test()),
            (Predicate::Count { max, test }, Trial::Count(n)) => {
                if n > *max {
                    return Err(LawError::invalid(format!(
                        "repeat count {n} exceeds maximum {max}"
                    )));
                }
                Ok(test(n))
            }
            (Predicate::Unary(test), Trial::Unary(x)) => Ok(test(x)),
            (Predicate::Binary(test), Trial::Binary(x, y)) => Ok(test(x, y)),
            (Predicate::Ternary(test), Trial::Ternary(x, y, z)) => Ok(test(x, y, z)),
            (predicate, trial) => Err(LawError::arity_mismatch(predicate.shape(), trial.shape())),
        }
    }
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            law: self.law,
            description: self.description.clone(),
            origin: self.origin,
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("law", &self.law)
            .field("description", &self.description)
            .field("origin", &self.origin)
            .field("shape", &self.predicate.shape())
            .finish()
    }
}

/// Receiver of compiled checks (the driver side of the contract)
pub trait CheckSink<T> {
    /// Accept one check together with the carrier to sample from
    fn record(&mut self, check: &Check<T>, carrier: &Carrier<T>);
}

/// Ordered checks compiled from one structure
pub struct CheckSet<T> {
    structure: String,
    carrier: Carrier<T>,
    checks: Vec<Check<T>>,
}

impl<T: Operand> CheckSet<T> {
    /// Assemble a check set
    pub fn new(structure: impl Into<String>, carrier: Carrier<T>, checks: Vec<Check<T>>) -> Self {
        Self {
            structure: structure.into(),
            carrier,
            checks,
        }
    }

    /// Name of the structure the checks were compiled from
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Carrier every check samples from
    pub fn carrier(&self) -> &Carrier<T> {
        &self.carrier
    }

    /// Checks in compilation order
    pub fn checks(&self) -> &[Check<T>] {
        &self.checks
    }

    /// Number of checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks were produced
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Iterate the checks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Check<T>> {
        self.checks.iter()
    }

    /// Descriptions in order
    pub fn descriptions(&self) -> Vec<&str> {
        self.checks.iter().map(Check::description).collect()
    }

    /// Hand every check to `sink`, in order
    pub fn record_into(&self, sink: &mut dyn CheckSink<T>) {
        for check in &self.checks {
            sink.record(check, &self.carrier);
        }
    }
}

impl<'a, T> IntoIterator for &'a CheckSet<T> {
    type Item = &'a Check<T>;
    type IntoIter = std::slice::Iter<'a, Check<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

impl<T> fmt::Debug for CheckSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckSet")
            .field("structure", &self.structure)
            .field("checks", &self.checks)
            .finish()
    }
}
