//! Law catalog and compiler for closed binary operations
//!
//! Each [`OperationLaw`] compiles into one or more [`Check`]s. `x`, `y`, `z`
//! below are operands the driver samples independently for every trial; `∘`
//! is the operation under test and `≡` the carrier's equivalence.
//!
//! | Law | Check |
//! |-----|-------|
//! | totality | `x ∘ y` evaluates |
//! | associativity | `(x ∘ y) ∘ z ≡ x ∘ (y ∘ z)` |
//! | commutativity | `x ∘ y ≡ y ∘ x` |
//! | noncommutative `(a, b)` | `¬(a ∘ b ≡ b ∘ a)`, once |
//! | idempotence `e` | every fold `e ∘ e ∘ … ∘ e` (n steps) `≡ e` |
//! | left identity `e` | `e ∘ x ≡ x` |
//! | right identity `e` | `x ∘ e ≡ x` |
//! | identity `e` | both of the above |
//! | invertibility `e, inv` | `x ∘ inv(x) ≡ e ∧ inv(x) ∘ x ≡ e` |
//! | left absorbing `z` | `z ∘ x ≡ z` |
//! | right absorbing `z` | `x ∘ z ≡ z` |
//! | absorbing `z` | `x ∘ z ≡ z ∧ z ∘ x ≡ z` |
//! | latin square `f` | `x`, `y` from `f(a, b)` are the unique solutions |
//! | distributive over `+` | `x ∘ (y + z) ≡ (x ∘ y) + (x ∘ z)` |
//! | right distributive over `+` | `(y + z) ∘ x ≡ (y ∘ x) + (z ∘ x)` |

use std::fmt;
use std::sync::Arc;

use crate::carrier::{Carrier, Operand, WitnessSampler};
use crate::check::{Check, Predicate};
use crate::errors::Result;
use crate::operation::{Inverse, LatinSquareSolver, Operation};

/// Largest repeat count drawn by the idempotence check
pub const MAX_IDEMPOTENCE_REPEATS: usize = 124;

/// Law over a closed binary operation
pub enum OperationLaw<T> {
    /// The operation is defined on every pair of operands
    Totality,
    /// `(x ∘ y) ∘ z ≡ x ∘ (y ∘ z)`
    Associativity,
    /// `x ∘ y ≡ y ∘ x`
    Commutativity,
    /// The witness pair does not commute
    Noncommutative {
        /// Pair `(a, b)` with `a ∘ b ≢ b ∘ a`
        witness: (T, T),
    },
    /// Repeatedly combining the element with itself yields the element
    Idempotence(T),
    /// `e ∘ x ≡ x`
    LeftIdentity(T),
    /// `x ∘ e ≡ x`
    RightIdentity(T),
    /// Two-sided identity
    Identity(T),
    /// Every element has a two-sided inverse
    Invertibility {
        /// Identity element the inverses combine to
        identity: T,
        /// Inversion function
        inverse: Inverse<T>,
    },
    /// `z ∘ x ≡ z`
    LeftAbsorbingElement(T),
    /// `x ∘ z ≡ z`
    RightAbsorbingElement(T),
    /// Two-sided absorbing (zero) element
    AbsorbingElement(T),
    /// `a ∘ x = b` and `y ∘ a = b` have exactly the solutions the solver predicts
    LatinSquare(LatinSquareSolver<T>),
    /// Left distributivity over another operation
    Distributive {
        /// The operation distributed over
        over: Operation<T>,
    },
    /// Right distributivity over another operation
    RightDistributive {
        /// The operation distributed over
        over: Operation<T>,
    },
}

impl<T> OperationLaw<T> {
    /// Law name, stable across witnesses
    pub fn name(&self) -> &'static str {
        match self {
            OperationLaw::Totality => "totality",
            OperationLaw::Associativity => "associativity",
            OperationLaw::Commutativity => "commutativity",
            OperationLaw::Noncommutative { .. } => "noncommutativity",
            OperationLaw::Idempotence(_) => "idempotence",
            OperationLaw::LeftIdentity(_) => "left identity",
            OperationLaw::RightIdentity(_) => "right identity",
            OperationLaw::Identity(_) => "identity",
            OperationLaw::Invertibility { .. } => "invertibility",
            OperationLaw::LeftAbsorbingElement(_) => "left absorbing element",
            OperationLaw::RightAbsorbingElement(_) => "right absorbing element",
            OperationLaw::AbsorbingElement(_) => "absorbing element",
            OperationLaw::LatinSquare(_) => "latin square",
            OperationLaw::Distributive { .. } => "distributivity",
            OperationLaw::RightDistributive { .. } => "right distributivity",
        }
    }
}

impl<T: Operand> OperationLaw<T> {
    /// Compile this law against `operation`, comparing with `carrier`'s
    /// equivalence. Checks are returned in their fixed emission order.
    pub fn compile(
        &self,
        operation: &Operation<T>,
        carrier: &Carrier<T>,
        sampler: &mut WitnessSampler,
    ) -> Result<Vec<Check<T>>> {
        let subject = subject(operation, carrier);
        let law = self.name();
        let op = operation.clone();
        let eq = carrier.equivalence().clone();

        let checks = match self {
            OperationLaw::Totality => vec![Check::new(
                law,
                format!("{subject} is total"),
                Predicate::Binary(Arc::new(move |x: &T, y: &T| {
                    let _evaluated = op.apply(x, y);
                    true
                })),
            )],
            OperationLaw::Associativity => vec![Check::new(
                law,
                format!("{subject} is associative"),
                Predicate::Ternary(Arc::new(move |x: &T, y: &T, z: &T| {
                    eq.holds(&op.apply(&op.apply(x, y), z), &op.apply(x, &op.apply(y, z)))
                })),
            )],
            OperationLaw::Commutativity => vec![Check::new(
                law,
                format!("{subject} is commutative"),
                Predicate::Binary(Arc::new(move |x: &T, y: &T| {
                    eq.holds(&op.apply(x, y), &op.apply(y, x))
                })),
            )],
            OperationLaw::Noncommutative { witness } => {
                let (a, b) = witness.clone();
                vec![Check::new(
                    law,
                    format!("{subject} is not commutative (witness: {a:?}, {b:?})"),
                    Predicate::Once(Arc::new(move || !eq.holds(&op.apply(&a, &b), &op.apply(&b, &a)))),
                )]
            }
            OperationLaw::Idempotence(element) => {
                let e = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} is idempotent at {e:?}"),
                    Predicate::Count {
                        max: MAX_IDEMPOTENCE_REPEATS,
                        test: Arc::new(move |repeats: usize| {
                            let mut folded = e.clone();
                            for _ in 0..repeats {
                                folded = op.apply(&folded, &e);
                                if !eq.holds(&folded, &e) {
                                    return false;
                                }
                            }
                            true
                        }),
                    },
                )]
            }
            OperationLaw::LeftIdentity(element) => {
                let e = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has left identity element {e:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| eq.holds(&op.apply(&e, x), x))),
                )]
            }
            OperationLaw::RightIdentity(element) => {
                let e = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has right identity element {e:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| eq.holds(&op.apply(x, &e), x))),
                )]
            }
            OperationLaw::Identity(element) => {
                let e = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has identity element {e:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| {
                        eq.holds(&op.apply(&e, x), x) && eq.holds(&op.apply(x, &e), x)
                    })),
                )]
            }
            OperationLaw::Invertibility { identity, inverse } => {
                let e = identity.clone();
                let inverse = inverse.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has inverses with respect to {e:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| {
                        let inv = inverse.apply(x);
                        eq.holds(&op.apply(x, &inv), &e) && eq.holds(&op.apply(&inv, x), &e)
                    })),
                )]
            }
            OperationLaw::LeftAbsorbingElement(element) => {
                let z = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has left absorbing element {z:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| eq.holds(&op.apply(&z, x), &z))),
                )]
            }
            OperationLaw::RightAbsorbingElement(element) => {
                let z = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has right absorbing element {z:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| eq.holds(&op.apply(x, &z), &z))),
                )]
            }
            OperationLaw::AbsorbingElement(element) => {
                let z = element.clone();
                vec![Check::new(
                    law,
                    format!("{subject} has absorbing element {z:?}"),
                    Predicate::Unary(Arc::new(move |x: &T| {
                        eq.holds(&op.apply(x, &z), &z) && eq.holds(&op.apply(&z, x), &z)
                    })),
                )]
            }
            OperationLaw::LatinSquare(solver) => {
                let a = carrier.sample(sampler)?;
                let b = carrier.sample(sampler)?;
                latin_square_checks(operation, carrier, a, b, solver)
            }
            OperationLaw::Distributive { over } => {
                let add = over.clone();
                vec![Check::new(
                    law,
                    format!("{subject} distributes over `{}`", over.name()),
                    Predicate::Ternary(Arc::new(move |x: &T, y: &T, z: &T| {
                        let lhs = op.apply(x, &add.apply(y, z));
                        let rhs = add.apply(&op.apply(x, y), &op.apply(x, z));
                        eq.holds(&lhs, &rhs)
                    })),
                )]
            }
            OperationLaw::RightDistributive { over } => {
                let add = over.clone();
                vec![Check::new(
                    law,
                    format!("{subject} right-distributes over `{}`", over.name()),
                    Predicate::Ternary(Arc::new(move |x: &T, y: &T, z: &T| {
                        let lhs = op.apply(&add.apply(y, z), x);
                        let rhs = add.apply(&op.apply(y, x), &op.apply(z, x));
                        eq.holds(&lhs, &rhs)
                    })),
                )]
            }
        };

        Ok(checks)
    }
}

/// Latin square checks for fixed `a` and `b`
///
/// Each trial confirms the predicted solution solves its equation and that a
/// sampled `j` solves it exactly when `j ≡` the prediction. The solver runs
/// inside the trial, so a panicking solver is caught like a panicking
/// operation.
pub(crate) fn latin_square_checks<T: Operand>(
    operation: &Operation<T>,
    carrier: &Carrier<T>,
    a: T,
    b: T,
    solver: &LatinSquareSolver<T>,
) -> Vec<Check<T>> {
    let subject = subject(operation, carrier);

    let left = {
        let (op, eq) = (operation.clone(), carrier.equivalence().clone());
        let solver = solver.clone();
        let (a, b) = (a.clone(), b.clone());
        Predicate::Unary(Arc::new(move |j: &T| {
            let (x, _) = solver.solve(&a, &b);
            eq.holds(&op.apply(&a, &x), &b) && eq.holds(j, &x) == eq.holds(&op.apply(&a, j), &b)
        }))
    };
    let right = {
        let (op, eq) = (operation.clone(), carrier.equivalence().clone());
        let solver = solver.clone();
        let (a, b) = (a.clone(), b.clone());
        Predicate::Unary(Arc::new(move |j: &T| {
            let (_, y) = solver.solve(&a, &b);
            eq.holds(&op.apply(&y, &a), &b) && eq.holds(j, &y) == eq.holds(&op.apply(j, &a), &b)
        }))
    };

    vec![
        Check::new(
            "latin square",
            format!("{subject} latin square property (left) (a: {a:?}, b: {b:?})"),
            left,
        ),
        Check::new(
            "latin square",
            format!("{subject} latin square property (right) (a: {a:?}, b: {b:?})"),
            right,
        ),
    ]
}

fn subject<T: Operand>(operation: &Operation<T>, carrier: &Carrier<T>) -> String {
    format!("operation `{}` over {}", operation.name(), carrier.type_name())
}

impl<T: Clone> Clone for OperationLaw<T> {
    fn clone(&self) -> Self {
        match self {
            OperationLaw::Totality => OperationLaw::Totality,
            OperationLaw::Associativity => OperationLaw::Associativity,
            OperationLaw::Commutativity => OperationLaw::Commutativity,
            OperationLaw::Noncommutative { witness } => OperationLaw::Noncommutative {
                witness: witness.clone(),
            },
            OperationLaw::Idempotence(e) => OperationLaw::Idempotence(e.clone()),
            OperationLaw::LeftIdentity(e) => OperationLaw::LeftIdentity(e.clone()),
            OperationLaw::RightIdentity(e) => OperationLaw::RightIdentity(e.clone()),
            OperationLaw::Identity(e) => OperationLaw::Identity(e.clone()),
            OperationLaw::Invertibility { identity, inverse } => OperationLaw::Invertibility {
                identity: identity.clone(),
                inverse: inverse.clone(),
            },
            OperationLaw::LeftAbsorbingElement(z) => OperationLaw::LeftAbsorbingElement(z.clone()),
            OperationLaw::RightAbsorbingElement(z) => {
                OperationLaw::RightAbsorbingElement(z.clone())
            }
            OperationLaw::AbsorbingElement(z) => OperationLaw::AbsorbingElement(z.clone()),
            OperationLaw::LatinSquare(solver) => OperationLaw::LatinSquare(solver.clone()),
            OperationLaw::Distributive { over } => OperationLaw::Distributive { over: over.clone() },
            OperationLaw::RightDistributive { over } => {
                OperationLaw::RightDistributive { over: over.clone() }
            }
        }
    }
}

impl<T> fmt::Display for OperationLaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: fmt::Debug> fmt::Debug for OperationLaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationLaw::Noncommutative { witness } => {
                f.debug_struct("Noncommutative").field("witness", witness).finish()
            }
            OperationLaw::Idempotence(e)
            | OperationLaw::LeftIdentity(e)
            | OperationLaw::RightIdentity(e)
            | OperationLaw::Identity(e)
            | OperationLaw::LeftAbsorbingElement(e)
            | OperationLaw::RightAbsorbingElement(e)
            | OperationLaw::AbsorbingElement(e) => write!(f, "{}({e:?})", self.name()),
            OperationLaw::Invertibility { identity, .. } => f
                .debug_struct("Invertibility")
                .field("identity", identity)
                .finish_non_exhaustive(),
            OperationLaw::Distributive { over } | OperationLaw::RightDistributive { over } => {
                write!(f, "{}(over `{}`)", self.name(), over.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
