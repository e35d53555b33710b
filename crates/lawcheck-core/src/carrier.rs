//! Operand capability: sampling plus equivalence
//!
//! A [`Carrier`] is the set a structure lives on, described by the two things
//! the law compiler needs from it: a way to draw arbitrary elements (a
//! proptest strategy) and a way to decide whether two elements count as equal
//! for the purpose of a law (an [`Equivalence`]). Keeping both in one value
//! lets each structure override equality without touching the operand type.

use std::fmt;
use std::sync::Arc;

use proptest::arbitrary::{any, Arbitrary};
use proptest::strategy::{SBoxedStrategy, Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

use crate::errors::{LawError, Result};

/// Values that can flow through compiled checks.
///
/// Checks are shared across threads and may be compiled more than once, and
/// counterexamples are rendered with `Debug`.
pub trait Operand: Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Operand for T where T: Clone + fmt::Debug + Send + Sync + 'static {}

/// Binary predicate deciding whether two operands are "the same" for a law.
///
/// The generated checks assume it is reflexive, symmetric and transitive; this
/// is not verified.
pub struct Equivalence<T> {
    test: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
}

impl<T: 'static> Equivalence<T> {
    /// Wrap an arbitrary equivalence predicate
    pub fn new(test: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Treat operands as equal when they map to equal keys
    ///
    /// Useful for normalized representations, e.g. case-insensitive strings.
    pub fn by_key<K: PartialEq>(key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self::new(move |a, b| key(a) == key(b))
    }
}

impl<T> Equivalence<T> {
    /// Evaluate the predicate
    pub fn holds(&self, a: &T, b: &T) -> bool {
        (self.test)(a, b)
    }
}

impl<T: PartialEq + 'static> Equivalence<T> {
    /// Structural equality via `PartialEq`
    pub fn structural() -> Self {
        Self::new(|a: &T, b: &T| a == b)
    }
}

impl<T> Clone for Equivalence<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Equivalence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Equivalence(..)")
    }
}

/// Sampleable, comparable operand set
pub struct Carrier<T> {
    strategy: SBoxedStrategy<T>,
    equivalence: Equivalence<T>,
}

impl<T: Operand> Carrier<T> {
    /// Carrier drawing from `strategy` and comparing with `equivalence`
    pub fn with_equivalence<S>(strategy: S, equivalence: Equivalence<T>) -> Self
    where
        S: Strategy<Value = T> + Send + Sync + 'static,
    {
        Self {
            strategy: strategy.sboxed(),
            equivalence,
        }
    }

    /// Replace the equivalence, keeping the strategy
    pub fn equate_by(self, equivalence: Equivalence<T>) -> Self {
        Self {
            strategy: self.strategy,
            equivalence,
        }
    }

    /// The strategy operands are drawn from
    pub fn strategy(&self) -> &SBoxedStrategy<T> {
        &self.strategy
    }

    /// The active equivalence
    pub fn equivalence(&self) -> &Equivalence<T> {
        &self.equivalence
    }

    /// Whether `a` and `b` are equivalent under this carrier
    pub fn equivalent(&self, a: &T, b: &T) -> bool {
        self.equivalence.holds(a, b)
    }

    /// Operand type name used in check descriptions
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Draw one witness value
    pub fn sample(&self, sampler: &mut WitnessSampler) -> Result<T> {
        sampler.sample(&self.strategy)
    }
}

impl<T: Operand + PartialEq> Carrier<T> {
    /// Carrier drawing from `strategy`, compared structurally
    pub fn new<S>(strategy: S) -> Self
    where
        S: Strategy<Value = T> + Send + Sync + 'static,
    {
        Self::with_equivalence(strategy, Equivalence::structural())
    }
}

impl<T> Carrier<T>
where
    T: Operand + PartialEq + Arbitrary,
    T::Strategy: Send + Sync + 'static,
{
    /// Carrier over every value of `T`, compared structurally
    pub fn arbitrary() -> Self {
        Self::new(any::<T>())
    }
}

impl<T> Clone for Carrier<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<T> fmt::Debug for Carrier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carrier")
            .field("operand", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Source of compile-time witnesses (e.g. the fixed `a`, `b` of a latin
/// square check)
///
/// The default sampler is deterministic, so compiling the same descriptor
/// twice yields the same witnesses and the same descriptions.
pub struct WitnessSampler {
    runner: TestRunner,
}

impl WitnessSampler {
    /// Sampler with proptest's fixed deterministic seed
    pub fn deterministic() -> Self {
        Self {
            runner: TestRunner::deterministic(),
        }
    }

    /// Sampler seeded from `seed`
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &bytes);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Draw the current (unshrunk) value of a fresh tree
    pub fn sample<T: Operand>(&mut self, strategy: &SBoxedStrategy<T>) -> Result<T> {
        let tree = strategy
            .new_tree(&mut self.runner)
            .map_err(|reason| LawError::generation(reason.message()))?;
        Ok(tree.current())
    }
}

impl Default for WitnessSampler {
    fn default() -> Self {
        Self::deterministic()
    }
}

impl fmt::Debug for WitnessSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WitnessSampler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equivalence() {
        let eq = Equivalence::<i64>::structural();
        assert!(eq.holds(&4, &4));
        assert!(!eq.holds(&4, &9));
    }

    #[test]
    fn test_key_equivalence_normalizes() {
        let eq = Equivalence::<String>::by_key(|s| s.to_lowercase());
        assert!(eq.holds(&"Lattice".to_string(), &"LATTICE".to_string()));
        assert!(!eq.holds(&"ring".to_string(), &"rig".to_string()));
    }

    #[test]
    fn test_override_equivalence() {
        let carrier = Carrier::<i64>::arbitrary().equate_by(Equivalence::new(|a, b| a % 2 == b % 2));
        assert!(carrier.equivalent(&2, &10));
        assert!(!carrier.equivalent(&2, &3));
    }

    #[test]
    fn test_deterministic_sampler_repeats() {
        let carrier = Carrier::new(-1000i64..1000);
        let first = carrier.sample(&mut WitnessSampler::deterministic()).unwrap();
        let second = carrier.sample(&mut WitnessSampler::deterministic()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_sampler_respects_strategy() {
        let carrier = Carrier::new(10u8..20);
        let mut sampler = WitnessSampler::from_seed(7);
        for _ in 0..32 {
            let value = carrier.sample(&mut sampler).unwrap();
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Carrier::<i64>::arbitrary().type_name(), "i64");
    }
}
