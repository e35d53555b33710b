//! Operation and relation descriptors
//!
//! These are the atomic objects every law is checked against, plus the
//! function-valued witnesses some laws carry. All of them wrap their closure
//! in an `Arc`, so a law can be cloned and compiled any number of times.

use std::fmt;
use std::sync::Arc;

/// Closed binary operation `(T, T) -> T`, assumed total over `T`
pub struct Operation<T> {
    name: Arc<str>,
    function: Arc<dyn Fn(&T, &T) -> T + Send + Sync>,
}

impl<T: 'static> Operation<T> {
    /// Named operation; the name appears in check descriptions
    pub fn new(name: &str, function: impl Fn(&T, &T) -> T + Send + Sync + 'static) -> Self {
        Self {
            name: Arc::from(name),
            function: Arc::new(function),
        }
    }
}

impl<T> Operation<T> {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `a ∘ b`
    pub fn apply(&self, a: &T, b: &T) -> T {
        (self.function)(a, b)
    }
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation(`{}`)", self.name)
    }
}

/// Homogeneous binary relation `(T, T) -> bool`
pub struct Relation<T> {
    name: Arc<str>,
    predicate: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
}

impl<T: 'static> Relation<T> {
    /// Named relation; the name appears in check descriptions
    pub fn new(name: &str, predicate: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name: Arc::from(name),
            predicate: Arc::new(predicate),
        }
    }
}

impl<T> Relation<T> {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `a R b`
    pub fn relates(&self, a: &T, b: &T) -> bool {
        (self.predicate)(a, b)
    }
}

impl<T> Clone for Relation<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Relation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relation(`{}`)", self.name)
    }
}

/// Inversion witness for `invertibility`
pub struct Inverse<T> {
    function: Arc<dyn Fn(&T) -> T + Send + Sync>,
}

impl<T: 'static> Inverse<T> {
    /// Wrap an inversion function
    pub fn new(function: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        Self {
            function: Arc::new(function),
        }
    }
}

impl<T> Inverse<T> {
    /// `x⁻¹`
    pub fn apply(&self, x: &T) -> T {
        (self.function)(x)
    }
}

impl<T> Clone for Inverse<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Inverse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Inverse(..)")
    }
}

/// Solver witness for the latin square property
///
/// Given `a` and `b`, returns `(x, y)` such that `a ∘ x = b` and `y ∘ a = b`.
pub struct LatinSquareSolver<T> {
    function: Arc<dyn Fn(&T, &T) -> (T, T) + Send + Sync>,
}

impl<T: 'static> LatinSquareSolver<T> {
    /// Wrap a solver function
    pub fn new(function: impl Fn(&T, &T) -> (T, T) + Send + Sync + 'static) -> Self {
        Self {
            function: Arc::new(function),
        }
    }
}

impl<T> LatinSquareSolver<T> {
    /// Predicted `(x, y)` for `a ∘ x = b` and `y ∘ a = b`
    pub fn solve(&self, a: &T, b: &T) -> (T, T) {
        (self.function)(a, b)
    }
}

impl<T> Clone for LatinSquareSolver<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for LatinSquareSolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LatinSquareSolver(..)")
    }
}
