//! Error type for law compilation
//!
//! A falsified law is not an error. It is the designed output of running a
//! check and is reported by the driver. The variants here cover the few ways
//! that building or evaluating a check can go wrong on its own terms.

/// Unified error type for lawcheck operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LawError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// The operand strategy could not produce a witness value
    #[error("Generation failed: {message}")]
    Generation {
        /// Reason reported by the strategy
        message: String,
    },

    /// A check was evaluated against a trial of the wrong shape
    #[error("Arity mismatch: check expects {expected}, trial supplied {actual}")]
    ArityMismatch {
        /// Trial shape the check expects
        expected: &'static str,
        /// Trial shape that was supplied
        actual: &'static str,
    },
}

impl LawError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::ArityMismatch { expected, actual }
    }
}

/// Standard Result type for lawcheck operations
pub type Result<T> = std::result::Result<T, LawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LawError::invalid("empty law set");
        assert!(matches!(err, LawError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: empty law set");
    }

    #[test]
    fn test_arity_mismatch_message() {
        let err = LawError::arity_mismatch("binary", "unary");
        assert_eq!(
            err.to_string(),
            "Arity mismatch: check expects binary, trial supplied unary"
        );
    }
}
