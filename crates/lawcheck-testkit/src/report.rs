//! Run outcomes
//!
//! One [`CheckOutcome`] per check that was run, collected into a
//! [`LawReport`] for the structure.

use std::fmt;

use lawcheck_core::OperationTag;
use serde::{Serialize, Serializer};

/// Result of running a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every trial satisfied the predicate
    Passed {
        /// Number of trials evaluated
        cases: u32,
    },
    /// Some trial falsified the predicate
    Falsified {
        /// Why the trial failed (predicate false, or a panic message)
        reason: String,
        /// `Debug` rendering of the minimal failing input
        counterexample: String,
    },
    /// The runner gave up before reaching a verdict
    Aborted {
        /// Reason reported by the runner
        reason: String,
    },
}

impl CheckStatus {
    /// Whether the check passed
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckStatus::Passed { .. })
    }

    /// Whether the check was falsified
    pub fn is_falsified(&self) -> bool {
        matches!(self, CheckStatus::Falsified { .. })
    }
}

/// One check and how it fared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Check description as compiled
    pub description: String,
    /// Law the check came from
    pub law: &'static str,
    /// Operation inside a composite that produced the check
    #[serde(serialize_with = "serialize_origin")]
    pub origin: Option<OperationTag>,
    /// Verdict
    #[serde(flatten)]
    pub status: CheckStatus,
}

fn serialize_origin<S: Serializer>(
    origin: &Option<OperationTag>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match origin {
        Some(tag) => serializer.collect_str(tag),
        None => serializer.serialize_none(),
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.status {
            CheckStatus::Passed { .. } => "PASS",
            CheckStatus::Falsified { .. } => "FAIL",
            CheckStatus::Aborted { .. } => "ABORT",
        };
        write!(f, "[{marker}] ")?;
        if let Some(origin) = self.origin {
            write!(f, "({origin}) ")?;
        }
        write!(f, "{}", self.description)?;
        match &self.status {
            CheckStatus::Passed { cases } => write!(f, " ({cases} cases)"),
            CheckStatus::Falsified {
                reason,
                counterexample,
            } => write!(f, "\n    {reason}\n    minimal counterexample: {counterexample}"),
            CheckStatus::Aborted { reason } => write!(f, "\n    {reason}"),
        }
    }
}

/// Outcomes of every check run for one structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawReport {
    /// Structure name
    pub structure: String,
    /// Outcomes in check order
    pub outcomes: Vec<CheckOutcome>,
}

impl LawReport {
    /// True when every check that ran passed
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.status.is_passed())
    }

    /// Checks that did not pass
    pub fn failures(&self) -> Vec<&CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.status.is_passed())
            .collect()
    }

    /// Outcome of the check with exactly this description
    pub fn outcome(&self, description: &str) -> Option<&CheckOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.description == description)
    }

    /// Number of passed checks
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status.is_passed())
            .count()
    }

    /// Render as JSON for structured output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} of {} checks passed",
            self.structure,
            self.passed(),
            self.outcomes.len()
        )?;
        for outcome in &self.outcomes {
            writeln!(f, "  {outcome}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> LawReport {
        LawReport {
            structure: "Ring".to_string(),
            outcomes: vec![
                CheckOutcome {
                    description: "operation `+` over i64 is associative".to_string(),
                    law: "associativity",
                    origin: Some(OperationTag::Addition),
                    status: CheckStatus::Passed { cases: 16 },
                },
                CheckOutcome {
                    description: "operation `*` over i64 has absorbing element 0".to_string(),
                    law: "absorbing element",
                    origin: Some(OperationTag::Multiplication),
                    status: CheckStatus::Falsified {
                        reason: "predicate returned false".to_string(),
                        counterexample: "1".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_failures_and_lookup() {
        let report = report();
        assert!(!report.is_success());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].law, "absorbing element");
        assert!(report
            .outcome("operation `+` over i64 is associative")
            .unwrap()
            .status
            .is_passed());
        assert!(report.outcome("operation `-` over i64 is associative").is_none());
    }

    #[test]
    fn test_display_lists_every_check() {
        let rendered = report().to_string();
        assert!(rendered.starts_with("Ring: 1 of 2 checks passed\n"));
        assert!(rendered.contains("[PASS] (addition) operation `+` over i64 is associative (16 cases)"));
        assert!(rendered.contains("[FAIL] (multiplication) operation `*`"));
        assert!(rendered.contains("minimal counterexample: 1"));
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        let failed = &value["outcomes"][1];
        assert_eq!(failed["status"], "falsified");
        assert_eq!(failed["origin"], "multiplication");
        assert_eq!(failed["counterexample"], "1");
        assert_eq!(value["outcomes"][0]["cases"], 16);
    }
}
