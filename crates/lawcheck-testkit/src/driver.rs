//! Law driver
//!
//! Runs compiled checks through a proptest [`TestRunner`]: operands are drawn
//! from the check's carrier according to the predicate's trial shape, and a
//! falsifying input is shrunk before it is reported. Panics inside the
//! predicate are caught by the runner and count as falsifications.

use std::fmt::Debug;

use lawcheck_core::{Carrier, Check, CheckSet, CheckSink, CheckableStructure, Operand, Predicate};
use proptest::strategy::{Just, Strategy};
use proptest::test_runner::{
    Config, RngAlgorithm, TestCaseError, TestCaseResult, TestError, TestRng, TestRunner,
};

use crate::config::DriverConfig;
use crate::errors::Result;
use crate::report::{CheckOutcome, CheckStatus, LawReport};

const FALSIFIED: &str = "predicate returned false";

/// Runs checks and collects their outcomes
#[derive(Debug)]
pub struct LawDriver {
    config: DriverConfig,
    pending: Vec<CheckOutcome>,
    halted: bool,
}

impl LawDriver {
    /// Driver with an explicit configuration, rejected if it does not
    /// validate
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Driver configured from defaults and `LAWCHECK_*` variables
    pub fn from_env() -> Result<Self> {
        Self::new(DriverConfig::from_env()?)
    }

    fn with_valid_config(config: DriverConfig) -> Self {
        Self {
            config,
            pending: Vec::new(),
            halted: false,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Run one check against `carrier`
    pub fn run_check<T: Operand>(&self, check: &Check<T>, carrier: &Carrier<T>) -> CheckOutcome {
        let status = match check.predicate() {
            Predicate::Once(test) => self.drive(1, &Just(()), |()| verdict(test())),
            Predicate::Count { max, test } => {
                self.drive(self.config.cases, &(0..=*max), |n| verdict(test(n)))
            }
            Predicate::Unary(test) => {
                self.drive(self.config.cases, carrier.strategy(), |x| verdict(test(&x)))
            }
            Predicate::Binary(test) => {
                let pairs = (carrier.strategy().clone(), carrier.strategy().clone());
                self.drive(self.config.cases, &pairs, |(x, y)| verdict(test(&x, &y)))
            }
            Predicate::Ternary(test) => {
                let triples = (
                    carrier.strategy().clone(),
                    carrier.strategy().clone(),
                    carrier.strategy().clone(),
                );
                self.drive(self.config.cases, &triples, |(x, y, z)| {
                    verdict(test(&x, &y, &z))
                })
            }
        };

        match &status {
            CheckStatus::Falsified { counterexample, .. } => tracing::warn!(
                check = check.description(),
                counterexample = %counterexample,
                "law falsified"
            ),
            CheckStatus::Aborted { reason } => tracing::warn!(
                check = check.description(),
                reason = %reason,
                "check aborted"
            ),
            CheckStatus::Passed { cases } => tracing::debug!(
                check = check.description(),
                cases = *cases,
                "check passed"
            ),
        }

        CheckOutcome {
            description: check.description().to_string(),
            law: check.law(),
            origin: check.origin(),
            status,
        }
    }

    /// Run every check in `set`, honouring `fail_fast`
    pub fn run<T: Operand>(&mut self, set: &CheckSet<T>) -> LawReport {
        self.pending.clear();
        self.halted = false;
        set.record_into(self);

        let report = LawReport {
            structure: set.structure().to_string(),
            outcomes: std::mem::take(&mut self.pending),
        };
        tracing::info!(
            structure = %report.structure,
            checks = set.len(),
            ran = report.outcomes.len(),
            passed = report.passed(),
            "law run finished"
        );
        report
    }

    /// Compile `structure` with the deterministic sampler and run it
    pub fn check<T: Operand, S: CheckableStructure<T>>(
        &mut self,
        structure: &S,
    ) -> Result<LawReport> {
        let set = structure.checks()?;
        Ok(self.run(&set))
    }

    fn drive<S>(
        &self,
        cases: u32,
        strategy: &S,
        test: impl Fn(S::Value) -> TestCaseResult,
    ) -> CheckStatus
    where
        S: Strategy,
        S::Value: Debug,
    {
        let mut runner = self.runner(self.config.runner_config(cases));
        match runner.run(strategy, test) {
            Ok(()) => CheckStatus::Passed { cases },
            Err(TestError::Fail(reason, value)) => CheckStatus::Falsified {
                reason: reason.message().to_string(),
                counterexample: format!("{value:?}"),
            },
            Err(TestError::Abort(reason)) => CheckStatus::Aborted {
                reason: reason.message().to_string(),
            },
        }
    }

    fn runner(&self, config: Config) -> TestRunner {
        match self.config.seed {
            Some(seed) => {
                let mut bytes = [0u8; 32];
                bytes[..8].copy_from_slice(&seed.to_le_bytes());
                let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &bytes);
                TestRunner::new_with_rng(config, rng)
            }
            None => TestRunner::new(config),
        }
    }
}

impl Default for LawDriver {
    fn default() -> Self {
        Self::with_valid_config(DriverConfig::default())
    }
}

impl<T: Operand> CheckSink<T> for LawDriver {
    fn record(&mut self, check: &Check<T>, carrier: &Carrier<T>) {
        if self.halted {
            tracing::debug!(check = check.description(), "skipped after falsification");
            return;
        }
        let outcome = self.run_check(check, carrier);
        if self.config.fail_fast && outcome.status.is_falsified() {
            self.halted = true;
        }
        self.pending.push(outcome);
    }
}

fn verdict(holds: bool) -> TestCaseResult {
    if holds {
        Ok(())
    } else {
        Err(TestCaseError::fail(FALSIFIED))
    }
}
