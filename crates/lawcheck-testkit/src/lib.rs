//! lawcheck testkit - runs compiled law checks under proptest
//!
//! The core crate turns structures into checks; this crate samples operands,
//! evaluates the checks, shrinks failures and reports the outcome.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! lawcheck-testkit = { path = "../lawcheck-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use lawcheck_testkit::fixtures::integer_ring;
//!
//! #[test]
//! fn integers_form_a_ring() {
//!     lawcheck_testkit::properties(&integer_ring());
//! }
//! ```
//!
//! Runs are configured with `LAWCHECK_CASES`, `LAWCHECK_MAX_SHRINK_ITERS`,
//! `LAWCHECK_SEED` and `LAWCHECK_FAIL_FAST`.

#![forbid(unsafe_code)]

pub mod assertions;
pub mod config;
pub mod driver;
pub mod errors;
pub mod fixtures;
pub mod logging;
pub mod report;

pub use assertions::assert_counterexample;
pub use config::DriverConfig;
pub use driver::LawDriver;
pub use errors::{DriverError, Result};
pub use report::{CheckOutcome, CheckStatus, LawReport};

use lawcheck_core::{CheckableStructure, Operand};

/// Compile and run every law of `structure`, logging the report
///
/// Falsified laws are part of the returned report, not an error.
pub fn report_that<T, S>(structure: &S) -> Result<LawReport>
where
    T: Operand,
    S: CheckableStructure<T>,
{
    let mut driver = LawDriver::from_env()?;
    let report = driver.check::<T, S>(structure)?;
    if report.is_success() {
        tracing::info!("{report}");
    } else {
        tracing::warn!("{report}");
    }
    Ok(report)
}

/// Compile and run every law of `structure`, panicking with the combined
/// report if any check does not pass
pub fn properties<T, S>(structure: &S)
where
    T: Operand,
    S: CheckableStructure<T>,
{
    match report_that::<T, S>(structure) {
        Ok(report) if report.is_success() => {}
        Ok(report) => panic!("{} law check(s) failed\n{report}", report.failures().len()),
        Err(err) => panic!("Law checks for {} could not run: {err}", structure.name()),
    }
}
