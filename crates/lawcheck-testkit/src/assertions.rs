//! Assertion macros over law reports

/// Assert that every law of a structure holds, panicking with the full
/// report otherwise
#[macro_export]
macro_rules! assert_lawful {
    ($structure:expr) => {
        $crate::properties(&$structure)
    };
}

/// Assert that every check in a report passed
#[macro_export]
macro_rules! assert_all_passed {
    ($report:expr) => {{
        let report = &$report;
        assert!(
            report.is_success(),
            "Expected every check to pass:\n{}",
            report
        )
    }};
}

/// Assert that at least one check of the named law was falsified
#[macro_export]
macro_rules! assert_falsified {
    ($report:expr, $law:expr) => {{
        let report = &$report;
        assert!(
            report
                .outcomes
                .iter()
                .any(|outcome| outcome.law == $law && outcome.status.is_falsified()),
            "Expected law {:?} to be falsified:\n{}",
            $law,
            report
        )
    }};
}

/// Assert that the check with `description` was falsified with the given
/// minimal counterexample rendering
pub fn assert_counterexample(report: &crate::LawReport, description: &str, expected: &str) {
    match report.outcome(description).map(|outcome| &outcome.status) {
        Some(crate::CheckStatus::Falsified { counterexample, .. }) => assert_eq!(
            counterexample, expected,
            "Unexpected counterexample for {description:?}"
        ),
        other => panic!("Expected {description:?} to be falsified, found {other:?}\n{report}"),
    }
}
