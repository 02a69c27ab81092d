//! Conformance report types: per-document results, severity levels, aggregation.

use std::fmt;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The document is usable but something was lost or is unusual.
    Warning,
    /// The document does not conform.
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// A single conformance check result for one document.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Document the check ran on (file path or fixture name).
    pub document: String,
    /// Short identifier of the validator that produced this result.
    pub validator: &'static str,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Additional detail lines.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(document: &str, validator: &'static str, message: String, severity: Severity) -> Self {
        Self {
            document: document.to_string(),
            validator,
            message,
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(document: &str, validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(document, validator, message.into(), Severity::Pass)
    }

    /// Creates a warning result.
    pub fn warn(document: &str, validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(document, validator, message.into(), Severity::Warning)
    }

    /// Creates a failure result.
    pub fn fail(document: &str, validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(document, validator, message.into(), Severity::Failure)
    }

    /// Attaches detail lines, keeping at most the first ten.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details.into_iter().take(10).collect();
        self
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated conformance report over every checked document.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All individual results, in check order.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the number of results with `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_fail_the_report() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a.ttl", "syntax", "ok"));
        report.push(TestResult::warn("a.ttl", "round-trip", "lossy"));
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Warning), 1);

        report.push(TestResult::fail("b.ttl", "syntax", "broken"));
        assert!(!report.all_passed());
    }

    #[test]
    fn details_are_capped() {
        let details = (0..25).map(|i| format!("line {i}")).collect();
        let result = TestResult::fail("a.ttl", "subjects", "bad").with_details(details);
        assert_eq!(result.details.len(), 10);
    }
}
