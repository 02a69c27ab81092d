//! Document validators.
//!
//! Each validator takes a document name and its Turtle text and returns a
//! report. None of them touch the file system.

pub mod prefixes;
pub mod round_trip;
pub mod subjects;
pub mod syntax;

use crate::report::ConformanceReport;

/// Runs every validator over one document.
#[must_use]
pub fn validate_document(name: &str, content: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(syntax::validate(name, content));
    report.extend(prefixes::validate(name, content));
    report.extend(subjects::validate(name, content));
    report.extend(round_trip::validate(name, content));
    report
}
