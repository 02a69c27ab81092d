//! Conformance suite for Turtle documents exchanged with the `ronl-ttl` codec.
//!
//! Checks documents against the standards a published service description
//! must satisfy and against the codec's own round-trip contract.
//!
//! # Conformance Scope
//!
//! | Check | Standard |
//! |-------|----------|
//! | Syntax | Turtle 1.1 (parsed with `sophia_turtle`) |
//! | Prefixes | The twelve prefixes every generated document declares |
//! | IRIs | Absolute IRIs without forbidden characters |
//! | Round trip | Export after import is a fixed point; decision models kept verbatim |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = ronl_conformance::run_all(Path::new("published")).unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::validate_document;

/// Runs every validator over each `.ttl` file below `dir`.
///
/// Files are visited in path order so reports are stable between runs.
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(dir: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let walker = WalkDir::new(dir).sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "ttl") {
            continue;
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        tracing::debug!(document = %path.display(), "validating");
        report.extend(validate_document(&path.display().to_string(), &content));
    }
    Ok(report)
}

/// Runs every validator over the bundled reference documents.
#[must_use]
pub fn run_fixtures() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for (name, content) in fixtures::ALL {
        report.extend(validate_document(name, content));
    }
    report
}
