//! Codec round-trip validator.
//!
//! Imports the document with the codec, exports it, and imports the export
//! again. The second export must equal the first, and an imported decision
//! model must appear in the export unchanged.

use ronl_ttl::{parse_document, to_turtle, DmnState};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "codec/round-trip";

/// Checks that `content` imports and that export/import is a fixed point.
#[must_use]
pub fn validate(name: &str, content: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let first = match parse_document(content) {
        Ok(outcome) => outcome,
        Err(e) => {
            report.push(TestResult::fail(name, VALIDATOR, format!("import failed: {e}")));
            return report;
        }
    };
    if !first.unrecognized.is_empty() {
        let details = first
            .unrecognized
            .iter()
            .map(|u| match &u.section {
                Some(kind) => format!("line {}: {} in {}", u.line, u.predicate, kind),
                None => format!("line {}: {} outside any known entity", u.line, u.predicate),
            })
            .collect();
        report.push(
            TestResult::warn(
                name,
                VALIDATOR,
                format!("{} predicates are dropped on import", first.unrecognized.len()),
            )
            .with_details(details),
        );
    }

    let exported = to_turtle(&first.state);
    if let Some(DmnState::Imported(dmn)) = &first.state.dmn {
        if exported.contains(&dmn.raw) {
            report.push(TestResult::pass(name, VALIDATOR, "decision model block preserved"));
        } else {
            report.push(TestResult::fail(
                name,
                VALIDATOR,
                "decision model block changed on export",
            ));
        }
    }

    let second = match parse_document(&exported) {
        Ok(outcome) => outcome,
        Err(e) => {
            report.push(TestResult::fail(
                name,
                VALIDATOR,
                format!("exported document does not import: {e}"),
            ));
            return report;
        }
    };
    if second.state != first.state {
        report.push(TestResult::warn(
            name,
            VALIDATOR,
            "state changes on re-import; fields without their required identifier are dropped",
        ));
    }
    if to_turtle(&second.state) == exported {
        report.push(TestResult::pass(name, VALIDATOR, "export is a fixed point"));
    } else {
        report.push(TestResult::fail(name, VALIDATOR, "second export differs from the first"));
    }
    report
}
