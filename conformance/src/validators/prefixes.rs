//! Required prefix validator.
//!
//! Documents of this system declare the full prefix set, used or not.

use std::collections::BTreeMap;

use ronl_ttl::registry::PREFIXES;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "turtle/prefixes";

/// Checks that every required prefix is declared once, with its namespace.
#[must_use]
pub fn validate(name: &str, content: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let declared = declared_prefixes(content);

    let mut missing = Vec::new();
    let mut mismatched = Vec::new();
    for (prefix, namespace) in PREFIXES {
        match declared.get(*prefix) {
            None => missing.push((*prefix).to_string()),
            Some(iri) if iri != namespace => {
                mismatched.push(format!("{prefix}: declared <{iri}>, expected <{namespace}>"));
            }
            Some(_) => {}
        }
    }

    if !mismatched.is_empty() {
        report.push(
            TestResult::fail(name, VALIDATOR, "prefixes bound to unexpected namespaces")
                .with_details(mismatched),
        );
    }
    if missing.is_empty() {
        report.push(TestResult::pass(
            name,
            VALIDATOR,
            format!("all {} required prefixes declared", PREFIXES.len()),
        ));
    } else {
        report.push(
            TestResult::warn(
                name,
                VALIDATOR,
                format!("{} of {} required prefixes missing", missing.len(), PREFIXES.len()),
            )
            .with_details(missing),
        );
    }
    report
}

/// Maps each `@prefix`/`PREFIX` name to its namespace IRI.
fn declared_prefixes(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim_start();
            let rest = line
                .strip_prefix("@prefix")
                .or_else(|| line.strip_prefix("PREFIX"))?;
            let (prefix, rest) = rest.trim_start().split_once(':')?;
            let iri = rest.trim_start().strip_prefix('<')?.split('>').next()?;
            Some((prefix.trim().to_string(), iri.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn generated_documents_declare_everything() {
        let turtle = ronl_ttl::to_turtle(&ronl_ttl::EditorState::default());
        let report = validate("empty", &turtle);
        assert_eq!(report.count(Severity::Pass), 1);
        assert!(report.all_passed());
    }

    #[test]
    fn wrong_namespace_fails() {
        let report = validate("x", "@prefix dct: <http://purl.org/dc/elements/1.1/> .\n");
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.count(Severity::Warning), 1);
    }
}
