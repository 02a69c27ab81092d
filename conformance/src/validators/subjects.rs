//! IRI hygiene validator.
//!
//! Published documents only carry absolute `http(s)` IRIs with no character
//! that Turtle forbids inside `<...>`.

use std::sync::OnceLock;

use regex::Regex;
use ronl_ttl::iri::is_absolute;
use ronl_ttl::parser::scan::{is_blank_or_comment, mask_literals};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "turtle/iris";

const FORBIDDEN: &[char] = &[' ', '"', '{', '}', '|', '\\', '^', '`'];

fn iri_token() -> Option<&'static Regex> {
    static IRI: OnceLock<Option<Regex>> = OnceLock::new();
    IRI.get_or_init(|| Regex::new(r"<([^<>]*)>").ok()).as_ref()
}

/// Checks every `<IRI>` outside string literals and comments.
#[must_use]
pub fn validate(name: &str, content: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(re) = iri_token() else {
        report.push(TestResult::fail(name, VALIDATOR, "IRI pattern failed to compile"));
        return report;
    };

    let mut relative = Vec::new();
    let mut malformed = Vec::new();
    let mut checked = 0usize;
    for (index, line) in content.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }
        let code = mask_literals(line);
        for caps in re.captures_iter(&code) {
            let Some(iri) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };
            checked += 1;
            if iri.contains(FORBIDDEN) || iri.chars().any(char::is_control) {
                malformed.push(format!("line {}: <{}>", index + 1, iri));
            } else if !is_absolute(iri) {
                relative.push(format!("line {}: <{}>", index + 1, iri));
            }
        }
    }

    if !malformed.is_empty() {
        report.push(
            TestResult::fail(
                name,
                VALIDATOR,
                format!("{} IRIs contain characters Turtle forbids", malformed.len()),
            )
            .with_details(malformed),
        );
    }
    if !relative.is_empty() {
        report.push(
            TestResult::warn(name, VALIDATOR, format!("{} relative IRIs", relative.len()))
                .with_details(relative),
        );
    }
    if report.results.is_empty() {
        report.push(TestResult::pass(
            name,
            VALIDATOR,
            format!("{checked} IRIs are absolute and well-formed"),
        ));
    }
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn literal_text_is_not_checked() {
        let ttl = "<https://x.org/a> <https://x.org/p> \"<not an iri>\" .\n";
        let report = validate("a", ttl);
        assert_eq!(report.count(Severity::Pass), 1);
        assert!(report.results[0].message.starts_with("2 IRIs"));
    }

    #[test]
    fn relative_iris_warn() {
        let report = validate("a", "<x> a <https://x.org/T> .\n");
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(report.all_passed());
    }

    #[test]
    fn spaces_fail() {
        let report = validate("a", "<https://x.org/a b> a <https://x.org/T> .\n");
        assert_eq!(report.failure_count(), 1);
    }
}
