//! Turtle 1.1 syntax validator.
//!
//! Parses the document with `sophia_turtle`, independently of the codec's own
//! line-oriented reader.

use sophia_api::source::TripleSource;
use sophia_turtle::parser::turtle;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "turtle/syntax";

/// Checks that `content` is well-formed Turtle and holds at least one triple.
#[must_use]
pub fn validate(name: &str, content: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    match count_triples(content) {
        Ok(0) => report.push(TestResult::warn(name, VALIDATOR, "document holds no triples")),
        Ok(count) => report.push(TestResult::pass(
            name,
            VALIDATOR,
            format!("well-formed Turtle 1.1 ({count} triples)"),
        )),
        Err(reason) => report.push(
            TestResult::fail(name, VALIDATOR, "document is not well-formed Turtle")
                .with_details(vec![reason]),
        ),
    }
    report
}

/// Parses `content` and returns its triple count, or the parser's message.
///
/// # Errors
///
/// Returns the rendered parser error when the document is malformed.
pub fn count_triples(content: &str) -> Result<usize, String> {
    let mut count = 0usize;
    turtle::parse_str(content)
        .for_each_triple(|_| count += 1)
        .map_err(|e| e.to_string())?;
    Ok(count)
}
