//! Opaque capture of decision-model blocks.
//!
//! Once a decision-model type line is seen, every following raw line is
//! buffered verbatim until a non-DMN entity line closes the region. Only two
//! transformations are applied to the buffered copy: the legacy
//! `ronl:implements`/`ronl:implementedBy` predicates are upgraded to their
//! `cprmv:` names. Validation metadata is read on the side without removing
//! anything from the buffer.

use crate::model::{ImportedDmn, ValidationMetadata};
use crate::parser::extract::{extract_value, split_predicate};
use crate::parser::scan::scan_line;
use crate::vocab::ronl;

/// Legacy substrings rewritten in buffered lines: `(legacy, current)`.
pub const LEGACY_REWRITES: &[(&str, &str)] = &[
    ("ronl:implements", "cprmv:implements"),
    ("ronl:implementedBy", "cprmv:implementedBy"),
];

/// Accumulates the verbatim DMN text and its validation metadata.
#[derive(Debug, Default)]
pub struct DmnCapture {
    lines: Vec<String>,
    metadata: ValidationMetadata,
    open: bool,
}

impl DmnCapture {
    /// Whether the capture region is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens (or keeps open) the region; `line` is the DMN type line itself.
    pub fn open(&mut self, line: &str) {
        if !self.open {
            tracing::debug!("opening DMN capture region");
        }
        self.open = true;
        self.push(line);
    }

    /// Closes the region, leaving one blank separator line in the buffer.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        tracing::debug!(lines = self.lines.len(), "closing DMN capture region");
        self.open = false;
        if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Appends a raw line, rewriting legacy predicates and reading metadata.
    pub fn push(&mut self, line: &str) {
        self.read_metadata(line);
        let mut buffered = line.to_string();
        for (legacy, current) in LEGACY_REWRITES {
            if buffered.contains(legacy) {
                buffered = replace_token(&buffered, legacy, current);
            }
        }
        self.lines.push(buffered);
    }

    fn read_metadata(&mut self, line: &str) {
        let scanned = scan_line(line);
        for segment in scanned.segments {
            let Some((predicate, tail)) = split_predicate(segment) else {
                continue;
            };
            let target = match predicate {
                ronl::VALIDATION_STATUS => &mut self.metadata.status,
                ronl::VALIDATED_BY => &mut self.metadata.validated_by,
                ronl::VALIDATED_AT => &mut self.metadata.validated_at,
                ronl::VALIDATION_NOTE => &mut self.metadata.note,
                _ => continue,
            };
            let value = extract_value(tail);
            if !value.is_empty() {
                *target = value;
            }
        }
    }

    /// Returns the captured block, or `None` if nothing was captured.
    ///
    /// Leading and trailing blank lines are dropped so that repeated
    /// import/export cycles reach a fixed point.
    #[must_use]
    pub fn finish(self) -> Option<ImportedDmn> {
        let start = self.lines.iter().position(|l| !l.trim().is_empty())?;
        let end = self.lines.iter().rposition(|l| !l.trim().is_empty())?;
        let raw = self.lines[start..=end].join("\n");
        Some(ImportedDmn {
            raw,
            metadata: self.metadata,
        })
    }
}

/// Replaces `legacy` with `current` where `legacy` is a whole prefixed name.
///
/// `ronl:implements` must not rewrite the head of `ronl:implementsX`.
fn replace_token(line: &str, legacy: &str, current: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(i) = rest.find(legacy) {
        let after = &rest[i + legacy.len()..];
        let boundary = after
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '-'));
        out.push_str(&rest[..i]);
        out.push_str(if boundary { current } else { legacy });
        rest = after;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn legacy_predicates_are_upgraded_in_the_buffer() {
        let mut capture = DmnCapture::default();
        capture.open("<x> a cprmv:DecisionModel ;");
        capture.push("    ronl:implements <y> ;");
        capture.push("    ronl:implementedBy <z> .");
        let dmn = capture.finish().expect("captured");
        assert_eq!(
            dmn.raw,
            "<x> a cprmv:DecisionModel ;\n    cprmv:implements <y> ;\n    cprmv:implementedBy <z> ."
        );
    }

    #[test]
    fn metadata_is_read_without_consuming() {
        let mut capture = DmnCapture::default();
        capture.open("<x> a cprmv:DecisionModel ;");
        capture.push("    ronl:validationStatus \"approved\" ;");
        capture.push("    ronl:validatedBy \"Team Regels\" ;");
        capture.push("    ronl:validatedAt \"2024-05-01T10:00:00Z\"^^xsd:dateTime ;");
        capture.push("    ronl:validationNote \"Checked; fine.\" .");
        let dmn = capture.finish().expect("captured");
        assert_eq!(dmn.metadata.status, "approved");
        assert_eq!(dmn.metadata.validated_by, "Team Regels");
        assert_eq!(dmn.metadata.validated_at, "2024-05-01T10:00:00Z");
        assert_eq!(dmn.metadata.note, "Checked; fine.");
        assert!(dmn.raw.contains("ronl:validationStatus \"approved\""));
    }

    #[test]
    fn comments_and_blank_lines_are_kept_inside_the_block() {
        let mut capture = DmnCapture::default();
        capture.open("<x> a cprmv:DecisionModel .");
        capture.push("");
        capture.push("# input for age");
        capture.push("<x/input/1> a cpsv:Input .");
        capture.push("");
        capture.close();
        let dmn = capture.finish().expect("captured");
        assert_eq!(
            dmn.raw,
            "<x> a cprmv:DecisionModel .\n\n# input for age\n<x/input/1> a cpsv:Input ."
        );
    }

    #[test]
    fn close_adds_a_single_separator() {
        let mut capture = DmnCapture::default();
        capture.open("<a> a cprmv:DecisionModel .");
        capture.close();
        capture.open("<b> a cprmv:DecisionRule .");
        capture.close();
        let dmn = capture.finish().expect("captured");
        assert_eq!(dmn.raw, "<a> a cprmv:DecisionModel .\n\n<b> a cprmv:DecisionRule .");
    }

    #[test]
    fn token_rewrite_respects_boundaries() {
        assert_eq!(
            replace_token(
                "ronl:implementsX ronl:implements",
                "ronl:implements",
                "cprmv:implements"
            ),
            "ronl:implementsX cprmv:implements"
        );
    }

    #[test]
    fn empty_capture_is_none() {
        assert!(DmnCapture::default().finish().is_none());
    }
}
