//! Turtle parser.
//!
//! A single forward pass over physical lines. Each line is either skipped
//! (blank, comment, directive), opens a new entity (an `a <Type>` line the
//! registry recognizes), or contributes predicate-object segments to the
//! entity opened last. Decision-model entities are not parsed at all: their
//! lines are buffered verbatim by [`dmn::DmnCapture`] until a non-DMN entity
//! line appears.
//!
//! # Example
//!
//! ```
//! let ttl = "@prefix cpsv: <http://purl.org/vocab/cpsv#> .\n\
//!            @prefix dct: <http://purl.org/dc/terms/> .\n\
//!            <https://regels.overheid.nl/services/aow> a cpsv:PublicService ;\n\
//!                dct:identifier \"aow\" ;\n\
//!                dct:title \"AOW\"@nl .\n";
//! let state = ronl_ttl::from_turtle(ttl).unwrap();
//! assert_eq!(state.service.name, "AOW");
//! ```

pub mod dmn;
pub mod extract;
pub mod scan;
pub mod sections;

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::model::{DmnState, EditorState};
use crate::registry::{self, EntityKind};

use self::dmn::DmnCapture;
use self::extract::{extract, split_predicate};
use self::scan::{is_blank_or_comment, is_directive, scan_line};
use self::sections::Record;

/// A predicate the registry could not map, kept so the caller can see what an
/// import dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedProperty {
    /// 1-based line number.
    pub line: usize,
    /// Section the line belonged to, `None` outside any known entity.
    pub section: Option<EntityKind>,
    /// Subject of that section, when known.
    pub subject: Option<String>,
    /// The predicate as written.
    pub predicate: String,
}

/// Result of [`parse_document`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Reconstructed editor state.
    pub state: EditorState,
    /// Predicates the codec does not understand, in document order.
    pub unrecognized: Vec<UnrecognizedProperty>,
}

/// Parses a document with the default configuration and returns its state.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed structured lines and
/// [`Error::NoRecognizedContent`] for text that is not a document of this
/// system.
pub fn from_turtle(text: &str) -> Result<EditorState> {
    parse_document(text).map(|outcome| outcome.state)
}

/// Parses a document with `config` and returns its state.
///
/// # Errors
///
/// See [`from_turtle`].
pub fn from_turtle_with(text: &str, config: &CodecConfig) -> Result<EditorState> {
    parse_document_with(text, config).map(|outcome| outcome.state)
}

/// Parses a document with the default configuration.
///
/// # Errors
///
/// See [`from_turtle`].
pub fn parse_document(text: &str) -> Result<ParseOutcome> {
    parse_document_with(text, &CodecConfig::default())
}

/// Parses a document with `config`.
///
/// # Errors
///
/// See [`from_turtle`].
pub fn parse_document_with(text: &str, config: &CodecConfig) -> Result<ParseOutcome> {
    let mut parser = Parser::new(config);
    for (index, line) in text.lines().enumerate() {
        parser.line(index + 1, line)?;
    }
    parser.finish()
}

/// A subject written alone on the line before its type line.
struct PendingSubject {
    iri: String,
    /// The line as written, for the DMN buffer.
    raw: String,
}

/// The entity whose properties are being read.
struct Open {
    kind: EntityKind,
    subject: String,
    record: Record,
}

struct Parser<'c> {
    config: &'c CodecConfig,
    state: EditorState,
    open: Option<Open>,
    dmn: DmnCapture,
    pending_subject: Option<PendingSubject>,
    /// Subject of a foreign entity, for reporting.
    foreign_subject: Option<String>,
    unrecognized: Vec<UnrecognizedProperty>,
    saw_directive: bool,
    saw_entity: bool,
}

impl<'c> Parser<'c> {
    fn new(config: &'c CodecConfig) -> Self {
        Self {
            config,
            state: EditorState::default(),
            open: None,
            dmn: DmnCapture::default(),
            pending_subject: None,
            foreign_subject: None,
            unrecognized: Vec::new(),
            saw_directive: false,
            saw_entity: false,
        }
    }

    fn line(&mut self, number: usize, line: &str) -> Result<()> {
        if is_blank_or_comment(line) {
            if self.dmn.is_open() && !registry::is_section_header(line) {
                self.release_pending_to_dmn();
                self.dmn.push(line);
            }
            return Ok(());
        }
        if is_directive(line) {
            self.saw_directive = true;
            if self.dmn.is_open() {
                self.release_pending_to_dmn();
                self.dmn.push(line);
            }
            return Ok(());
        }
        if let Some(kind) = registry::detect_entity_type(line) {
            return self.entity_line(number, kind, line);
        }
        if self.dmn.is_open() {
            self.release_pending_to_dmn();
            // Held back until the next line shows whether it still belongs to the block.
            if let Some(iri) = lone_subject(line) {
                self.pending_subject = Some(PendingSubject {
                    iri,
                    raw: line.to_string(),
                });
                return Ok(());
            }
            self.dmn.push(line);
            return Ok(());
        }
        self.property_line(number, line)
    }

    fn entity_line(&mut self, number: usize, kind: EntityKind, line: &str) -> Result<()> {
        self.flush();
        self.saw_entity = true;
        self.foreign_subject = None;

        if kind.is_dmn() {
            match self.pending_subject.take() {
                Some(pending) => {
                    self.dmn.open(&pending.raw);
                    self.dmn.push(line);
                }
                None => self.dmn.open(line),
            }
            return Ok(());
        }
        if self.dmn.is_open() && leading_subject(line).is_some() {
            self.release_pending_to_dmn();
        }
        self.dmn.close();

        let scanned = scan_line(line);
        if scanned.open_literal || scanned.open_iri {
            return Err(unterminated(number, scanned.open_literal));
        }
        let held = self.pending_subject.take().map(|pending| pending.iri);
        let Some(subject) = leading_subject(line).or(held) else {
            return Err(Error::Parse {
                line: number,
                reason: format!("{kind} type line has no subject"),
            });
        };
        tracing::debug!(line = number, %kind, %subject, "opening section");

        let Some(record) = Record::for_kind(kind) else {
            return Ok(());
        };
        self.open = Some(Open {
            kind,
            subject,
            record,
        });
        // The first segment holds the subject and type clause.
        for segment in scanned.segments.iter().skip(1) {
            self.segment(number, segment);
        }
        if scanned.terminated {
            self.flush();
        }
        Ok(())
    }

    fn property_line(&mut self, number: usize, line: &str) -> Result<()> {
        if self.open.is_none() {
            self.foreign_line(number, line);
            return Ok(());
        }
        let scanned = scan_line(line);
        if scanned.open_literal || scanned.open_iri {
            return Err(unterminated(number, scanned.open_literal));
        }
        for segment in &scanned.segments {
            self.segment(number, segment);
        }
        if scanned.terminated {
            self.flush();
        }
        Ok(())
    }

    /// A line outside any known entity: a bare subject, or foreign triples.
    fn foreign_line(&mut self, number: usize, line: &str) {
        let scanned = scan_line(line);
        if scanned.open_literal || scanned.open_iri {
            return;
        }
        if let Some(iri) = lone_subject(line) {
            self.pending_subject = Some(PendingSubject {
                iri,
                raw: line.to_string(),
            });
            return;
        }
        for segment in &scanned.segments {
            let mut rest = *segment;
            if let Some(subject) = leading_subject(rest) {
                rest = rest.trim_start()[subject.len() + 2..].trim_start();
                self.foreign_subject = Some(subject);
            }
            let predicate = rest.split_whitespace().next().unwrap_or_default();
            if predicate.is_empty() {
                continue;
            }
            tracing::warn!(line = number, predicate, "predicate outside any known entity");
            self.unrecognized.push(UnrecognizedProperty {
                line: number,
                section: None,
                subject: self.foreign_subject.clone(),
                predicate: predicate.to_string(),
            });
        }
        if scanned.terminated {
            self.foreign_subject = None;
        }
        self.pending_subject = None;
    }

    fn segment(&mut self, number: usize, segment: &str) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        let Some((written, tail)) = split_predicate(segment) else {
            return;
        };
        let predicate = registry::normalize_property(written);
        let object = extract(tail);
        if sections::apply(&mut self.state, &mut open.record, &predicate, &object) {
            return;
        }
        tracing::warn!(
            line = number,
            section = %open.kind,
            subject = %open.subject,
            predicate = written,
            "unrecognized predicate"
        );
        self.unrecognized.push(UnrecognizedProperty {
            line: number,
            section: Some(open.kind),
            subject: Some(open.subject.clone()),
            predicate: written.to_string(),
        });
    }

    /// Returns a held subject line to the DMN buffer it was read from.
    fn release_pending_to_dmn(&mut self) {
        if let Some(pending) = self.pending_subject.take() {
            self.dmn.push(&pending.raw);
        }
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::debug!(kind = %open.kind, subject = %open.subject, "flushing section");
            sections::flush(&mut self.state, open.record, &open.subject, &self.config.namespaces);
        }
    }

    fn finish(mut self) -> Result<ParseOutcome> {
        self.flush();
        if self.dmn.is_open() {
            self.release_pending_to_dmn();
        }
        self.dmn.close();
        if !self.saw_directive && !self.saw_entity {
            return Err(Error::NoRecognizedContent);
        }
        self.state.dmn = self.dmn.finish().map(DmnState::Imported);
        Ok(ParseOutcome {
            state: self.state,
            unrecognized: self.unrecognized,
        })
    }
}

fn unterminated(line: usize, literal: bool) -> Error {
    let what = if literal { "string literal" } else { "IRI" };
    Error::Parse {
        line,
        reason: format!("unterminated {what}"),
    }
}

/// Returns the IRI between the angle brackets that open `line`, as written.
fn leading_subject(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix('<')?;
    let end = rest.find('>')?;
    Some(rest[..end].to_string())
}

/// Returns the IRI of a line that holds nothing but one `<iri>` token.
fn lone_subject(line: &str) -> Option<String> {
    let scanned = scan_line(line);
    let [token] = scanned.segments.as_slice() else {
        return None;
    };
    if scanned.terminated || token.contains(char::is_whitespace) {
        return None;
    }
    let inner = token.strip_prefix('<')?.strip_suffix('>')?;
    Some(inner.to_string())
}
