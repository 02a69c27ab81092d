//! Quote-aware line scanning.
//!
//! Punctuation is only significant outside string literals, IRIs and
//! comments. Everything in this module walks a line once with a small state
//! machine and never backtracks.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Literal { quote: char, escaped: bool },
    Iri,
}

/// The significant structure of one physical line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// `;`-separated segments outside literals, trimmed, empty ones dropped.
    pub segments: Vec<&'a str>,
    /// The line ends its statement with `.`.
    pub terminated: bool,
    /// A string literal was still open at end of line.
    pub open_literal: bool,
    /// An `<IRI>` was still open at end of line.
    pub open_iri: bool,
}

/// Splits `line` into predicate-object segments and reports statement termination.
#[must_use]
pub fn scan_line(line: &str) -> ScannedLine<'_> {
    let mut scanned = ScannedLine::default();
    let mut state = State::Code;
    let mut segment_start = 0;
    let mut end = line.len();
    // Byte index and char of the last significant character outside literals.
    let mut last: Option<(usize, char)> = None;

    for (i, c) in line.char_indices() {
        match state {
            State::Code => match c {
                '"' | '\'' => {
                    state = State::Literal { quote: c, escaped: false };
                    last = Some((i, c));
                }
                '<' => {
                    state = State::Iri;
                    last = Some((i, c));
                }
                '#' => {
                    end = i;
                    break;
                }
                ';' => {
                    push_segment(&mut scanned.segments, &line[segment_start..i]);
                    segment_start = i + 1;
                    last = Some((i, c));
                }
                c if c.is_whitespace() => {}
                _ => last = Some((i, c)),
            },
            State::Literal { quote, escaped } => {
                state = if escaped {
                    State::Literal { quote, escaped: false }
                } else if c == '\\' {
                    State::Literal { quote, escaped: true }
                } else if c == quote {
                    last = Some((i, c));
                    State::Code
                } else {
                    state
                };
            }
            State::Iri => {
                if c == '>' {
                    last = Some((i, c));
                    state = State::Code;
                }
            }
        }
    }

    scanned.open_literal = matches!(state, State::Literal { .. });
    scanned.open_iri = state == State::Iri;

    let mut tail_end = end;
    if let Some((i, '.')) = last {
        if state == State::Code {
            scanned.terminated = true;
            tail_end = i;
        }
    }
    if segment_start <= tail_end {
        push_segment(&mut scanned.segments, &line[segment_start..tail_end]);
    }
    scanned
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        segments.push(segment);
    }
}

/// Returns `line` with literal contents blanked and any trailing comment removed.
///
/// Quotes and IRIs are kept so token boundaries stay where they were.
#[must_use]
pub fn mask_literals(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut state = State::Code;
    for c in line.chars() {
        match state {
            State::Code => {
                match c {
                    '"' | '\'' => state = State::Literal { quote: c, escaped: false },
                    '<' => state = State::Iri,
                    '#' => {
                        if out.trim().is_empty() {
                            out.push(c);
                        }
                        break;
                    }
                    _ => {}
                }
                out.push(c);
            }
            State::Literal { quote, escaped } => {
                if escaped {
                    state = State::Literal { quote, escaped: false };
                    out.push(' ');
                } else if c == '\\' {
                    state = State::Literal { quote, escaped: true };
                    out.push(' ');
                } else if c == quote {
                    state = State::Code;
                    out.push(c);
                } else {
                    out.push(' ');
                }
            }
            State::Iri => {
                if c == '>' {
                    state = State::Code;
                }
                out.push(c);
            }
        }
    }
    out
}

/// Returns true for lines with no content outside comments.
#[must_use]
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Returns true for `@prefix`, `@base`, `PREFIX` and `BASE` directives.
#[must_use]
pub fn is_directive(line: &str) -> bool {
    let trimmed = line.trim_start();
    let lower = trimmed.get(..7).unwrap_or(trimmed).to_ascii_lowercase();
    lower.starts_with("@prefix")
        || lower.starts_with("@base")
        || lower.starts_with("prefix ")
        || lower.starts_with("base ")
}
