//! Object value extraction.

use crate::iri;
use crate::literal;

/// An object term read from the tail of a predicate-object segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Unescaped literal text, decoded IRI, or bare token.
    pub value: String,
    /// Language tag of a literal, without `@`.
    pub language: Option<String>,
    /// Datatype of a typed literal, as written after `^^`.
    pub datatype: Option<String>,
    /// The object was an `<IRI>`.
    pub is_iri: bool,
}

/// Splits a segment into its predicate token and the object tail.
#[must_use]
pub fn split_predicate(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim();
    let end = segment.find(char::is_whitespace)?;
    Some((&segment[..end], segment[end..].trim_start()))
}

/// Reads the first object in `tail`.
///
/// Tries, in order: a quoted literal (unescaped), an `<IRI>` (percent-decoded),
/// and a bare token (stripped of any `^^datatype`). Returns an empty value
/// when nothing matches; callers treat that as "not found".
#[must_use]
pub fn extract(tail: &str) -> Extracted {
    let tail = tail.trim_start();
    match tail.chars().next() {
        Some(q @ ('"' | '\'')) => extract_literal(tail, q),
        Some('<') => match tail[1..].find('>') {
            Some(end) => Extracted {
                value: iri::decode(&tail[1..=end]),
                is_iri: true,
                ..Default::default()
            },
            None => Extracted::default(),
        },
        Some(_) => {
            let token = bare_token(tail);
            let value = match token.find("^^") {
                Some(i) => &token[..i],
                None => token,
            };
            Extracted {
                value: value.to_string(),
                ..Default::default()
            }
        }
        None => Extracted::default(),
    }
}

/// Shorthand for [`extract`] when only the value matters.
#[must_use]
pub fn extract_value(tail: &str) -> String {
    extract(tail).value
}

fn extract_literal(tail: &str, quote: char) -> Extracted {
    let body = &tail[quote.len_utf8()..];
    let mut escaped = false;
    let mut close = None;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            close = Some(i);
            break;
        }
    }
    let Some(close) = close else {
        return Extracted::default();
    };

    let mut extracted = Extracted {
        value: literal::unescape(&body[..close]),
        ..Default::default()
    };
    let rest = &body[close + quote.len_utf8()..];
    if let Some(lang) = rest.strip_prefix('@') {
        let tag: String = lang
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if !tag.is_empty() {
            extracted.language = Some(tag);
        }
    } else if let Some(datatype) = rest.strip_prefix("^^") {
        let datatype = match datatype.strip_prefix('<') {
            Some(iri) => iri.split('>').next().unwrap_or(iri),
            None => bare_token(datatype),
        };
        extracted.datatype = Some(datatype.to_string());
    }
    extracted
}

/// A token ends at whitespace, `;`, `,`, or a `.` that is not followed by more token text.
fn bare_token(tail: &str) -> &str {
    let bytes = tail.as_bytes();
    for (i, c) in tail.char_indices() {
        let stop = match c {
            ';' | ',' => true,
            '.' => bytes
                .get(i + 1)
                .map_or(true, |next| next.is_ascii_whitespace() || *next == b';' || *next == b','),
            c => c.is_whitespace(),
        };
        if stop {
            return &tail[..i];
        }
    }
    tail
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn quoted_literal_with_language() {
        let e = extract("\"AOW Leeftijdsbepaling\"@nl ;");
        assert_eq!(e.value, "AOW Leeftijdsbepaling");
        assert_eq!(e.language.as_deref(), Some("nl"));
        assert!(!e.is_iri);
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        assert_eq!(extract_value(r#""say \"hi\" \\ there" ."#), r#"say "hi" \ there"#);
    }

    #[test]
    fn typed_literal_keeps_datatype() {
        let e = extract("\"0\"^^xsd:decimal ;");
        assert_eq!(e.value, "0");
        assert_eq!(e.datatype.as_deref(), Some("xsd:decimal"));
    }

    #[test]
    fn iri_is_decoded() {
        let e = extract("<https://example.org/a%20b> ;");
        assert_eq!(e.value, "https://example.org/a b");
        assert!(e.is_iri);
    }

    #[test]
    fn bare_tokens() {
        assert_eq!(extract_value("true ."), "true");
        assert_eq!(extract_value("1.5 ;"), "1.5");
        assert_eq!(extract_value("42^^xsd:integer ."), "42");
        assert_eq!(extract_value("ex:thing, ex:other"), "ex:thing");
        assert_eq!(extract_value("ex:last."), "ex:last");
    }

    #[test]
    fn misses_are_empty() {
        assert_eq!(extract_value(""), "");
        assert_eq!(extract_value("\"unterminated"), "");
        assert_eq!(extract_value("<unterminated"), "");
    }

    #[test]
    fn predicate_split() {
        assert_eq!(
            split_predicate("dct:title \"x\"@nl"),
            Some(("dct:title", "\"x\"@nl"))
        );
        assert_eq!(split_predicate("lonely"), None);
    }
}
