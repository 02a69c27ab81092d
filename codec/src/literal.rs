//! Turtle string literal escaping and XSD datatypes.

/// XSD datatypes the codec writes as typed literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xsd {
    /// `xsd:decimal`.
    Decimal,
    /// `xsd:integer`.
    Integer,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:date`.
    Date,
    /// `xsd:dateTime`.
    DateTime,
}

impl Xsd {
    /// Returns the prefixed datatype name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Xsd::Decimal => "xsd:decimal",
            Xsd::Integer => "xsd:integer",
            Xsd::NonNegativeInteger => "xsd:nonNegativeInteger",
            Xsd::Boolean => "xsd:boolean",
            Xsd::Date => "xsd:date",
            Xsd::DateTime => "xsd:dateTime",
        }
    }

    /// Normalizes a lexical value for this datatype.
    ///
    /// Dates keep only their `YYYY-MM-DD` part when a time component is present.
    #[must_use]
    pub fn normalize(self, value: &str) -> &str {
        match self {
            Xsd::Date if value.len() > 10 && value.as_bytes()[10] == b'T' => &value[..10],
            _ => value,
        }
    }
}

/// Escapes a value for use inside a `"..."` Turtle literal.
///
/// Backslashes are handled in the same single pass as quotes and control
/// characters, so an escape sequence is never escaped twice.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]. Unknown escapes are kept as written.
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Formats a quoted literal with an optional language tag.
#[must_use]
pub fn quoted(value: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) if !lang.is_empty() => format!("\"{}\"@{}", escape(value), lang),
        _ => format!("\"{}\"", escape(value)),
    }
}

/// Formats a typed literal, e.g. `"0"^^xsd:decimal`.
#[must_use]
pub fn typed(value: &str, datatype: Xsd) -> String {
    format!("\"{}\"^^{}", escape(datatype.normalize(value)), datatype.as_str())
}
