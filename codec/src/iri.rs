//! IRI helpers: namespace constants, slugs and percent-encoding.
//!
//! Every subject the generator writes goes through one of these helpers so
//! that no generated IRI carries an unescaped space or Turtle-reserved
//! character.

use std::borrow::Cow;

use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC,
};

/// Namespace IRIs of the vocabularies every document declares.
pub mod ns {
    /// Core Public Service Vocabulary.
    pub const CPSV: &str = "http://purl.org/vocab/cpsv#";
    /// Core Vocabularies (CPSV-AP) namespace.
    pub const CV: &str = "http://data.europa.eu/m8g/";
    /// Dublin Core terms.
    pub const DCT: &str = "http://purl.org/dc/terms/";
    /// Data Catalog Vocabulary.
    pub const DCAT: &str = "http://www.w3.org/ns/dcat#";
    /// European Legislation Identifier ontology.
    pub const ELI: &str = "http://data.europa.eu/eli/ontology#";
    /// Friend of a Friend.
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    /// W3C Organization ontology.
    pub const ORG: &str = "http://www.w3.org/ns/org#";
    /// Regels Overheid terms.
    pub const RONL: &str = "https://regels.overheid.nl/termen/";
    /// SKOS core.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// schema.org.
    pub const SCHEMA: &str = "http://schema.org/";
    /// XML Schema datatypes.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Core Public Rule Management Vocabulary.
    pub const CPRMV: &str = "https://cprmv.open-regels.nl/0.3.0/";
    /// EU language authority table.
    pub const EU_LANGUAGE: &str = "http://publications.europa.eu/resource/authority/language/";
}

/// Default base for service subjects.
pub const SERVICES_BASE: &str = "https://regels.overheid.nl/services/";
/// Default base for organization subjects.
pub const ORGANIZATIONS_BASE: &str = "https://regels.overheid.nl/organizations/";
/// Default base for temporal and CPRMV rule subjects.
pub const RULES_BASE: &str = "https://regels.overheid.nl/rules/";
/// Default base for parameter subjects.
pub const PARAMETERS_BASE: &str = "https://regels.overheid.nl/parameters/";
/// Default base for cost subjects.
pub const COSTS_BASE: &str = "https://regels.overheid.nl/costs/";
/// Default base for output subjects.
pub const OUTPUTS_BASE: &str = "https://regels.overheid.nl/outputs/";
/// Default base for concept subjects.
pub const CONCEPTS_BASE: &str = "https://regels.overheid.nl/concepts/";
/// Default base for BWB legal resources.
pub const LEGAL_BASE: &str = "https://wetten.overheid.nl/";

/// Characters `encodeURIComponent` leaves alone: alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters that may not appear inside a Turtle `<IRIREF>`.
const IRIREF_RESERVED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'`');

/// Returns true for `http://` and `https://` IRIs.
#[must_use]
pub fn is_absolute(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Lowercases, joins words with single hyphens and drops everything outside `[a-z0-9-]`.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }
    slug
}

/// Slug that stands in for an empty one in derived URIs.
pub const UNNAMED: &str = "unnamed";

/// Like [`slugify`], but never empty.
#[must_use]
pub fn slug_or_unnamed(value: &str) -> String {
    let slug = slugify(value);
    if slug.is_empty() {
        UNNAMED.to_string()
    } else {
        slug
    }
}

/// Percent-encodes a single path segment the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Escapes characters that would break an `<IRIREF>`, leaving the rest intact.
#[must_use]
pub fn encode_iri(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, IRIREF_RESERVED).into()
}

/// Decodes percent-escapes; invalid UTF-8 sequences are replaced.
#[must_use]
pub fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Joins `base` and `id`, unless `id` is already absolute.
#[must_use]
pub fn resolve(base: &str, id: &str) -> String {
    if is_absolute(id) {
        id.to_string()
    } else {
        format!("{}{}", base, encode_component(id))
    }
}

/// Inverse of [`resolve`]: strips `base` and decodes, or returns `iri` unchanged.
#[must_use]
pub fn unresolve(base: &str, iri: &str) -> String {
    match iri.strip_prefix(base) {
        Some(local) if !local.is_empty() && !local.contains('/') => decode(local),
        _ => iri.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn slug_shapes() {
        assert_eq!(slugify("AOW Leeftijd"), "aow-leeftijd");
        assert_eq!(slugify("  Zorg -- toeslag  "), "zorg-toeslag");
        assert_eq!(slugify("Huur/toeslag 2024!"), "huurtoeslag-2024");
        assert_eq!(slugify("-leading"), "leading");
        assert_eq!(slugify("trailing-"), "trailing");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn component_encoding_matches_uri_component_rules() {
        assert_eq!(encode_component("kosten 2024"), "kosten%202024");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("it's-ok_(1).~*!"), "it's-ok_(1).~*!");
    }

    #[test]
    fn iri_encoding_only_touches_reserved_characters() {
        assert_eq!(encode_iri("https://x.org/a b"), "https://x.org/a%20b");
        assert_eq!(encode_iri("https://x.org/a?b=c#d"), "https://x.org/a?b=c#d");
    }

    #[test]
    fn resolve_respects_absolute_identifiers() {
        assert_eq!(
            resolve(ORGANIZATIONS_BASE, "https://org.example/x"),
            "https://org.example/x"
        );
        assert_eq!(
            resolve(ORGANIZATIONS_BASE, "svb"),
            "https://regels.overheid.nl/organizations/svb"
        );
        assert_eq!(unresolve(COSTS_BASE, &resolve(COSTS_BASE, "leges 1")), "leges 1");
        assert_eq!(unresolve(COSTS_BASE, "https://other/x"), "https://other/x");
    }
}
