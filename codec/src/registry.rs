//! Entity type registry.
//!
//! The single lookup table both directions consult: which `a <Type>` line
//! opens which entity kind, which predicate aliases collapse onto which
//! canonical name, and which prefixes a document declares.
//!
//! Type detection is an ordered list of [`TypeMatcher`]s evaluated first to
//! last. Decision-model types come before the generic kinds because
//! `cpsv:Output` (a decision output) and `cv:Output` (a service deliverable)
//! must never be confused.

use std::sync::OnceLock;

use regex::Regex;

use crate::iri::ns;

/// The structured and opaque entity kinds the codec knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `cprmv:DecisionModel` (opaque).
    DecisionModel,
    /// `cpsv:Input` (opaque).
    DmnInput,
    /// `cpsv:Output` (opaque).
    DmnOutput,
    /// `cprmv:DecisionRule` (opaque).
    DecisionRule,
    /// `cpsv:PublicService`.
    Service,
    /// `cv:PublicOrganisation`.
    Organization,
    /// `eli:LegalResource`.
    LegalResource,
    /// `cpsv:Rule`.
    TemporalRule,
    /// `ronl:ParameterWaarde`.
    Parameter,
    /// `cprmv:Rule`.
    CprmvRule,
    /// `cv:Cost`.
    Cost,
    /// `cv:Output`.
    Output,
    /// `skos:Concept`.
    Concept,
    /// `ronl:VendorService`.
    VendorService,
}

impl EntityKind {
    /// Returns true for the kinds captured as an opaque DMN block.
    #[must_use]
    pub fn is_dmn(self) -> bool {
        matches!(
            self,
            EntityKind::DecisionModel
                | EntityKind::DmnInput
                | EntityKind::DmnOutput
                | EntityKind::DecisionRule
        )
    }

    /// Short camelCase tag used in logs and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::DecisionModel => "decisionModel",
            EntityKind::DmnInput => "dmnInput",
            EntityKind::DmnOutput => "dmnOutput",
            EntityKind::DecisionRule => "decisionRule",
            EntityKind::Service => "service",
            EntityKind::Organization => "organization",
            EntityKind::LegalResource => "legalResource",
            EntityKind::TemporalRule => "temporalRule",
            EntityKind::Parameter => "parameter",
            EntityKind::CprmvRule => "cprmvRule",
            EntityKind::Cost => "cost",
            EntityKind::Output => "output",
            EntityKind::Concept => "concept",
            EntityKind::VendorService => "vendorService",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the ordered detection list: a prefixed type name and the kind it opens.
#[derive(Debug, Clone, Copy)]
pub struct TypeMatcher {
    /// Prefixed type name as written after `a`, e.g. `cpsv:Output`.
    pub type_name: &'static str,
    /// Kind the type opens.
    pub kind: EntityKind,
}

const fn matcher(type_name: &'static str, kind: EntityKind) -> TypeMatcher {
    TypeMatcher { type_name, kind }
}

/// Detection order. Earlier entries win; decision-model types first.
pub const TYPE_MATCHERS: &[TypeMatcher] = &[
    matcher("cprmv:DecisionModel", EntityKind::DecisionModel),
    matcher("ronl:DecisionModel", EntityKind::DecisionModel),
    matcher("cpsv:Input", EntityKind::DmnInput),
    matcher("cpsv:Output", EntityKind::DmnOutput),
    matcher("cprmv:DecisionRule", EntityKind::DecisionRule),
    matcher("ronl:DecisionRule", EntityKind::DecisionRule),
    matcher("cpsv:PublicService", EntityKind::Service),
    matcher("cv:PublicOrganisation", EntityKind::Organization),
    matcher("org:Organization", EntityKind::Organization),
    matcher("foaf:Organization", EntityKind::Organization),
    matcher("eli:LegalResource", EntityKind::LegalResource),
    matcher("cpsv:Rule", EntityKind::TemporalRule),
    matcher("ronl:TemporalRule", EntityKind::TemporalRule),
    matcher("ronl:ParameterWaarde", EntityKind::Parameter),
    matcher("cprmv:Rule", EntityKind::CprmvRule),
    matcher("cv:Cost", EntityKind::Cost),
    matcher("cv:Output", EntityKind::Output),
    matcher("skos:Concept", EntityKind::Concept),
    matcher("ronl:VendorService", EntityKind::VendorService),
];

/// Prefix declarations every generated document carries, in output order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("cpsv", ns::CPSV),
    ("cv", ns::CV),
    ("dct", ns::DCT),
    ("dcat", ns::DCAT),
    ("eli", ns::ELI),
    ("foaf", ns::FOAF),
    ("org", ns::ORG),
    ("ronl", ns::RONL),
    ("skos", ns::SKOS),
    ("schema", ns::SCHEMA),
    ("xsd", ns::XSD),
    ("cprmv", ns::CPRMV),
];

/// Exact predicate aliases: `(alias, canonical)`.
const PROPERTY_ALIASES: &[(&str, &str)] = &[
    ("foaf:name", "skos:prefLabel"),
    ("rdfs:label", "skos:prefLabel"),
    ("cprmv:validFrom", "ronl:validFrom"),
    ("cprmv:validUntil", "ronl:validUntil"),
    ("ronl:implements", "cprmv:implements"),
    ("ronl:implementedBy", "cprmv:implementedBy"),
    ("ronl:extends", "cprmv:extends"),
    ("ronl:confidence", "ronl:confidenceLevel"),
    ("cprmv:confidenceLevel", "ronl:confidenceLevel"),
    ("schema:unitText", "schema:unitCode"),
    ("dct:spatial", "cv:spatial"),
    ("cv:hasValue", "cv:value"),
];

/// Prefix aliases: `(alias prefix, canonical prefix)`.
const PREFIX_ALIASES: &[(&str, &str)] = &[("dcterms:", "dct:"), ("cpsvap:", "cv:")];

/// Synthetic comment lines the generator writes above each section.
pub const SECTION_HEADERS: &[&str] = &[
    "# Public Service",
    "# Organization",
    "# Legal Resource",
    "# Temporal Rules",
    "# Parameters",
    "# Cost",
    "# Output",
    "# CPRMV Rules",
    "# DMN Decision Model",
    "# Concepts",
    "# Vendor Service",
];

/// Returns true when `line` is one of the generator's own section headers.
#[must_use]
pub fn is_section_header(line: &str) -> bool {
    let line = line.trim_end();
    SECTION_HEADERS.contains(&line)
}

fn type_patterns() -> &'static [(Regex, EntityKind)] {
    static PATTERNS: OnceLock<Vec<(Regex, EntityKind)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        TYPE_MATCHERS
            .iter()
            .filter_map(|m| {
                // `a`/`rdf:type`, optionally earlier types in a comma list, then
                // the exact type followed by a terminator.
                let pattern = format!(
                    r"(?:^|\s)(?:a|rdf:type)\s+(?:[\w:<>/#.-]+\s*,\s*)*{}(?:[\s;.,]|$)",
                    regex::escape(m.type_name)
                );
                match Regex::new(&pattern) {
                    Ok(re) => Some((re, m.kind)),
                    Err(err) => {
                        tracing::error!(type_name = m.type_name, %err, "invalid type pattern");
                        None
                    }
                }
            })
            .collect()
    })
}

/// Classifies a Turtle line by the type it asserts.
///
/// Returns `None` for property lines, comments, blanks and unknown types.
/// Text inside string literals is ignored.
#[must_use]
pub fn detect_entity_type(line: &str) -> Option<EntityKind> {
    let code = crate::parser::scan::mask_literals(line);
    if code.trim_start().starts_with('#') {
        return None;
    }
    type_patterns()
        .iter()
        .find(|(re, _)| re.is_match(&code))
        .map(|(_, kind)| *kind)
}

/// Maps a predicate alias onto its canonical name; unknown predicates pass through.
#[must_use]
pub fn normalize_property(predicate: &str) -> String {
    if let Some((_, canonical)) = PROPERTY_ALIASES.iter().find(|(alias, _)| *alias == predicate) {
        return (*canonical).to_string();
    }
    for (alias, canonical) in PREFIX_ALIASES {
        if let Some(local) = predicate.strip_prefix(alias) {
            return normalize_property(&format!("{canonical}{local}"));
        }
    }
    predicate.to_string()
}

/// Returns the prefixed type the generator writes for `kind`.
#[must_use]
pub fn canonical_type(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::DecisionModel => "cprmv:DecisionModel",
        EntityKind::DmnInput => "cpsv:Input",
        EntityKind::DmnOutput => "cpsv:Output",
        EntityKind::DecisionRule => "cprmv:DecisionRule",
        EntityKind::Service => "cpsv:PublicService",
        EntityKind::Organization => "cv:PublicOrganisation",
        EntityKind::LegalResource => "eli:LegalResource",
        EntityKind::TemporalRule => "cpsv:Rule",
        EntityKind::Parameter => "ronl:ParameterWaarde",
        EntityKind::CprmvRule => "cprmv:Rule",
        EntityKind::Cost => "cv:Cost",
        EntityKind::Output => "cv:Output",
        EntityKind::Concept => "skos:Concept",
        EntityKind::VendorService => "ronl:VendorService",
    }
}

/// Language codes with an EU authority table entry: `(code, authority code)`.
const LANGUAGES: &[(&str, &str)] = &[("nl", "NLD"), ("en", "ENG"), ("de", "DEU"), ("fr", "FRA")];

/// Returns the EU language authority IRI for a language code.
///
/// Codes without a table entry are appended as written, so that
/// [`language_code`] gives them back unchanged, case included.
#[must_use]
pub fn language_iri(code: &str) -> String {
    let authority = LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, a)| *a);
    format!("{}{}", ns::EU_LANGUAGE, authority)
}

/// Inverse of [`language_iri`].
#[must_use]
pub fn language_code(value: &str) -> String {
    let authority = value.rsplit('/').next().unwrap_or(value);
    LANGUAGES
        .iter()
        .find(|(_, a)| *a == authority)
        .map_or(authority, |(c, _)| *c)
        .to_string()
}
