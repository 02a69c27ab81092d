//! Statement builder.
//!
//! Every subject block the generator writes goes through [`Statement`]: empty
//! values are dropped when they are added, predicates are normalized through
//! the registry, and a statement without properties renders as nothing.

use std::fmt::Write as _;

use crate::iri;
use crate::literal::{self, Xsd};
use crate::registry::{self, EntityKind};

/// One `<subject> a Type ; ... .` block under construction.
#[derive(Debug, Clone)]
pub struct Statement {
    subject: String,
    type_name: &'static str,
    properties: Vec<(String, String)>,
}

impl Statement {
    /// Starts a statement for `subject`, typed with the canonical type of `kind`.
    #[must_use]
    pub fn new(subject: &str, kind: EntityKind) -> Self {
        Self {
            subject: iri::encode_iri(subject).into_owned(),
            type_name: registry::canonical_type(kind),
            properties: Vec::new(),
        }
    }

    fn push(&mut self, predicate: &str, object: String) -> &mut Self {
        self.properties
            .push((registry::normalize_property(predicate), object));
        self
    }

    /// Adds a plain or language-tagged string literal.
    pub fn literal(&mut self, predicate: &str, value: &str, language: Option<&str>) -> &mut Self {
        if value.is_empty() {
            return self;
        }
        self.push(predicate, literal::quoted(value, language))
    }

    /// Adds an XSD-typed literal.
    pub fn typed(&mut self, predicate: &str, value: &str, datatype: Xsd) -> &mut Self {
        if value.is_empty() {
            return self;
        }
        self.push(predicate, literal::typed(value, datatype))
    }

    /// Adds an `<IRI>` object.
    pub fn iri(&mut self, predicate: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            return self;
        }
        self.push(predicate, format!("<{}>", iri::encode_iri(value)))
    }

    /// Adds an `<IRI>` when `value` is absolute, a plain literal otherwise.
    pub fn iri_or_literal(&mut self, predicate: &str, value: &str) -> &mut Self {
        if iri::is_absolute(value) {
            self.iri(predicate, value)
        } else {
            self.literal(predicate, value, None)
        }
    }

    /// Whether any property was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Appends the statement to `out`. Returns false, writing nothing, when it
    /// has no properties.
    pub fn render(&self, out: &mut String) -> bool {
        let Some(((last_predicate, last_object), rest)) = self.properties.split_last() else {
            return false;
        };
        let _ = writeln!(out, "<{}> a {} ;", self.subject, self.type_name);
        for (predicate, object) in rest {
            let _ = writeln!(out, "    {predicate} {object} ;");
        }
        let _ = writeln!(out, "    {last_predicate} {last_object} .");
        out.push('\n');
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const AOW: &str = "https://regels.overheid.nl/services/aow";

    #[test]
    fn empty_values_are_dropped() {
        let mut st = Statement::new(AOW, EntityKind::Service);
        st.literal("dct:title", "", Some("nl"))
            .typed("ronl:validFrom", "", Xsd::Date)
            .iri("cv:hasCost", "");
        let mut out = String::new();
        assert!(st.is_empty());
        assert!(!st.render(&mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn last_property_closes_the_statement() {
        let mut st = Statement::new(AOW, EntityKind::Service);
        st.literal("dct:identifier", "aow", None)
            .literal("dct:title", "AOW", Some("nl"));
        let mut out = String::new();
        assert!(st.render(&mut out));
        assert_eq!(
            out,
            "<https://regels.overheid.nl/services/aow> a cpsv:PublicService ;\n    \
             dct:identifier \"aow\" ;\n    dct:title \"AOW\"@nl .\n\n"
        );
    }

    #[test]
    fn zero_is_not_empty() {
        let mut st = Statement::new("https://regels.overheid.nl/costs/leges", EntityKind::Cost);
        st.typed("cv:value", "0", Xsd::Decimal);
        let mut out = String::new();
        assert!(st.render(&mut out));
        assert!(out.contains("cv:value \"0\"^^xsd:decimal ."));
    }

    #[test]
    fn aliases_are_normalized() {
        let mut st = Statement::new(
            "https://regels.overheid.nl/organizations/svb",
            EntityKind::Organization,
        );
        st.literal("foaf:name", "SVB", Some("nl"));
        let mut out = String::new();
        st.render(&mut out);
        assert!(out.contains("skos:prefLabel \"SVB\"@nl ."));
    }

    #[test]
    fn subjects_and_objects_are_encoded() {
        let mut st = Statement::new("https://x.org/a b", EntityKind::Concept);
        st.iri_or_literal("skos:exactMatch", "https://y.org/c d")
            .iri_or_literal("dct:type", "plain");
        let mut out = String::new();
        st.render(&mut out);
        assert!(out.starts_with("<https://x.org/a%20b> a skos:Concept ;"));
        assert!(out.contains("skos:exactMatch <https://y.org/c%20d> ;"));
        assert!(out.contains("dct:type \"plain\" ."));
    }
}
