//! Per-kind field extraction for structured sections.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::Namespaces;
use crate::iri;
use crate::model::{Concept, CprmvRule, EditorState, Parameter, TemporalRule};
use crate::parser::extract::Extracted;
use crate::registry::{self, EntityKind};
use crate::vocab::{cpsv, cprmv, cv, dcat, dct, eli, foaf, ronl, schema, skos};

/// The accumulator of the section being read.
///
/// Singletons are written straight into the state; repeatable kinds are
/// built here and pushed when the statement ends.
#[derive(Debug)]
pub enum Record {
    /// Writes into `state.service`.
    Service,
    /// Writes into `state.organization`.
    Organization,
    /// Writes into `state.legal_resource`.
    LegalResource,
    /// Writes into `state.cost`.
    Cost,
    /// Writes into `state.output`.
    Output,
    /// Writes into `state.vendor_service`.
    VendorService,
    /// A temporal rule under construction.
    TemporalRule(TemporalRule),
    /// A parameter under construction.
    Parameter(Parameter),
    /// A CPRMV rule under construction.
    CprmvRule(CprmvRule),
    /// A concept under construction.
    Concept(Concept),
}

impl Record {
    /// Creates the accumulator for a structured kind. Opaque kinds have none.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        Some(match kind {
            EntityKind::Service => Record::Service,
            EntityKind::Organization => Record::Organization,
            EntityKind::LegalResource => Record::LegalResource,
            EntityKind::Cost => Record::Cost,
            EntityKind::Output => Record::Output,
            EntityKind::VendorService => Record::VendorService,
            EntityKind::TemporalRule => Record::TemporalRule(TemporalRule::default()),
            EntityKind::Parameter => Record::Parameter(Parameter::default()),
            EntityKind::CprmvRule => Record::CprmvRule(CprmvRule::default()),
            EntityKind::Concept => Record::Concept(Concept::default()),
            EntityKind::DecisionModel
            | EntityKind::DmnInput
            | EntityKind::DmnOutput
            | EntityKind::DecisionRule => return None,
        })
    }
}

/// Assigns `value` unless it is an extraction miss.
fn set(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

/// Applies one canonical predicate to the open record.
///
/// Returns false when the predicate means nothing for this kind.
pub fn apply(
    state: &mut EditorState,
    record: &mut Record,
    predicate: &str,
    object: &Extracted,
) -> bool {
    if predicate == "a" || predicate == "rdf:type" {
        return true;
    }
    let v = object.value.as_str();
    match record {
        Record::Service => {
            let service = &mut state.service;
            match predicate {
                dct::IDENTIFIER => set(&mut service.identifier, v),
                dct::TITLE => set(&mut service.name, v),
                dct::DESCRIPTION => set(&mut service.description, v),
                cv::THEMATIC_AREA => set(&mut service.thematic_area, v),
                cv::SECTOR => set(&mut service.sector, v),
                dcat::KEYWORD => set(&mut service.keywords, v),
                dct::LANGUAGE if !v.is_empty() => service.language = registry::language_code(v),
                dct::LANGUAGE => {}
                // Links are re-derived on export.
                cv::HAS_COMPETENT_AUTHORITY
                | cv::HAS_LEGAL_RESOURCE
                | cv::HAS_COST
                | cv::PRODUCES
                | cpsv::FOLLOWS => {}
                _ => return false,
            }
        }
        Record::Organization => {
            let org = &mut state.organization;
            match predicate {
                dct::IDENTIFIER => set(&mut org.identifier, v),
                skos::PREF_LABEL => set(&mut org.name, v),
                foaf::HOMEPAGE => set(&mut org.homepage, v),
                cv::SPATIAL => set(&mut org.spatial, v),
                foaf::LOGO => set(&mut org.logo, v),
                _ => return false,
            }
        }
        Record::LegalResource => {
            let legal = &mut state.legal_resource;
            match predicate {
                dct::IDENTIFIER => set(&mut legal.bwb_id, v),
                eli::VERSION => set(&mut legal.version, v),
                dct::TITLE => set(&mut legal.title, v),
                dct::DESCRIPTION => set(&mut legal.description, v),
                _ => return false,
            }
        }
        Record::Cost => {
            let cost = &mut state.cost;
            match predicate {
                dct::IDENTIFIER => set(&mut cost.identifier, v),
                cv::VALUE => set(&mut cost.value, v),
                cv::CURRENCY => set(&mut cost.currency, v),
                dct::DESCRIPTION => set(&mut cost.description, v),
                _ => return false,
            }
        }
        Record::Output => {
            let output = &mut state.output;
            match predicate {
                dct::IDENTIFIER => set(&mut output.identifier, v),
                dct::TITLE => set(&mut output.name, v),
                dct::DESCRIPTION => set(&mut output.description, v),
                dct::TYPE => set(&mut output.type_, v),
                _ => return false,
            }
        }
        Record::VendorService => {
            let vendor = &mut state.vendor_service;
            match predicate {
                ronl::VENDOR => set(&mut vendor.selected_vendor, v),
                ronl::CONTACT_NAME => set(&mut vendor.contact.name, v),
                ronl::CONTACT_EMAIL => set(&mut vendor.contact.email, v),
                ronl::CONTACT_PHONE => set(&mut vendor.contact.phone, v),
                ronl::CONTACT_WEBSITE => set(&mut vendor.contact.website, v),
                ronl::SERVICE_URL => set(&mut vendor.technical.service_url, v),
                ronl::LICENSE => set(&mut vendor.technical.license, v),
                ronl::ACCESS_TYPE => set(&mut vendor.technical.access_type, v),
                ronl::CERTIFICATION_STATUS => set(&mut vendor.certification.status, v),
                ronl::CERTIFIED_BY => set(&mut vendor.certification.certified_by, v),
                ronl::CERTIFIED_AT => set(&mut vendor.certification.certified_at, v),
                ronl::CERTIFICATION_NOTE => set(&mut vendor.certification.note, v),
                ronl::SERVICE_NOTES => set(&mut vendor.service_notes, v),
                _ => return false,
            }
        }
        Record::TemporalRule(rule) => match predicate {
            dct::IDENTIFIER => set(&mut rule.identifier, v),
            dct::TITLE => set(&mut rule.title, v),
            cprmv::EXTENDS => set(&mut rule.extends, v),
            ronl::VALID_FROM => set(&mut rule.valid_from, v),
            ronl::VALID_UNTIL => set(&mut rule.valid_until, v),
            ronl::CONFIDENCE_LEVEL => set(&mut rule.confidence_level, v),
            dct::DESCRIPTION => set(&mut rule.description, v),
            _ => return false,
        },
        Record::Parameter(param) => match predicate {
            skos::NOTATION => set(&mut param.notation, v),
            skos::PREF_LABEL => set(&mut param.label, v),
            schema::VALUE => set(&mut param.value, v),
            schema::UNIT_CODE => set(&mut param.unit, v),
            dct::DESCRIPTION => set(&mut param.description, v),
            ronl::VALID_FROM => set(&mut param.valid_from, v),
            ronl::VALID_UNTIL => set(&mut param.valid_until, v),
            _ => return false,
        },
        Record::CprmvRule(rule) => match predicate {
            cprmv::ID => set(&mut rule.rule_id, v),
            cprmv::RULESET_ID => set(&mut rule.ruleset_id, v),
            cprmv::DEFINITION => set(&mut rule.definition, v),
            cprmv::SITUATIE => set(&mut rule.situatie, v),
            cprmv::NORM => set(&mut rule.norm, v),
            cprmv::RULE_ID_PATH => set(&mut rule.rule_id_path, v),
            _ => return false,
        },
        Record::Concept(concept) => match predicate {
            dct::IDENTIFIER => set(&mut concept.variable_name, v),
            skos::PREF_LABEL => set(&mut concept.pref_label, v),
            skos::DEFINITION => set(&mut concept.definition, v),
            skos::NOTATION => set(&mut concept.notation, v),
            skos::EXACT_MATCH => set(&mut concept.exact_match, v),
            dct::TYPE => set(&mut concept.type_, v),
            _ => return false,
        },
    }
    true
}

/// Finishes a record at the end of its statement and stores it in `state`.
///
/// `subject` is the IRI exactly as written between the angle brackets.
pub fn flush(state: &mut EditorState, record: Record, subject: &str, ns: &Namespaces) {
    match record {
        Record::Service => {
            if state.service.identifier.is_empty() {
                state.service.identifier = iri::unresolve(&ns.services, subject);
            }
        }
        Record::Organization => {
            if state.organization.identifier.is_empty() {
                state.organization.identifier = iri::unresolve(&ns.organizations, subject);
            }
        }
        Record::LegalResource => {
            if state.legal_resource.bwb_id.is_empty() {
                state.legal_resource.bwb_id = iri::unresolve(&ns.legal, subject);
            }
        }
        Record::Cost => {
            if state.cost.identifier.is_empty() {
                state.cost.identifier = iri::unresolve(&ns.costs, subject);
            }
        }
        Record::Output => {
            if state.output.identifier.is_empty() {
                state.output.identifier = iri::unresolve(&ns.outputs, subject);
            }
        }
        Record::VendorService => {}
        Record::TemporalRule(mut rule) => {
            let position = state.temporal_rules.len() + 1;
            let uri = iri::decode(subject);
            if uri != format!("{}rule{}", ns.rules, position) {
                rule.uri = uri;
            }
            rule.id = position.to_string();
            state.temporal_rules.push(rule);
        }
        Record::Parameter(mut param) => {
            param.id = (state.parameters.len() + 1).to_string();
            state.parameters.push(param);
        }
        Record::CprmvRule(mut rule) => {
            rule.id = (state.cprmv_rules.len() + 1).to_string();
            state.cprmv_rules.push(rule);
        }
        Record::Concept(mut concept) => {
            let uri = iri::decode(subject);
            if let Some((link_type, link)) = dmn_link(&uri) {
                concept.linked_to_type = link_type;
                concept.linked_to = link;
            }
            if uri != concept.derived_uri(&ns.concepts, &state.service.slug()) {
                concept.uri = uri;
            }
            concept.id = (state.concepts.len() + 1).to_string();
            state.concepts.push(concept);
        }
    }
}

/// Reads `(linkedToType, linkedTo)` from a concept URI ending in `/dmn/<type>/<n>`.
#[must_use]
pub fn dmn_link(uri: &str) -> Option<(String, String)> {
    static LINK: OnceLock<Option<Regex>> = OnceLock::new();
    let re = LINK
        .get_or_init(|| Regex::new(r"/dmn/(input|output)/(\d+)$").ok())
        .as_ref()?;
    let caps = re.captures(uri)?;
    let link_type = caps.get(1)?.as_str();
    let n = caps.get(2)?.as_str();
    Some((link_type.to_string(), format!("{link_type}/{n}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn lit(value: &str) -> Extracted {
        Extracted {
            value: value.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn misses_never_overwrite() {
        let mut state = EditorState::default();
        let mut record = Record::Service;
        assert!(apply(&mut state, &mut record, dct::TITLE, &lit("AOW")));
        assert!(apply(&mut state, &mut record, dct::TITLE, &lit("")));
        assert_eq!(state.service.name, "AOW");
    }

    #[test]
    fn unknown_predicates_are_reported() {
        let mut state = EditorState::default();
        let mut record = Record::Cost;
        assert!(!apply(&mut state, &mut record, "ex:price", &lit("3")));
    }

    #[test]
    fn links_are_recognized_but_not_stored() {
        let mut state = EditorState::default();
        let mut record = Record::Service;
        assert!(apply(
            &mut state,
            &mut record,
            cv::HAS_COMPETENT_AUTHORITY,
            &lit("https://regels.overheid.nl/organizations/svb")
        ));
        assert_eq!(state.organization, Default::default());
    }

    #[test]
    fn index_based_rule_uri_is_elided() {
        let ns = Namespaces::default();
        let mut state = EditorState::default();
        flush(
            &mut state,
            Record::TemporalRule(TemporalRule::default()),
            "https://regels.overheid.nl/rules/rule1",
            &ns,
        );
        flush(
            &mut state,
            Record::TemporalRule(TemporalRule::default()),
            "https://regels.overheid.nl/rules/explicit",
            &ns,
        );
        assert_eq!(state.temporal_rules[0].uri, "");
        assert_eq!(state.temporal_rules[0].id, "1");
        assert_eq!(state.temporal_rules[1].uri, "https://regels.overheid.nl/rules/explicit");
    }

    #[test]
    fn identity_falls_back_to_subject() {
        let ns = Namespaces::default();
        let mut state = EditorState::default();
        let cost = "https://regels.overheid.nl/costs/leges%202024";
        flush(&mut state, Record::Cost, cost, &ns);
        assert_eq!(state.cost.identifier, "leges 2024");
        let organization = "https://org.example/gemeente";
        flush(&mut state, Record::Organization, organization, &ns);
        assert_eq!(state.organization.identifier, "https://org.example/gemeente");
    }

    #[test]
    fn concept_links_come_from_the_uri() {
        assert_eq!(
            dmn_link("https://regels.overheid.nl/concepts/aow/dmn/input/2"),
            Some(("input".to_string(), "input/2".to_string()))
        );
        assert_eq!(dmn_link("https://regels.overheid.nl/concepts/leeftijd"), None);
    }

    #[test]
    fn derived_concept_uris_are_elided() {
        let ns = Namespaces::default();
        let mut state = EditorState::default();
        state.service.identifier = "aow".to_string();
        for (name, subject) in [
            ("leeftijd", "https://regels.overheid.nl/concepts/leeftijd"),
            ("jaar", "https://regels.overheid.nl/concepts/aow/dmn/input/1"),
            ("land", "https://begrippen.example/land"),
            ("x", "https://regels.overheid.nl/concepts/other/dmn/input/1"),
        ] {
            let concept = Concept {
                variable_name: name.to_string(),
                ..Default::default()
            };
            flush(&mut state, Record::Concept(concept), subject, &ns);
        }

        let uris: Vec<_> = state.concepts.iter().map(|c| c.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec![
                "",
                "",
                "https://begrippen.example/land",
                "https://regels.overheid.nl/concepts/other/dmn/input/1",
            ]
        );
        assert_eq!(state.concepts[1].linked_to, "input/1");
        assert_eq!(state.concepts[3].linked_to, "input/1");
    }
}
