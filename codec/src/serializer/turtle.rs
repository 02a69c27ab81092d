//! Turtle 1.1 generator for the editor state.
//!
//! Produces the prefix block followed by every non-empty section in a fixed
//! order: service, organization, legal resource, temporal rules, parameters,
//! cost, output, CPRMV rules, decision model, concepts, vendor service.

use crate::config::CodecConfig;
use crate::iri;
use crate::literal::Xsd;
use crate::model::{Concept, EditorState, TemporalRule};
use crate::registry::{self, EntityKind};
use crate::serializer::dmn;
use crate::serializer::statement::Statement;
use crate::vocab::{cpsv, cprmv, cv, dcat, dct, eli, foaf, ronl, schema, skos};

/// Serializes `state` with the default configuration.
#[must_use]
pub fn to_turtle(state: &EditorState) -> String {
    to_turtle_with(state, &CodecConfig::default())
}

/// Serializes `state` with the namespace bases and default language of `config`.
#[must_use]
pub fn to_turtle_with(state: &EditorState, config: &CodecConfig) -> String {
    let ctx = Context::new(state, config);
    let mut out = String::with_capacity(4 * 1024);

    for (prefix, namespace) in registry::PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
    }
    out.push('\n');

    let rules = ctx.temporal_rules();

    section(&mut out, "# Public Service", [service(&ctx, &rules)]);
    section(&mut out, "# Organization", [organization(&ctx)]);
    section(&mut out, "# Legal Resource", [legal_resource(&ctx)]);
    section(
        &mut out,
        "# Temporal Rules",
        rules.iter().map(|(uri, rule)| temporal_rule(&ctx, uri, rule)),
    );
    section(&mut out, "# Parameters", parameters(&ctx));
    section(&mut out, "# Cost", [cost(&ctx)]);
    section(&mut out, "# Output", [output(&ctx)]);
    section(&mut out, "# CPRMV Rules", cprmv_rules(&ctx));
    if let Some(state_dmn) = &state.dmn {
        dmn::write(
            &mut out,
            state_dmn,
            &ctx.service_child("dmn"),
            ctx.service_uri().as_deref(),
            ctx.language,
        );
    }
    section(
        &mut out,
        "# Concepts",
        state.concepts.iter().map(|c| concept(&ctx, c)),
    );
    section(&mut out, "# Vendor Service", [vendor_service(&ctx)]);

    out
}

/// Writes `header` and every present statement, or nothing when none renders.
fn section<I>(out: &mut String, header: &str, statements: I)
where
    I: IntoIterator<Item = Option<Statement>>,
{
    let mut body = String::new();
    for statement in statements.into_iter().flatten() {
        statement.render(&mut body);
    }
    if !body.is_empty() {
        out.push_str(header);
        out.push('\n');
        out.push_str(&body);
    }
}

/// Derived values shared by every section.
struct Context<'a> {
    state: &'a EditorState,
    config: &'a CodecConfig,
    language: &'a str,
    service_slug: String,
}

impl<'a> Context<'a> {
    fn new(state: &'a EditorState, config: &'a CodecConfig) -> Self {
        let language = if state.service.language.is_empty() {
            config.default_language.as_str()
        } else {
            state.service.language.as_str()
        };
        Self {
            state,
            config,
            language,
            service_slug: state.service.slug(),
        }
    }

    fn lang(&self) -> Option<&str> {
        Some(self.language)
    }

    fn service_uri(&self) -> Option<String> {
        let id = &self.state.service.identifier;
        if id.is_empty() {
            None
        } else if iri::is_absolute(id) {
            Some(id.clone())
        } else {
            Some(format!("{}{}", self.config.namespaces.services, self.service_slug))
        }
    }

    /// `services/<slug>/<child>`, the parent of DMN and vendor subjects.
    fn service_child(&self, child: &str) -> String {
        format!("{}{}/{}", self.config.namespaces.services, self.service_slug, child)
    }

    fn organization_uri(&self) -> Option<String> {
        let id = &self.state.organization.identifier;
        (!id.is_empty()).then(|| iri::resolve(&self.config.namespaces.organizations, id))
    }

    fn legal_resource_uri(&self) -> Option<String> {
        let id = &self.state.legal_resource.bwb_id;
        (!id.is_empty()).then(|| iri::resolve(&self.config.namespaces.legal, id))
    }

    fn cost_uri(&self) -> Option<String> {
        let id = &self.state.cost.identifier;
        (!id.is_empty()).then(|| iri::resolve(&self.config.namespaces.costs, id))
    }

    fn output_uri(&self) -> Option<String> {
        let id = &self.state.output.identifier;
        (!id.is_empty()).then(|| iri::resolve(&self.config.namespaces.outputs, id))
    }

    /// Emitted temporal rules with their subjects, numbered among themselves.
    fn temporal_rules(&self) -> Vec<(String, &'a TemporalRule)> {
        let rules = &self.config.namespaces.rules;
        self.state
            .temporal_rules
            .iter()
            .filter(|rule| rule.has_content())
            .enumerate()
            .map(|(index, rule)| {
                let uri = if rule.uri.is_empty() {
                    format!("{}rule{}", rules, index + 1)
                } else {
                    iri::resolve(rules, &rule.uri)
                };
                (uri, rule)
            })
            .collect()
    }
}

fn service(ctx: &Context<'_>, rules: &[(String, &TemporalRule)]) -> Option<Statement> {
    let uri = ctx.service_uri()?;
    let service = &ctx.state.service;
    let mut st = Statement::new(&uri, EntityKind::Service);
    st.literal(dct::IDENTIFIER, &service.identifier, None)
        .literal(dct::TITLE, &service.name, ctx.lang())
        .literal(dct::DESCRIPTION, &service.description, ctx.lang())
        .iri_or_literal(cv::THEMATIC_AREA, &service.thematic_area)
        .iri_or_literal(cv::SECTOR, &service.sector)
        .literal(dcat::KEYWORD, &service.keywords, ctx.lang());
    if !service.language.is_empty() {
        st.iri(dct::LANGUAGE, &registry::language_iri(&service.language));
    }
    st.iri(cv::HAS_COMPETENT_AUTHORITY, &ctx.organization_uri().unwrap_or_default())
        .iri(cv::HAS_LEGAL_RESOURCE, &ctx.legal_resource_uri().unwrap_or_default());
    for (rule_uri, _) in rules {
        st.iri(cpsv::FOLLOWS, rule_uri);
    }
    st.iri(cv::HAS_COST, &ctx.cost_uri().unwrap_or_default())
        .iri(cv::PRODUCES, &ctx.output_uri().unwrap_or_default());
    Some(st)
}

fn organization(ctx: &Context<'_>) -> Option<Statement> {
    let uri = ctx.organization_uri()?;
    let org = &ctx.state.organization;
    let mut st = Statement::new(&uri, EntityKind::Organization);
    st.literal(dct::IDENTIFIER, &org.identifier, None)
        .literal(skos::PREF_LABEL, &org.name, ctx.lang())
        .iri_or_literal(foaf::HOMEPAGE, &org.homepage)
        .iri_or_literal(cv::SPATIAL, &org.spatial)
        .iri_or_literal(foaf::LOGO, &org.logo);
    Some(st)
}

fn legal_resource(ctx: &Context<'_>) -> Option<Statement> {
    let uri = ctx.legal_resource_uri()?;
    let legal = &ctx.state.legal_resource;
    let mut st = Statement::new(&uri, EntityKind::LegalResource);
    st.literal(dct::IDENTIFIER, &legal.bwb_id, None)
        .literal(eli::VERSION, &legal.version, None)
        .literal(dct::TITLE, &legal.title, ctx.lang())
        .literal(dct::DESCRIPTION, &legal.description, ctx.lang());
    Some(st)
}

fn temporal_rule(ctx: &Context<'_>, uri: &str, rule: &TemporalRule) -> Option<Statement> {
    let mut st = Statement::new(uri, EntityKind::TemporalRule);
    st.literal(dct::IDENTIFIER, &rule.identifier, None)
        .literal(dct::TITLE, &rule.title, ctx.lang())
        .iri_or_literal(cprmv::EXTENDS, &rule.extends)
        .typed(ronl::VALID_FROM, &rule.valid_from, Xsd::Date)
        .typed(ronl::VALID_UNTIL, &rule.valid_until, Xsd::Date)
        .literal(ronl::CONFIDENCE_LEVEL, &rule.confidence_level, None)
        .literal(dct::DESCRIPTION, &rule.description, ctx.lang());
    Some(st)
}

fn parameters(ctx: &Context<'_>) -> Vec<Option<Statement>> {
    ctx.state
        .parameters
        .iter()
        .filter(|param| !param.notation.is_empty())
        .enumerate()
        .map(|(index, param)| {
            let uri = format!(
                "{}{}/param-{}",
                ctx.config.namespaces.parameters,
                ctx.service_slug,
                index + 1
            );
            let mut st = Statement::new(&uri, EntityKind::Parameter);
            st.literal(skos::NOTATION, &param.notation, None)
                .literal(skos::PREF_LABEL, &param.label, ctx.lang())
                .typed(schema::VALUE, &param.value, Xsd::Decimal)
                .literal(schema::UNIT_CODE, &param.unit, None)
                .literal(dct::DESCRIPTION, &param.description, ctx.lang())
                .typed(ronl::VALID_FROM, &param.valid_from, Xsd::Date)
                .typed(ronl::VALID_UNTIL, &param.valid_until, Xsd::Date);
            Some(st)
        })
        .collect()
}

fn cost(ctx: &Context<'_>) -> Option<Statement> {
    let uri = ctx.cost_uri()?;
    let cost = &ctx.state.cost;
    let mut st = Statement::new(&uri, EntityKind::Cost);
    st.literal(dct::IDENTIFIER, &cost.identifier, None)
        .typed(cv::VALUE, &cost.value, Xsd::Decimal)
        .iri_or_literal(cv::CURRENCY, &cost.currency)
        .literal(dct::DESCRIPTION, &cost.description, ctx.lang());
    Some(st)
}

fn output(ctx: &Context<'_>) -> Option<Statement> {
    let uri = ctx.output_uri()?;
    let output = &ctx.state.output;
    let mut st = Statement::new(&uri, EntityKind::Output);
    st.literal(dct::IDENTIFIER, &output.identifier, None)
        .literal(dct::TITLE, &output.name, ctx.lang())
        .literal(dct::DESCRIPTION, &output.description, ctx.lang())
        .iri_or_literal(dct::TYPE, &output.type_);
    Some(st)
}

fn cprmv_rules(ctx: &Context<'_>) -> Vec<Option<Statement>> {
    ctx.state
        .cprmv_rules
        .iter()
        .map(|rule| {
            if rule.rule_id.is_empty() {
                return None;
            }
            let local = if rule.ruleset_id.is_empty() {
                iri::encode_component(&rule.rule_id)
            } else {
                format!(
                    "{}_{}",
                    iri::encode_component(&rule.ruleset_id),
                    iri::encode_component(&rule.rule_id)
                )
            };
            let uri = format!("{}{}", ctx.config.namespaces.rules, local);
            let mut st = Statement::new(&uri, EntityKind::CprmvRule);
            st.literal(cprmv::ID, &rule.rule_id, None)
                .literal(cprmv::RULESET_ID, &rule.ruleset_id, None)
                .literal(cprmv::DEFINITION, &rule.definition, ctx.lang())
                .literal(cprmv::SITUATIE, &rule.situatie, ctx.lang())
                .literal(cprmv::NORM, &rule.norm, ctx.lang())
                .literal(cprmv::RULE_ID_PATH, &rule.rule_id_path, None);
            Some(st)
        })
        .collect()
}

fn concept(ctx: &Context<'_>, concept: &Concept) -> Option<Statement> {
    if concept.variable_name.is_empty() && concept.pref_label.is_empty() {
        return None;
    }
    let uri = if iri::is_absolute(&concept.uri) {
        concept.uri.clone()
    } else {
        concept.derived_uri(&ctx.config.namespaces.concepts, &ctx.service_slug)
    };
    let mut st = Statement::new(&uri, EntityKind::Concept);
    st.literal(dct::IDENTIFIER, &concept.variable_name, None)
        .literal(skos::PREF_LABEL, &concept.pref_label, ctx.lang())
        .literal(skos::DEFINITION, &concept.definition, ctx.lang())
        .literal(skos::NOTATION, &concept.notation, None)
        .iri_or_literal(skos::EXACT_MATCH, &concept.exact_match)
        .iri_or_literal(dct::TYPE, &concept.type_);
    Some(st)
}

fn vendor_service(ctx: &Context<'_>) -> Option<Statement> {
    let vendor = &ctx.state.vendor_service;
    if vendor.selected_vendor.is_empty() {
        return None;
    }
    let mut st = Statement::new(&ctx.service_child("vendor"), EntityKind::VendorService);
    st.iri_or_literal(ronl::VENDOR, &vendor.selected_vendor)
        .literal(ronl::CONTACT_NAME, &vendor.contact.name, None)
        .literal(ronl::CONTACT_EMAIL, &vendor.contact.email, None)
        .literal(ronl::CONTACT_PHONE, &vendor.contact.phone, None)
        .iri_or_literal(ronl::CONTACT_WEBSITE, &vendor.contact.website)
        .iri_or_literal(ronl::SERVICE_URL, &vendor.technical.service_url)
        .literal(ronl::LICENSE, &vendor.technical.license, None)
        .literal(ronl::ACCESS_TYPE, &vendor.technical.access_type, None)
        .literal(ronl::CERTIFICATION_STATUS, &vendor.certification.status, None)
        .literal(ronl::CERTIFIED_BY, &vendor.certification.certified_by, None)
        .typed(ronl::CERTIFIED_AT, &vendor.certification.certified_at, Xsd::Date)
        .literal(ronl::CERTIFICATION_NOTE, &vendor.certification.note, ctx.lang())
        .literal(ronl::SERVICE_NOTES, &vendor.service_notes, ctx.lang());
    Some(st)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::model::{Parameter, Service};

    fn with_service(identifier: &str) -> EditorState {
        EditorState {
            service: Service {
                identifier: identifier.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn every_prefix_is_declared() {
        let turtle = to_turtle(&EditorState::default());
        for prefix in [
            "cpsv", "cv", "dct", "dcat", "eli", "foaf", "org", "ronl", "skos", "schema", "xsd",
            "cprmv",
        ] {
            assert!(
                turtle.contains(&format!("@prefix {prefix}: <")),
                "missing prefix declaration for '{prefix}'"
            );
        }
    }

    #[test]
    fn empty_state_is_prefixes_only() {
        let turtle = to_turtle(&EditorState::default());
        assert!(turtle.lines().all(|l| l.is_empty() || l.starts_with("@prefix")));
    }

    #[test]
    fn output_is_deterministic() {
        let mut state = with_service("aow");
        state.parameters.push(Parameter {
            notation: "MAX".to_string(),
            value: "12.5".to_string(),
            ..Default::default()
        });
        assert_eq!(to_turtle(&state), to_turtle(&state));
    }

    #[test]
    fn sections_follow_the_fixed_order() {
        let mut state = with_service("aow");
        state.organization.identifier = "svb".to_string();
        state.cost.identifier = "leges".to_string();
        state.vendor_service.selected_vendor = "https://vendors.example/acme".to_string();
        let turtle = to_turtle(&state);
        let service = turtle.find("# Public Service").unwrap();
        let org = turtle.find("# Organization").unwrap();
        let cost = turtle.find("# Cost").unwrap();
        let vendor = turtle.find("# Vendor Service").unwrap();
        assert!(service < org && org < cost && cost < vendor);
    }

    #[test]
    fn links_are_rederived_from_targets() {
        let mut state = with_service("aow");
        state.organization.identifier = "svb".to_string();
        state.legal_resource.bwb_id = "BWBR0002221".to_string();
        let turtle = to_turtle(&state);
        assert!(turtle.contains(
            "cv:hasCompetentAuthority <https://regels.overheid.nl/organizations/svb> ;"
        ));
        assert!(turtle.contains("cv:hasLegalResource <https://wetten.overheid.nl/BWBR0002221> ."));
    }

    #[test]
    fn language_selects_tags_and_authority() {
        let mut state = with_service("aow");
        state.service.name = "Old age pension".to_string();
        state.service.language = "en".to_string();
        let turtle = to_turtle(&state);
        assert!(turtle.contains("dct:title \"Old age pension\"@en ;"));
        assert!(turtle.contains(
            "dct:language <http://publications.europa.eu/resource/authority/language/ENG> ."
        ));
    }

    #[test]
    fn parameters_without_service_use_the_fallback_slug() {
        let mut state = EditorState::default();
        state.parameters.push(Parameter {
            notation: "MAX".to_string(),
            ..Default::default()
        });
        let turtle = to_turtle(&state);
        assert!(turtle.contains(
            "<https://regels.overheid.nl/parameters/unnamed/param-1> a ronl:ParameterWaarde ;"
        ));
    }

    #[test]
    fn absolute_service_identifier_is_the_subject() {
        let turtle = to_turtle(&with_service("https://data.example.org/svc/1"));
        assert!(turtle.contains("<https://data.example.org/svc/1> a cpsv:PublicService ;"));
    }

    #[test]
    fn cprmv_rule_subject_joins_ruleset_and_rule() {
        let mut state = EditorState::default();
        state.cprmv_rules.push(crate::model::CprmvRule {
            rule_id: "art 7".to_string(),
            ruleset_id: "aow".to_string(),
            ..Default::default()
        });
        let turtle = to_turtle(&state);
        assert!(turtle.contains("<https://regels.overheid.nl/rules/aow_art%207> a cprmv:Rule ;"));
    }

    #[test]
    fn linked_concepts_live_under_the_service_model() {
        let mut state = with_service("aow");
        state.concepts.push(Concept {
            variable_name: "geboortejaar".to_string(),
            linked_to: "input/1".to_string(),
            linked_to_type: "input".to_string(),
            ..Default::default()
        });
        let turtle = to_turtle(&state);
        assert!(turtle.contains(
            "<https://regels.overheid.nl/concepts/aow/dmn/input/1> a skos:Concept ;"
        ));
    }
}
