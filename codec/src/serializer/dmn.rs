//! Decision-model section.
//!
//! Imported blocks are written back as captured. Authored models are
//! generated from the test evaluation and the decision tables of the DMN XML.

use std::fmt::Write as _;
use std::sync::OnceLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;

use crate::literal::Xsd;
use crate::model::{AuthoredDmn, DmnState, TypedValue};
use crate::registry::EntityKind;
use crate::serializer::statement::Statement;
use crate::vocab::{cprmv, cpsv, dct, schema};

/// Header comment written above the section.
pub const HEADER: &str = "# DMN Decision Model";

/// Writes the DMN section for `dmn` into `out`.
///
/// `model_uri` is the subject for an authored model and `service_uri` the
/// service it implements, when that service is emitted.
pub fn write(
    out: &mut String,
    dmn: &DmnState,
    model_uri: &str,
    service_uri: Option<&str>,
    language: &str,
) {
    match dmn {
        DmnState::Imported(imported) => {
            let body = strip_header(&imported.raw);
            if body.trim().is_empty() {
                return;
            }
            out.push_str(HEADER);
            out.push('\n');
            out.push_str(body);
            out.push_str("\n\n");
        }
        DmnState::Authored(authored) => {
            let body = authored_block(authored, model_uri, service_uri, language);
            if !body.is_empty() {
                out.push_str(HEADER);
                out.push('\n');
                out.push_str(&body);
            }
        }
    }
}

/// Drops a leading synthetic header comment, and the blank lines after it.
#[must_use]
pub fn strip_header(raw: &str) -> &str {
    static LEADING_HEADER: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = LEADING_HEADER
        .get_or_init(|| {
            Regex::new(r"^\s*# DMN Decision Model[ \t]*(?:\r?\n|$)(?:[ \t]*\r?\n)*").ok()
        })
        .as_ref()
    else {
        return raw;
    };
    match re.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    }
}

fn authored_block(
    dmn: &AuthoredDmn,
    model_uri: &str,
    service_uri: Option<&str>,
    language: &str,
) -> String {
    let mut out = String::new();
    let evaluation = dmn.evaluation.as_ref();

    let outputs: Vec<(&String, &TypedValue)> = evaluation
        .and_then(|e| e.result.first())
        .map(|row| row.iter().collect())
        .unwrap_or_default();
    let output_uris: Vec<String> = (1..=outputs.len())
        .map(|n| format!("{model_uri}/output/{n}"))
        .collect();

    let mut model = Statement::new(model_uri, EntityKind::DecisionModel);
    model
        .literal(
            dct::IDENTIFIER,
            evaluation.map_or("", |e| e.decision_key.as_str()),
            None,
        )
        .literal(dct::TITLE, &dmn.file_name, Some(language))
        .iri(cprmv::IMPLEMENTS, service_uri.unwrap_or_default());
    for uri in &output_uris {
        model.iri(cpsv::PRODUCES, uri);
    }
    if !model.render(&mut out) {
        // Nothing identifies the model; emit the bare type.
        let _ = write!(
            out,
            "<{}> a {} .\n\n",
            crate::iri::encode_iri(model_uri),
            crate::registry::canonical_type(EntityKind::DecisionModel)
        );
    }

    if let Some(evaluation) = evaluation {
        for (n, (name, value)) in evaluation.variables.iter().enumerate() {
            let mut input =
                Statement::new(&format!("{model_uri}/input/{}", n + 1), EntityKind::DmnInput);
            input
                .literal(dct::IDENTIFIER, name, None)
                .literal(dct::TYPE, &value.type_, None);
            typed_value(&mut input, value);
            input.iri(cpsv::IS_REQUIRED_BY, model_uri);
            input.render(&mut out);
        }
    }
    for ((name, value), uri) in outputs.iter().zip(&output_uris) {
        let mut output = Statement::new(uri, EntityKind::DmnOutput);
        output
            .literal(dct::IDENTIFIER, name, None)
            .literal(dct::TYPE, &value.type_, None);
        typed_value(&mut output, value);
        output.render(&mut out);
    }

    match decision_rules(&dmn.xml) {
        Ok(rules) => {
            for (n, rule) in rules.iter().enumerate() {
                let mut st = Statement::new(
                    &format!("{model_uri}/rule/{}", n + 1),
                    EntityKind::DecisionRule,
                );
                st.literal(dct::IDENTIFIER, &rule.id, None)
                    .literal(cprmv::CONDITION, &rule.inputs.join(", "), None)
                    .literal(cprmv::CONCLUSION, &rule.outputs.join(", "), None)
                    .iri(cprmv::DECISION, model_uri);
                st.render(&mut out);
            }
        }
        Err(err) => {
            tracing::warn!(
                file = %dmn.file_name,
                %err,
                "DMN XML could not be scanned, decision rules omitted"
            );
        }
    }
    out
}

fn typed_value(statement: &mut Statement, value: &TypedValue) {
    match value.type_.as_str() {
        "Integer" | "Long" => statement.typed(schema::VALUE, &value.value, Xsd::Integer),
        "Double" | "Number" => statement.typed(schema::VALUE, &value.value, Xsd::Decimal),
        "Boolean" => statement.typed(schema::VALUE, &value.value, Xsd::Boolean),
        "Date" => statement.typed(schema::VALUE, &value.value, Xsd::Date),
        _ => statement.literal(schema::VALUE, &value.value, None),
    };
}

/// One `<rule>` row of a decision table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecisionRule {
    /// The rule's `id` attribute.
    pub id: String,
    /// Texts of its `inputEntry` cells.
    pub inputs: Vec<String>,
    /// Texts of its `outputEntry` cells.
    pub outputs: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Input,
    Output,
}

/// Reads every decision-table rule from a DMN document.
///
/// # Errors
///
/// Returns the reader error when `xml` is not well-formed.
pub fn decision_rules(xml: &str) -> Result<Vec<DecisionRule>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut rules = Vec::new();
    let mut table_depth = 0usize;
    let mut rule: Option<DecisionRule> = None;
    let mut cell: Option<Cell> = None;
    let mut in_text = false;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"decisionTable" => table_depth += 1,
                b"rule" if table_depth > 0 => {
                    rule = Some(DecisionRule {
                        id: attribute(&e, "id"),
                        ..Default::default()
                    });
                }
                b"inputEntry" if rule.is_some() => cell = Some(Cell::Input),
                b"outputEntry" if rule.is_some() => cell = Some(Cell::Output),
                b"text" if cell.is_some() => {
                    in_text = true;
                    text.clear();
                }
                _ => {}
            },
            Event::Text(t) if in_text => text.push_str(&t.unescape()?),
            Event::CData(t) if in_text => text.push_str(&String::from_utf8_lossy(&t)),
            Event::End(e) => match e.local_name().as_ref() {
                b"decisionTable" => table_depth = table_depth.saturating_sub(1),
                b"rule" => {
                    if let Some(done) = rule.take() {
                        rules.push(done);
                    }
                }
                b"inputEntry" | b"outputEntry" => cell = None,
                b"text" if in_text => {
                    in_text = false;
                    if let (Some(rule), Some(cell)) = (rule.as_mut(), cell) {
                        let entry = std::mem::take(&mut text);
                        match cell {
                            Cell::Input => rule.inputs.push(entry),
                            Cell::Output => rule.outputs.push(entry),
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rules)
}

fn attribute(element: &BytesStart<'_>, name: &str) -> String {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::model::{DmnEvaluation, ImportedDmn};

    const TABLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="https://www.omg.org/spec/DMN/20191111/MODEL/">
  <decision id="leeftijd" name="AOW leeftijd">
    <decisionTable id="t1">
      <input id="i1"><inputExpression><text>geboortejaar</text></inputExpression></input>
      <output id="o1" name="aowLeeftijd"/>
      <rule id="r1">
        <inputEntry><text>&lt; 1957</text></inputEntry>
        <outputEntry><text>65</text></outputEntry>
      </rule>
      <rule id="r2">
        <inputEntry><text>&gt;= 1957</text></inputEntry>
        <outputEntry><text>67</text></outputEntry>
      </rule>
    </decisionTable>
  </decision>
</definitions>"#;

    #[test]
    fn header_is_stripped_once() {
        assert_eq!(
            strip_header("# DMN Decision Model\n\n<x> a cprmv:DecisionModel ."),
            "<x> a cprmv:DecisionModel ."
        );
        let trailing = "<x> a cprmv:DecisionModel .\n# DMN Decision Model";
        assert_eq!(strip_header(trailing), trailing);
    }

    #[test]
    fn imported_block_is_written_verbatim() {
        let raw = "<x> a cprmv:DecisionModel ;\n    # kept\n    cprmv:implements <y> .";
        let dmn = DmnState::Imported(ImportedDmn {
            raw: raw.to_string(),
            ..Default::default()
        });
        let mut out = String::new();
        write(&mut out, &dmn, "unused", None, "nl");
        assert_eq!(out, format!("{HEADER}\n{raw}\n\n"));
    }

    #[test]
    fn rules_are_read_from_decision_tables() {
        let rules = decision_rules(TABLE).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, "r1");
        assert_eq!(rules[0].inputs, vec!["< 1957"]);
        assert_eq!(rules[1].outputs, vec!["67"]);
    }

    #[test]
    fn rules_outside_tables_are_ignored() {
        let xml = "<definitions><rule id=\"x\"><inputEntry><text>1</text></inputEntry></rule>\
                   </definitions>";
        assert!(decision_rules(xml).unwrap().is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(decision_rules("<definitions><decisionTable></definitions>").is_err());
    }

    #[test]
    fn authored_model_lists_inputs_outputs_and_rules() {
        let evaluation = DmnEvaluation::from_json(
            r#"{
                "decisionKey": "leeftijd",
                "variables": {"geboortejaar": {"type": "Integer", "value": 1960}},
                "result": [{"aowLeeftijd": {"type": "Integer", "value": 67}}]
            }"#,
        )
        .unwrap();
        let dmn = DmnState::Authored(AuthoredDmn {
            file_name: "aow.dmn".to_string(),
            xml: TABLE.to_string(),
            evaluation: Some(evaluation),
        });
        let model = "https://regels.overheid.nl/services/aow/dmn";
        let mut out = String::new();
        write(&mut out, &dmn, model, Some("https://regels.overheid.nl/services/aow"), "nl");

        let header = format!("# DMN Decision Model\n<{model}> a cprmv:DecisionModel ;");
        assert!(out.starts_with(&header));
        assert!(out.contains(&format!("<{model}/input/1> a cpsv:Input ;")));
        assert!(out.contains("schema:value \"1960\"^^xsd:integer ;"));
        assert!(out.contains(&format!("<{model}/output/1> a cpsv:Output ;")));
        assert!(out.contains(&format!("<{model}/rule/2> a cprmv:DecisionRule ;")));
        assert!(out.contains("cprmv:condition \">= 1957\" ;"));
    }

    #[test]
    fn unreadable_xml_still_emits_the_model() {
        let dmn = DmnState::Authored(AuthoredDmn {
            file_name: "broken.dmn".to_string(),
            xml: "<definitions><decisionTable>".to_string(),
            evaluation: None,
        });
        let mut out = String::new();
        write(&mut out, &dmn, "https://regels.overheid.nl/services/aow/dmn", None, "nl");
        assert!(out.contains("a cprmv:DecisionModel"));
        assert!(!out.contains("cprmv:DecisionRule"));
    }
}
