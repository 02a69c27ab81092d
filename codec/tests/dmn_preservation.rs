//! Decision-model blocks survive import/export cycles unchanged.

use ronl_ttl::{from_turtle, to_turtle, DmnState, EditorState, ImportedDmn};

const PREFIXES: &str = "\
@prefix cpsv: <http://purl.org/vocab/cpsv#> .
@prefix cprmv: <https://cprmv.open-regels.nl/0.3.0/> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix ronl: <https://regels.overheid.nl/termen/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

const SERVICE: &str = "\
# Public Service
<https://regels.overheid.nl/services/aow> a cpsv:PublicService ;
    dct:identifier \"aow\" ;
    dct:title \"AOW\"@nl .
";

/// The block as an older export wrote it.
const LEGACY_BLOCK: &str = "\
<https://regels.overheid.nl/services/aow/dmn> a cprmv:DecisionModel ;
    dct:identifier \"aow-leeftijd\" ;
    ronl:implementedBy <https://engine.example/aow> ;
    ronl:validationStatus \"approved\" ;
    ronl:validatedBy \"Team Regels\" ;
    ronl:validatedAt \"2024-05-01T10:00:00Z\"^^xsd:dateTime ;
    ronl:validationNote \"Checked; fine.\" .

# input variables
<https://regels.overheid.nl/services/aow/dmn/input/1> a cpsv:Input ;
    dct:identifier \"geboortedatum\" ;
    ronl:implements <https://regels.overheid.nl/services/aow> .

<https://regels.overheid.nl/services/aow/dmn/output/1> a cpsv:Output ;
    dct:identifier \"aowLeeftijd\" .";

/// A block whose subjects sit on their own lines.
const SUBJECT_LINE_BLOCK: &str = "\
<https://regels.overheid.nl/services/aow/dmn>
    a cprmv:DecisionModel ;
    dct:identifier \"aow\" .

<https://regels.overheid.nl/services/aow/dmn/input/1>
    a cpsv:Input ;
    dct:identifier \"geboortedatum\" .";

const CONCEPTS: &str = "\
# Concepts
<https://regels.overheid.nl/concepts/aow/dmn/input/1> a skos:Concept ;
    dct:identifier \"geboortedatum\" .
";

fn document() -> String {
    format!("{PREFIXES}\n{SERVICE}\n# DMN Decision Model\n{LEGACY_BLOCK}\n\n{CONCEPTS}")
}

fn upgraded_block() -> String {
    LEGACY_BLOCK
        .replace("ronl:implementedBy", "cprmv:implementedBy")
        .replace("ronl:implements ", "cprmv:implements ")
}

fn imported(state: &EditorState) -> &ImportedDmn {
    match &state.dmn {
        Some(DmnState::Imported(dmn)) => dmn,
        other => panic!("expected an imported decision model, got {other:?}"),
    }
}

/// Returns the text between the DMN header and the next section header.
fn dmn_section(turtle: &str) -> &str {
    let start = turtle.find("# DMN Decision Model\n").unwrap() + "# DMN Decision Model\n".len();
    let end = turtle[start..].find("\n\n# Concepts").unwrap() + start;
    &turtle[start..end]
}

#[test]
fn block_is_captured_with_only_legacy_rewrites() {
    let state = from_turtle(&document()).unwrap();
    assert_eq!(imported(&state).raw, upgraded_block());
}

#[test]
fn structured_neighbours_are_still_parsed() {
    let state = from_turtle(&document()).unwrap();
    assert_eq!(state.service.identifier, "aow");
    assert_eq!(state.concepts.len(), 1);
    assert_eq!(state.concepts[0].linked_to, "input/1");
}

#[test]
fn validation_metadata_is_a_side_read() {
    let state = from_turtle(&document()).unwrap();
    let dmn = imported(&state);
    assert_eq!(dmn.metadata.status, "approved");
    assert_eq!(dmn.metadata.validated_by, "Team Regels");
    assert_eq!(dmn.metadata.validated_at, "2024-05-01T10:00:00Z");
    assert_eq!(dmn.metadata.note, "Checked; fine.");
    assert!(dmn.raw.contains("ronl:validationStatus \"approved\""));
}

#[test]
fn export_writes_the_block_back() {
    let turtle = to_turtle(&from_turtle(&document()).unwrap());
    assert_eq!(dmn_section(&turtle), upgraded_block());
    assert_eq!(turtle.matches("# DMN Decision Model").count(), 1);
}

#[test]
fn import_export_reaches_a_fixed_point() {
    let first_state = from_turtle(&document()).unwrap();
    let first = to_turtle(&first_state);
    let second_state = from_turtle(&first).unwrap();
    let second = to_turtle(&second_state);
    assert_eq!(second_state, first_state);
    assert_eq!(second, first);
}

#[test]
fn trailing_block_is_captured() {
    let turtle = format!("{PREFIXES}\n{SERVICE}\n# DMN Decision Model\n{LEGACY_BLOCK}\n");
    let state = from_turtle(&turtle).unwrap();
    assert_eq!(imported(&state).raw, upgraded_block());

    let exported = to_turtle(&state);
    assert!(exported.ends_with(&format!("{}\n\n", upgraded_block())));
}

#[test]
fn blocks_split_by_structured_entities_are_joined() {
    let turtle = format!(
        "{PREFIXES}\n<m> a cprmv:DecisionModel .\n{CONCEPTS}\n<r> a cprmv:DecisionRule .\n"
    );
    let state = from_turtle(&turtle).unwrap();
    assert_eq!(imported(&state).raw, "<m> a cprmv:DecisionModel .\n\n<r> a cprmv:DecisionRule .");
}

#[test]
fn subjects_on_their_own_lines_stay_in_the_block() {
    let turtle = format!(
        "{PREFIXES}\n{SERVICE}\n# DMN Decision Model\n{SUBJECT_LINE_BLOCK}\n\n{CONCEPTS}"
    );
    let state = from_turtle(&turtle).unwrap();
    assert_eq!(imported(&state).raw, SUBJECT_LINE_BLOCK);
    assert_eq!(state.service.identifier, "aow");
    assert_eq!(state.concepts.len(), 1);

    let exported = to_turtle(&state);
    assert_eq!(dmn_section(&exported), SUBJECT_LINE_BLOCK);
    assert_eq!(to_turtle(&from_turtle(&exported).unwrap()), exported);
}
