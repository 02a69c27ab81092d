//! A decision model block written by an older export.
//!
//! The block uses `ronl:implementedBy` and `ronl:implements`, which import
//! rewrites to their `cprmv:` forms. Everything else in it is kept as-is.

/// Document with a legacy decision-model block between structured sections.
pub const LEGACY_DMN: &str = r#"@prefix cpsv: <http://purl.org/vocab/cpsv#> .
@prefix cv: <http://data.europa.eu/m8g/> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix dcat: <http://www.w3.org/ns/dcat#> .
@prefix eli: <http://data.europa.eu/eli/ontology#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix org: <http://www.w3.org/ns/org#> .
@prefix ronl: <https://regels.overheid.nl/termen/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix schema: <http://schema.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix cprmv: <https://cprmv.open-regels.nl/0.3.0/> .

# Public Service
<https://regels.overheid.nl/services/zorgtoeslag> a cpsv:PublicService ;
    dct:identifier "zorgtoeslag" ;
    dct:title "Zorgtoeslag"@nl .

# DMN Decision Model
<https://regels.overheid.nl/services/zorgtoeslag/dmn> a cprmv:DecisionModel ;
    dct:identifier "zorgtoeslag-berekening" ;
    ronl:implementedBy <https://engine.open-regels.nl/zorgtoeslag> ;
    ronl:validationStatus "approved" ;
    ronl:validatedBy "Team Toeslagen" ;
    ronl:validatedAt "2024-06-12T09:30:00Z"^^xsd:dateTime .

<https://regels.overheid.nl/services/zorgtoeslag/dmn/input/1> a cpsv:Input ;
    dct:identifier "toetsingsinkomen" ;
    ronl:implements <https://regels.overheid.nl/services/zorgtoeslag> .

<https://regels.overheid.nl/services/zorgtoeslag/dmn/output/1> a cpsv:Output ;
    dct:identifier "hoogteToeslag" .

<https://regels.overheid.nl/services/zorgtoeslag/dmn/rule/1> a cprmv:DecisionRule ;
    dct:identifier "rule-inkomen-laag" ;
    cprmv:condition "< 38520" ;
    cprmv:conclusion "123" .

# Concepts
<https://regels.overheid.nl/concepts/zorgtoeslag/dmn/input/1> a skos:Concept ;
    dct:identifier "toetsingsinkomen" ;
    skos:prefLabel "Toetsingsinkomen"@nl .

"#;
