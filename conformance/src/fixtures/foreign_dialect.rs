//! A document from another CPSV-AP tool.
//!
//! Uses alias predicates (`foaf:name`, `cprmv:validFrom`), an alternate
//! organization type, and one predicate the codec does not model.

/// Foreign-dialect document; imports with one dropped predicate.
pub const FOREIGN_DIALECT: &str = r#"@prefix cpsv: <http://purl.org/vocab/cpsv#> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix ronl: <https://regels.overheid.nl/termen/> .
@prefix cprmv: <https://cprmv.open-regels.nl/0.3.0/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <https://example.org/terms/> .

<https://regels.overheid.nl/services/huurtoeslag> a cpsv:PublicService ;
    dct:identifier "huurtoeslag" ;
    dct:title "Huurtoeslag"@nl ;
    ex:reviewedBy "Afdeling Wonen" .

<https://regels.overheid.nl/organizations/belastingdienst> a foaf:Organization ;
    dct:identifier "belastingdienst" ;
    foaf:name "Belastingdienst"@nl .

<https://regels.overheid.nl/rules/rule1> a cpsv:Rule ;
    dct:identifier "huur-2025" ;
    cprmv:validFrom "2025-01-01"^^xsd:date .
"#;
