//! A complete service description in the generator's own layout.
//!
//! Covers: `cpsv:PublicService`, `cv:PublicOrganisation`, `eli:LegalResource`,
//! `cpsv:Rule`, `ronl:ParameterWaarde`, `cv:Cost`, `cv:Output`, `cprmv:Rule`,
//! `skos:Concept`, `ronl:VendorService`.

/// Generated document for the AOW age service.
pub const AOW_SERVICE: &str = r#"@prefix cpsv: <http://purl.org/vocab/cpsv#> .
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
<https://regels.overheid.nl/services/aow-leeftijd> a cpsv:PublicService ;
    dct:identifier "aow-leeftijd" ;
    dct:title "AOW Leeftijdsbepaling"@nl ;
    dct:description "Bepaalt de AOW-leeftijd op basis van de geboortedatum."@nl ;
    cv:thematicArea <https://regels.overheid.nl/themes/sociale-zekerheid> ;
    cv:sector <https://regels.overheid.nl/sectors/overheid> ;
    dcat:keyword "AOW, pensioen"@nl ;
    dct:language <http://publications.europa.eu/resource/authority/language/NLD> ;
    cv:hasCompetentAuthority <https://regels.overheid.nl/organizations/svb> ;
    cv:hasLegalResource <https://wetten.overheid.nl/BWBR0002221> ;
    cpsv:follows <https://regels.overheid.nl/rules/rule1> ;
    cv:hasCost <https://regels.overheid.nl/costs/aow-kosten> ;
    cv:produces <https://regels.overheid.nl/outputs/aow-besluit> .

# Organization
<https://regels.overheid.nl/organizations/svb> a cv:PublicOrganisation ;
    dct:identifier "svb" ;
    skos:prefLabel "Sociale Verzekeringsbank"@nl ;
    foaf:homepage <https://www.svb.nl> ;
    cv:spatial <https://regels.overheid.nl/spatial/nederland> .

# Legal Resource
<https://wetten.overheid.nl/BWBR0002221> a eli:LegalResource ;
    dct:identifier "BWBR0002221" ;
    eli:version "2024-01-01" ;
    dct:title "Algemene Ouderdomswet"@nl .

# Temporal Rules
<https://regels.overheid.nl/rules/rule1> a cpsv:Rule ;
    dct:identifier "aow-2024" ;
    dct:title "AOW-leeftijd 2024"@nl ;
    ronl:validFrom "2024-01-01"^^xsd:date ;
    ronl:validUntil "2024-12-31"^^xsd:date ;
    ronl:confidenceLevel "high" .

# Parameters
<https://regels.overheid.nl/parameters/aow-leeftijd/param-1> a ronl:ParameterWaarde ;
    skos:notation "AOW_LEEFTIJD" ;
    skos:prefLabel "AOW-leeftijd in maanden"@nl ;
    schema:value "805"^^xsd:decimal ;
    schema:unitCode "MON" ;
    ronl:validFrom "2024-01-01"^^xsd:date .

# Cost
<https://regels.overheid.nl/costs/aow-kosten> a cv:Cost ;
    dct:identifier "aow-kosten" ;
    cv:value "0"^^xsd:decimal ;
    cv:currency "EUR" .

# Output
<https://regels.overheid.nl/outputs/aow-besluit> a cv:Output ;
    dct:identifier "aow-besluit" ;
    dct:title "AOW-beschikking"@nl ;
    dct:type "Besluit" .

# CPRMV Rules
<https://regels.overheid.nl/rules/AOW_art7a> a cprmv:Rule ;
    cprmv:id "art7a" ;
    cprmv:rulesetId "AOW" ;
    cprmv:definition "De pensioengerechtigde leeftijd"@nl ;
    cprmv:norm "Artikel 7a"@nl ;
    cprmv:ruleIdPath "AOW/art7a" .

# Concepts
<https://regels.overheid.nl/concepts/aow-leeftijd/dmn/input/1> a skos:Concept ;
    dct:identifier "geboortedatum" ;
    skos:prefLabel "Geboortedatum"@nl ;
    skos:notation "GEBDAT" .

# Vendor Service
<https://regels.overheid.nl/services/aow-leeftijd/vendor> a ronl:VendorService ;
    ronl:vendor "Open Regels" ;
    ronl:contactEmail "info@open-regels.nl" ;
    ronl:serviceUrl <https://engine.open-regels.nl/aow> ;
    ronl:certificationStatus "certified" ;
    ronl:certifiedAt "2024-03-01"^^xsd:date .

"#;
