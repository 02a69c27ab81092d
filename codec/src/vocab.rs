//! Canonical predicate names, grouped by vocabulary.
//!
//! The generator writes exactly these names and the parser matches against
//! them after [`normalize_property`](crate::registry::normalize_property).

#![allow(missing_docs)]

pub mod dct {
    pub const IDENTIFIER: &str = "dct:identifier";
    pub const TITLE: &str = "dct:title";
    pub const DESCRIPTION: &str = "dct:description";
    pub const LANGUAGE: &str = "dct:language";
    pub const TYPE: &str = "dct:type";
}

pub mod dcat {
    pub const KEYWORD: &str = "dcat:keyword";
}

pub mod cv {
    pub const THEMATIC_AREA: &str = "cv:thematicArea";
    pub const SECTOR: &str = "cv:sector";
    pub const HAS_COMPETENT_AUTHORITY: &str = "cv:hasCompetentAuthority";
    pub const HAS_LEGAL_RESOURCE: &str = "cv:hasLegalResource";
    pub const HAS_COST: &str = "cv:hasCost";
    pub const PRODUCES: &str = "cv:produces";
    pub const SPATIAL: &str = "cv:spatial";
    pub const VALUE: &str = "cv:value";
    pub const CURRENCY: &str = "cv:currency";
}

pub mod cpsv {
    pub const FOLLOWS: &str = "cpsv:follows";
    pub const IS_REQUIRED_BY: &str = "cpsv:isRequiredBy";
    pub const PRODUCES: &str = "cpsv:produces";
}

pub mod foaf {
    pub const HOMEPAGE: &str = "foaf:homepage";
    pub const LOGO: &str = "foaf:logo";
}

pub mod eli {
    pub const VERSION: &str = "eli:version";
}

pub mod skos {
    pub const PREF_LABEL: &str = "skos:prefLabel";
    pub const DEFINITION: &str = "skos:definition";
    pub const NOTATION: &str = "skos:notation";
    pub const EXACT_MATCH: &str = "skos:exactMatch";
}

pub mod schema {
    pub const VALUE: &str = "schema:value";
    pub const UNIT_CODE: &str = "schema:unitCode";
}

pub mod cprmv {
    pub const ID: &str = "cprmv:id";
    pub const RULESET_ID: &str = "cprmv:rulesetId";
    pub const DEFINITION: &str = "cprmv:definition";
    pub const SITUATIE: &str = "cprmv:situatie";
    pub const NORM: &str = "cprmv:norm";
    pub const RULE_ID_PATH: &str = "cprmv:ruleIdPath";
    pub const EXTENDS: &str = "cprmv:extends";
    pub const IMPLEMENTS: &str = "cprmv:implements";
    pub const DECISION: &str = "cprmv:decision";
    pub const CONDITION: &str = "cprmv:condition";
    pub const CONCLUSION: &str = "cprmv:conclusion";
}

pub mod ronl {
    pub const VALID_FROM: &str = "ronl:validFrom";
    pub const VALID_UNTIL: &str = "ronl:validUntil";
    pub const CONFIDENCE_LEVEL: &str = "ronl:confidenceLevel";
    pub const VALIDATION_STATUS: &str = "ronl:validationStatus";
    pub const VALIDATED_BY: &str = "ronl:validatedBy";
    pub const VALIDATED_AT: &str = "ronl:validatedAt";
    pub const VALIDATION_NOTE: &str = "ronl:validationNote";
    pub const VENDOR: &str = "ronl:vendor";
    pub const CONTACT_NAME: &str = "ronl:contactName";
    pub const CONTACT_EMAIL: &str = "ronl:contactEmail";
    pub const CONTACT_PHONE: &str = "ronl:contactPhone";
    pub const CONTACT_WEBSITE: &str = "ronl:contactWebsite";
    pub const SERVICE_URL: &str = "ronl:serviceUrl";
    pub const LICENSE: &str = "ronl:license";
    pub const ACCESS_TYPE: &str = "ronl:accessType";
    pub const CERTIFICATION_STATUS: &str = "ronl:certificationStatus";
    pub const CERTIFIED_BY: &str = "ronl:certifiedBy";
    pub const CERTIFIED_AT: &str = "ronl:certifiedAt";
    pub const CERTIFICATION_NOTE: &str = "ronl:certificationNote";
    pub const SERVICE_NOTES: &str = "ronl:serviceNotes";
}
