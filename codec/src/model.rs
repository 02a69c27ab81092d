//! Editor state model.
//!
//! These types mirror the key-value form store the editor UI mutates. Every
//! field is a plain `String`; an empty string means "absent" everywhere in the
//! codec. `"0"` is a value, not an absence. The top-level entry point is
//! [`EditorState`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The complete editor state: one record per entity kind.
///
/// Singletons are always present (possibly empty); repeatable kinds are
/// ordered lists whose position determines generated URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    /// The public service being described.
    pub service: Service,
    /// The competent authority.
    pub organization: Organization,
    /// The legal basis of the service.
    pub legal_resource: LegalResource,
    /// Temporal rules, in document order.
    pub temporal_rules: Vec<TemporalRule>,
    /// Rule parameters, in document order.
    pub parameters: Vec<Parameter>,
    /// CPRMV normative rules, in document order.
    pub cprmv_rules: Vec<CprmvRule>,
    /// Cost of the service.
    pub cost: Cost,
    /// Deliverable of the service.
    pub output: Output,
    /// SKOS concepts, in document order.
    pub concepts: Vec<Concept>,
    /// Vendor implementation details.
    pub vendor_service: VendorService,
    /// Decision model data, if any.
    pub dmn: Option<DmnState>,
}

/// A `cpsv:PublicService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    /// Short identifier or absolute URI. Required for the section to emit.
    pub identifier: String,
    /// Display name (`dct:title`).
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Thematic area concept URI.
    pub thematic_area: String,
    /// Sector concept URI.
    pub sector: String,
    /// Keywords as entered by the user.
    pub keywords: String,
    /// Language code (`nl`, `en`, ...) used for literal language tags.
    pub language: String,
}

impl Service {
    /// Path segment under which the service's child subjects are minted.
    #[must_use]
    pub fn slug(&self) -> String {
        crate::iri::slug_or_unnamed(&self.identifier)
    }
}

/// A `cv:PublicOrganisation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    /// Short organisation code or absolute URI.
    pub identifier: String,
    /// Preferred label.
    pub name: String,
    /// Homepage URL.
    pub homepage: String,
    /// Spatial coverage URI.
    pub spatial: String,
    /// Logo URL.
    pub logo: String,
}

/// An `eli:LegalResource` (typically a BWB regulation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegalResource {
    /// BWB identifier (e.g. `BWBR0002221`) or absolute URI.
    pub bwb_id: String,
    /// Version (consolidation date or label).
    pub version: String,
    /// Title of the regulation.
    pub title: String,
    /// Description.
    pub description: String,
}

/// A time-bounded rule (`cpsv:Rule`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemporalRule {
    /// Client-side identity; never serialized.
    pub id: String,
    /// Explicit subject URI. Empty means index-based.
    pub uri: String,
    /// Rule identifier.
    pub identifier: String,
    /// Title.
    pub title: String,
    /// URI or identifier of the rule this one extends.
    pub extends: String,
    /// Start of validity, `YYYY-MM-DD`.
    pub valid_from: String,
    /// End of validity, `YYYY-MM-DD`.
    pub valid_until: String,
    /// Confidence level (`low`, `medium`, `high`).
    pub confidence_level: String,
    /// Description.
    pub description: String,
}

impl TemporalRule {
    /// Whether any field that carries meaning beyond identity is set.
    ///
    /// The subject `uri` alone does not count.
    #[must_use]
    pub fn has_content(&self) -> bool {
        [
            &self.identifier,
            &self.title,
            &self.extends,
            &self.valid_from,
            &self.valid_until,
            &self.confidence_level,
            &self.description,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }
}

/// A rule parameter value (`ronl:ParameterWaarde`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    /// Client-side identity; never serialized.
    pub id: String,
    /// Machine name (`skos:notation`). Required for the parameter to emit.
    pub notation: String,
    /// Human label.
    pub label: String,
    /// Decimal value as entered.
    pub value: String,
    /// Unit code (e.g. `EUR`, `PCT`).
    pub unit: String,
    /// Description.
    pub description: String,
    /// Start of validity, `YYYY-MM-DD`.
    pub valid_from: String,
    /// End of validity, `YYYY-MM-DD`.
    pub valid_until: String,
}

/// A CPRMV normative rule (`cprmv:Rule`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CprmvRule {
    /// Client-side identity; never serialized.
    pub id: String,
    /// Rule identifier within its ruleset. Required for the rule to emit.
    pub rule_id: String,
    /// Ruleset identifier.
    pub ruleset_id: String,
    /// Definition text.
    pub definition: String,
    /// Situation the rule applies to.
    pub situatie: String,
    /// Norm text.
    pub norm: String,
    /// Path of the rule within the ruleset.
    pub rule_id_path: String,
}

/// A `cv:Cost`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cost {
    /// Identifier. Required for the section to emit.
    pub identifier: String,
    /// Decimal amount.
    pub value: String,
    /// Currency code or URI.
    pub currency: String,
    /// Description.
    pub description: String,
}

/// A service deliverable (`cv:Output`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Output {
    /// Identifier. Required for the section to emit.
    pub identifier: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Output type, URI or code.
    #[serde(rename = "type")]
    pub type_: String,
}

/// A `skos:Concept`, optionally linked to a DMN input or output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Concept {
    /// Client-side identity; never serialized.
    pub id: String,
    /// Subject URI. Authoritative once set.
    pub uri: String,
    /// DMN variable name the concept describes.
    pub variable_name: String,
    /// Preferred label.
    pub pref_label: String,
    /// Definition.
    pub definition: String,
    /// Notation code.
    pub notation: String,
    /// Link target relative to the decision model, e.g. `input/2`.
    pub linked_to: String,
    /// `input` or `output`.
    pub linked_to_type: String,
    /// Matching concept in an external vocabulary.
    pub exact_match: String,
    /// Concept type.
    #[serde(rename = "type")]
    pub type_: String,
}

impl Concept {
    /// The URI minted for this concept when `uri` is not absolute.
    ///
    /// A DMN link wins over the name; the name is the variable name, or the
    /// preferred label when there is none.
    #[must_use]
    pub fn derived_uri(&self, concepts_base: &str, service_slug: &str) -> String {
        if !self.linked_to.is_empty() {
            return format!("{concepts_base}{service_slug}/dmn/{}", self.linked_to);
        }
        let name = if self.variable_name.is_empty() {
            &self.pref_label
        } else {
            &self.variable_name
        };
        format!("{concepts_base}{}", crate::iri::slug_or_unnamed(name))
    }

    /// Renames the concept, moving a name-derived URI along with it.
    ///
    /// URIs that were set explicitly, or that encode a DMN link, are kept.
    pub fn set_variable_name(&mut self, name: &str, concepts_base: &str) {
        let derived = format!(
            "{}{}",
            concepts_base,
            crate::iri::slugify(&self.variable_name)
        );
        if self.uri.is_empty() || self.uri == derived {
            self.uri = if name.is_empty() {
                String::new()
            } else {
                format!("{}{}", concepts_base, crate::iri::slugify(name))
            };
        }
        self.variable_name = name.to_string();
    }
}

/// Vendor implementation of the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorService {
    /// URI of the selected vendor. Required for the section to emit.
    pub selected_vendor: String,
    /// Vendor contact details.
    pub contact: VendorContact,
    /// Technical access details.
    pub technical: VendorTechnical,
    /// Certification state.
    pub certification: VendorCertification,
    /// Free-text notes.
    pub service_notes: String,
}

/// Contact block of a [`VendorService`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorContact {
    /// Contact person.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
}

/// Technical block of a [`VendorService`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorTechnical {
    /// Service endpoint URL.
    pub service_url: String,
    /// License.
    pub license: String,
    /// Access type (e.g. `open`, `restricted`).
    pub access_type: String,
}

/// Certification block of a [`VendorService`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorCertification {
    /// Certification status.
    pub status: String,
    /// Certifying party.
    pub certified_by: String,
    /// Certification date, `YYYY-MM-DD`.
    pub certified_at: String,
    /// Note.
    pub note: String,
}

/// Decision-model data: either preserved from an import or freshly authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum DmnState {
    /// Captured verbatim from an imported document.
    Imported(ImportedDmn),
    /// Built in the editor from a DMN file and a test evaluation.
    Authored(AuthoredDmn),
}

/// An opaque DMN block captured by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportedDmn {
    /// Preserved Turtle text.
    pub raw: String,
    /// Validation metadata read from the block.
    pub metadata: ValidationMetadata,
}

/// Validation metadata attached to a decision model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationMetadata {
    /// `ronl:validationStatus`.
    pub status: String,
    /// `ronl:validatedBy`.
    pub validated_by: String,
    /// `ronl:validatedAt`.
    pub validated_at: String,
    /// `ronl:validationNote`.
    pub note: String,
}

impl ValidationMetadata {
    /// Whether no metadata field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.validated_by.is_empty()
            && self.validated_at.is_empty()
            && self.note.is_empty()
    }
}

/// A decision model authored in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthoredDmn {
    /// Name of the uploaded DMN file.
    pub file_name: String,
    /// DMN XML content.
    pub xml: String,
    /// Result of a test evaluation against the decision engine.
    pub evaluation: Option<DmnEvaluation>,
}

/// A test evaluation exchanged with the decision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DmnEvaluation {
    /// Decision key that was evaluated.
    pub decision_key: String,
    /// Request variables by name.
    pub variables: BTreeMap<String, TypedValue>,
    /// Result rows; each row maps output names to values.
    pub result: Vec<BTreeMap<String, TypedValue>>,
}

impl DmnEvaluation {
    /// Parses a decision-engine evaluation exchange from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an evaluation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A decision-engine variable value with its declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypedValue {
    /// Engine type name (`Integer`, `Double`, `Boolean`, `Date`, `String`, ...).
    #[serde(rename = "type")]
    pub type_: String,
    /// Value rendered as text.
    #[serde(deserialize_with = "value_as_text")]
    pub value: String,
}

fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
