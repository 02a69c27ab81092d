//! Codec configuration.
//!
//! The defaults reproduce the published `regels.overheid.nl` URI scheme and
//! should only be overridden when targeting a staging triple store.

use serde::Deserialize;

use crate::error::Error;
use crate::iri;

/// Namespace bases used to mint and recognize subject IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Namespaces {
    /// Base for `cpsv:PublicService` subjects.
    pub services: String,
    /// Base for organization subjects with a short identifier.
    pub organizations: String,
    /// Base for temporal and CPRMV rule subjects.
    pub rules: String,
    /// Base for parameter subjects.
    pub parameters: String,
    /// Base for cost subjects.
    pub costs: String,
    /// Base for output subjects.
    pub outputs: String,
    /// Base for concept subjects.
    pub concepts: String,
    /// Base for BWB legal resources.
    pub legal: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            services: iri::SERVICES_BASE.to_string(),
            organizations: iri::ORGANIZATIONS_BASE.to_string(),
            rules: iri::RULES_BASE.to_string(),
            parameters: iri::PARAMETERS_BASE.to_string(),
            costs: iri::COSTS_BASE.to_string(),
            outputs: iri::OUTPUTS_BASE.to_string(),
            concepts: iri::CONCEPTS_BASE.to_string(),
            legal: iri::LEGAL_BASE.to_string(),
        }
    }
}

/// Configuration shared by the generator and the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CodecConfig {
    /// Namespace bases.
    pub namespaces: Namespaces,
    /// Language tag for multilingual literals when the service sets none.
    pub default_language: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            default_language: "nl".to_string(),
        }
    }
}

impl CodecConfig {
    /// Reads a configuration from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }
}
