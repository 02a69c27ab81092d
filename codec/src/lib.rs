//! Round-trip Turtle codec for CPSV-AP public service records.
//!
//! The `ronl-ttl` crate renders the editor state of a public service
//! description (service, organization, legal resource, rules, parameters,
//! cost, output, concepts, vendor, decision model) as Turtle, and reads such
//! documents back into the same state. Decision-model triples it does not
//! model are carried through an import/export cycle unchanged.
//!
//! # Entry Point
//!
//! ```
//! use ronl_ttl::{from_turtle, to_turtle, EditorState};
//!
//! let mut state = EditorState::default();
//! state.service.identifier = "aow-leeftijd".to_string();
//! state.service.name = "AOW Leeftijdsbepaling".to_string();
//!
//! let turtle = to_turtle(&state);
//! let subject = "<https://regels.overheid.nl/services/aow-leeftijd>";
//! assert!(turtle.contains(&format!("{subject} a cpsv:PublicService ;")));
//!
//! let parsed = from_turtle(&turtle).unwrap();
//! assert_eq!(parsed.service.name, "AOW Leeftijdsbepaling");
//! ```
//!
//! # Configuration
//!
//! ```
//! let config = ronl_ttl::CodecConfig::from_toml_str(
//!     "[namespaces]\nservices = \"https://staging.example.org/services/\"\n",
//! ).unwrap();
//! assert_eq!(config.default_language, "nl");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod iri;
pub mod literal;
pub mod model;
pub mod parser;
pub mod registry;
pub mod serializer;
pub mod vocab;

pub use config::{CodecConfig, Namespaces};
pub use error::{Error, Result};
pub use model::{
    AuthoredDmn, Concept, Cost, CprmvRule, DmnEvaluation, DmnState, EditorState, ImportedDmn,
    LegalResource, Organization, Output, Parameter, Service, TemporalRule, TypedValue,
    ValidationMetadata, VendorCertification, VendorContact, VendorService, VendorTechnical,
};
pub use parser::{
    from_turtle, from_turtle_with, parse_document, parse_document_with, ParseOutcome,
    UnrecognizedProperty,
};
pub use registry::EntityKind;
pub use serializer::{to_turtle, to_turtle_with};
