//! Turtle generation.
//!
//! - [`turtle`] assembles the document: prefixes, then each section in fixed order.
//! - [`statement`] renders one subject block and prunes empty values.
//! - [`dmn`] writes the decision-model section, preserved or authored.

pub mod dmn;
pub mod statement;
pub mod turtle;

pub use turtle::{to_turtle, to_turtle_with};
