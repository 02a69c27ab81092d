//! Reference documents for the conformance suite.
//!
//! Each constant holds a Turtle document as it is found in practice: one
//! written by the current generator, one carrying a decision model from an
//! older export, and one from a foreign tool using a different dialect.

mod aow_service;
mod foreign_dialect;
mod legacy_dmn;

pub use aow_service::AOW_SERVICE;
pub use foreign_dialect::FOREIGN_DIALECT;
pub use legacy_dmn::LEGACY_DMN;

/// Every fixture with its name, in check order.
pub const ALL: &[(&str, &str)] = &[
    ("aow_service", AOW_SERVICE),
    ("legacy_dmn", LEGACY_DMN),
    ("foreign_dialect", FOREIGN_DIALECT),
];
