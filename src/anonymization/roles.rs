//! Declared field roles
//!
//! Columns to anonymize are declared up front as an explicit table mapping
//! column path → role. Resolution happens once when the engine binds to a
//! table's headers, never by re-matching column names per value.

use serde::{Deserialize, Serialize};

/// Role class for a declared free-text column
///
/// The role selects the synthetic generator used for previously unseen
/// original values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FreeTextRole {
    /// Organization-like names (buyers, traders): synthetic company name
    Organization,
    /// Organization-like facility names: synthetic company name plus a fixed
    /// descriptive suffix
    Facility,
    /// Person-like names (contacts): synthetic person name
    Person,
    /// Anything else: a generic synthetic token
    #[default]
    Generic,
}

/// Declared roles for free-text and identifier columns
///
/// Identifier columns carry an optional class tag; columns without a class
/// fall back to hash-derived tokens.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    free_text: Vec<(String, FreeTextRole)>,
    identifiers: Vec<(String, Option<String>)>,
}

impl RoleTable {
    /// An empty role table (anonymization becomes a no-op)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a free-text column
    pub fn add_free_text(&mut self, column: impl Into<String>, role: FreeTextRole) {
        self.free_text.push((column.into(), role));
    }

    /// Declare an identifier column with an optional class tag
    pub fn add_identifier(&mut self, column: impl Into<String>, class_tag: Option<String>) {
        self.identifiers.push((column.into(), class_tag));
    }

    /// Declared free-text columns in declaration order
    pub fn free_text_fields(&self) -> &[(String, FreeTextRole)] {
        &self.free_text
    }

    /// Declared identifier columns in declaration order
    pub fn identifier_fields(&self) -> &[(String, Option<String>)] {
        &self.identifiers
    }

    /// Whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.free_text.is_empty() && self.identifiers.is_empty()
    }
}
