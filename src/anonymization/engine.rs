//! Main anonymization engine
//!
//! Rewrites declared free-text and identifier columns of a rendered flat
//! table through the persistent mapping store. The engine owns the store
//! for the duration of a run; the caller loads it before the first batch
//! and flushes it after the last.
//!
//! Batches exist solely to bound memory: the mapping carries over between
//! calls, so batch boundaries have no semantic effect and a batched run is
//! value-for-value identical to a single pass.
//!
//! # Examples
//!
//! ```
//! use tabula::anonymization::{AnonymizationEngine, AnonymizationMapping, RoleTable};
//! use tabula::anonymization::roles::FreeTextRole;
//!
//! let mut roles = RoleTable::new();
//! roles.add_free_text("buyer.nodes.name", FreeTextRole::Organization);
//! roles.add_identifier("rowId", Some("PO".to_string()));
//!
//! let mut engine = AnonymizationEngine::new(roles, AnonymizationMapping::new(), 6);
//!
//! let headers = vec!["rowId".to_string(), "buyer.nodes.name".to_string()];
//! let mut rows = vec![vec!["A1".to_string(), "Acme Corp".to_string()]];
//! engine.anonymize_batch(&headers, &mut rows);
//!
//! assert_eq!(rows[0][0], "PO_000001");
//! assert_ne!(rows[0][1], "Acme Corp");
//! ```

use crate::anonymization::generator::{
    format_identifier, hash_token, SyntheticGenerator, FALLBACK_CLASS_TAG,
};
use crate::anonymization::mapping::AnonymizationMapping;
use crate::anonymization::roles::{FreeTextRole, RoleTable};

/// Textual forms normalized to an empty output for identifier columns
const NULL_SENTINELS: [&str; 4] = ["nan", "NaN", "null", "None"];

/// Anonymization engine over rendered table rows
///
/// Single-threaded by construction; the mapping store is never shared.
pub struct AnonymizationEngine {
    roles: RoleTable,
    mapping: AnonymizationMapping,
    generator: SyntheticGenerator,
    sequence_width: usize,
}

impl AnonymizationEngine {
    /// Create an engine from declared roles and a loaded mapping store
    pub fn new(roles: RoleTable, mapping: AnonymizationMapping, sequence_width: usize) -> Self {
        Self::with_generator(roles, mapping, sequence_width, SyntheticGenerator::new())
    }

    /// Create an engine with an explicit generator (tests use a seeded one)
    pub fn with_generator(
        roles: RoleTable,
        mapping: AnonymizationMapping,
        sequence_width: usize,
        generator: SyntheticGenerator,
    ) -> Self {
        Self {
            roles,
            mapping,
            generator,
            sequence_width,
        }
    }

    /// Rewrite declared columns of one batch of rows in place
    ///
    /// Declared columns absent from the headers are skipped silently:
    /// schemas may legitimately vary across optional fields.
    pub fn anonymize_batch(&mut self, headers: &[String], rows: &mut [Vec<String>]) {
        let free_text_columns = self.resolve_free_text(headers);
        let identifier_columns = self.resolve_identifiers(headers);

        for row in rows.iter_mut() {
            for (index, role) in &free_text_columns {
                row[*index] = self.free_text_value(&row[*index], *role);
            }
            for (index, class_tag) in &identifier_columns {
                row[*index] = self.identifier_value(&row[*index], class_tag.as_deref());
            }
        }
    }

    /// Borrow the mapping store (summary reporting)
    pub fn mapping(&self) -> &AnonymizationMapping {
        &self.mapping
    }

    /// Consume the engine, handing the updated mapping store back for flush
    pub fn into_mapping(self) -> AnonymizationMapping {
        self.mapping
    }

    fn resolve_free_text(&self, headers: &[String]) -> Vec<(usize, FreeTextRole)> {
        self.roles
            .free_text_fields()
            .iter()
            .filter_map(|(column, role)| {
                match headers.iter().position(|h| h == column) {
                    Some(index) => Some((index, *role)),
                    None => {
                        tracing::debug!(column = %column, "Declared free-text column absent, skipping");
                        None
                    }
                }
            })
            .collect()
    }

    fn resolve_identifiers(&self, headers: &[String]) -> Vec<(usize, Option<String>)> {
        self.roles
            .identifier_fields()
            .iter()
            .filter_map(|(column, class_tag)| {
                match headers.iter().position(|h| h == column) {
                    Some(index) => Some((index, class_tag.clone())),
                    None => {
                        tracing::debug!(column = %column, "Declared identifier column absent, skipping");
                        None
                    }
                }
            })
            .collect()
    }

    /// Replace a free-text value, reusing the stored synthetic when present
    fn free_text_value(&mut self, original: &str, role: FreeTextRole) -> String {
        if original.trim().is_empty() {
            // Blank in, blank out; blanks are never mapped.
            return String::new();
        }

        if let Some(existing) = self.mapping.free_text_value(original) {
            return existing.to_string();
        }

        let synthetic = self.generator.free_text(role);
        self.mapping
            .insert_free_text(original.to_string(), synthetic.clone());
        synthetic
    }

    /// Replace an identifier value, reusing the stored synthetic when present
    fn identifier_value(&mut self, original: &str, class_tag: Option<&str>) -> String {
        let trimmed = original.trim();
        if trimmed.is_empty() || NULL_SENTINELS.contains(&trimmed) {
            return String::new();
        }

        if let Some(entry) = self.mapping.identifier_value(trimmed) {
            return entry.synthetic.clone();
        }

        let (synthetic, tag) = match class_tag {
            Some(tag) => {
                let sequence = self.mapping.next_sequence(tag);
                (
                    format_identifier(tag, sequence, self.sequence_width),
                    tag.to_string(),
                )
            }
            None => (hash_token(trimmed), FALLBACK_CLASS_TAG.to_string()),
        };

        self.mapping
            .insert_identifier(trimmed.to_string(), synthetic.clone(), tag);
        synthetic
    }
}
