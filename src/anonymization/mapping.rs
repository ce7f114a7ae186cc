//! Persistent anonymization mapping store
//!
//! Two append-only partitions back cross-run determinism: a free-text map
//! (`original` → `anonymized`) and an identifier map (`original` →
//! `{fake, id_type}`), plus per-class counters driving identifier synthesis.
//!
//! The store is loaded fully at process start, mutated in memory while
//! batches run, and persisted in full (overwrite) at process end. There is
//! no incremental flush: a mid-run failure loses in-memory progress since
//! the start of the run, and a retry reprocesses all input from the last
//! completed run's snapshot.

use crate::domain::{Result, TabulaError};
use std::collections::HashMap;
use std::path::Path;

/// One identifier mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierEntry {
    /// The synthetic replacement value
    pub synthetic: String,
    /// The class tag the value was synthesized under
    pub class_tag: String,
}

/// In-memory mapping store with explicit load/flush
///
/// Invariants: once an original value is mapped its synthetic value is
/// immutable for the life of the store; per-class counters never decrease
/// and sequence numbers are never reused.
#[derive(Debug, Default)]
pub struct AnonymizationMapping {
    free_text: HashMap<String, String>,
    identifiers: HashMap<String, IdentifierEntry>,
    counters: HashMap<String, u64>,
}

impl AnonymizationMapping {
    /// An empty store (first run)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both partitions from their persisted files
    ///
    /// A missing file means an empty partition, not an error. Per-class
    /// counters are restored from the highest sequence number found per
    /// class tag, so a new run continues where the previous one stopped.
    pub fn load(free_text_path: &Path, identifier_path: &Path) -> Result<Self> {
        let mut store = Self::new();

        if free_text_path.exists() {
            let mut reader = csv::Reader::from_path(free_text_path).map_err(|e| {
                TabulaError::MappingStore(format!(
                    "Failed to open free-text mapping {}: {e}",
                    free_text_path.display()
                ))
            })?;
            for record in reader.records() {
                let record = record?;
                let original = record.get(0).unwrap_or_default();
                let anonymized = record.get(1).unwrap_or_default();
                store
                    .free_text
                    .insert(original.to_string(), anonymized.to_string());
            }
        }

        if identifier_path.exists() {
            let mut reader = csv::Reader::from_path(identifier_path).map_err(|e| {
                TabulaError::MappingStore(format!(
                    "Failed to open identifier mapping {}: {e}",
                    identifier_path.display()
                ))
            })?;
            for record in reader.records() {
                let record = record?;
                let original = record.get(0).unwrap_or_default().to_string();
                let synthetic = record.get(1).unwrap_or_default().to_string();
                let class_tag = record.get(2).unwrap_or_default().to_string();

                if let Some(sequence) = trailing_sequence(&synthetic) {
                    let counter = store.counters.entry(class_tag.clone()).or_insert(0);
                    *counter = (*counter).max(sequence);
                }

                store.identifiers.insert(
                    original,
                    IdentifierEntry {
                        synthetic,
                        class_tag,
                    },
                );
            }
        }

        tracing::info!(
            free_text = store.free_text.len(),
            identifiers = store.identifiers.len(),
            classes = store.counters.len(),
            "Loaded anonymization mapping store"
        );

        Ok(store)
    }

    /// Persist both partitions, overwriting the previous files in full
    pub fn flush(&self, free_text_path: &Path, identifier_path: &Path) -> Result<()> {
        // Sorted by original value so reruns produce byte-identical files.
        let mut writer = csv::Writer::from_path(free_text_path).map_err(|e| {
            TabulaError::MappingStore(format!(
                "Failed to write free-text mapping {}: {e}",
                free_text_path.display()
            ))
        })?;
        writer.write_record(["original", "anonymized"])?;
        let mut free_text: Vec<_> = self.free_text.iter().collect();
        free_text.sort_by(|a, b| a.0.cmp(b.0));
        for (original, anonymized) in free_text {
            writer.write_record([original.as_str(), anonymized.as_str()])?;
        }
        writer.flush()?;

        let mut writer = csv::Writer::from_path(identifier_path).map_err(|e| {
            TabulaError::MappingStore(format!(
                "Failed to write identifier mapping {}: {e}",
                identifier_path.display()
            ))
        })?;
        writer.write_record(["original", "fake", "id_type"])?;
        let mut identifiers: Vec<_> = self.identifiers.iter().collect();
        identifiers.sort_by(|a, b| a.0.cmp(b.0));
        for (original, entry) in identifiers {
            writer.write_record([
                original.as_str(),
                entry.synthetic.as_str(),
                entry.class_tag.as_str(),
            ])?;
        }
        writer.flush()?;

        tracing::info!(
            free_text = self.free_text.len(),
            identifiers = self.identifiers.len(),
            "Persisted anonymization mapping store"
        );

        Ok(())
    }

    /// Look up a stored free-text replacement
    pub fn free_text_value(&self, original: &str) -> Option<&str> {
        self.free_text.get(original).map(String::as_str)
    }

    /// Store a free-text mapping; existing entries are never overwritten
    pub fn insert_free_text(&mut self, original: String, synthetic: String) {
        self.free_text.entry(original).or_insert(synthetic);
    }

    /// Look up a stored identifier replacement
    pub fn identifier_value(&self, original: &str) -> Option<&IdentifierEntry> {
        self.identifiers.get(original)
    }

    /// Store an identifier mapping; existing entries are never overwritten
    pub fn insert_identifier(&mut self, original: String, synthetic: String, class_tag: String) {
        self.identifiers.entry(original).or_insert(IdentifierEntry {
            synthetic,
            class_tag,
        });
    }

    /// Advance and return the next sequence number for a class
    pub fn next_sequence(&mut self, class_tag: &str) -> u64 {
        let counter = self.counters.entry(class_tag.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Current counter value for a class (0 if unseen)
    pub fn counter(&self, class_tag: &str) -> u64 {
        self.counters.get(class_tag).copied().unwrap_or(0)
    }

    /// Number of stored free-text mappings
    pub fn free_text_len(&self) -> usize {
        self.free_text.len()
    }

    /// Number of stored identifier mappings
    pub fn identifier_len(&self) -> usize {
        self.identifiers.len()
    }
}

/// Parse the numeric sequence after the last underscore, if any
fn trailing_sequence(synthetic: &str) -> Option<u64> {
    synthetic.rsplit('_').next()?.parse().ok()
}
