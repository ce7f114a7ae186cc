//! Deterministic anonymization
//!
//! This module rewrites free-text and identifier columns of the flat table
//! with stable synthetic substitutes.
//!
//! # Architecture
//!
//! - **[`roles`]**: declared table of column path → role, resolved once per
//!   table, never re-matched per value
//! - **[`mapping`]**: persistent original → synthetic store with explicit
//!   load and flush; the source of cross-run determinism
//! - **[`generator`]**: fresh synthetic values (company/person names via the
//!   `fake` crate, sequential identifier tokens, hash fallback)
//! - **[`engine`]**: orchestrates the three over batches of rendered rows
//!
//! # Determinism
//!
//! Within the life of a mapping store, a given original value always maps
//! to the same synthetic value, regardless of batch boundaries or how many
//! runs have passed. Re-running over previously seen input redraws nothing.

pub mod engine;
pub mod generator;
pub mod mapping;
pub mod roles;

// Re-export commonly used types
pub use engine::AnonymizationEngine;
pub use generator::SyntheticGenerator;
pub use mapping::{AnonymizationMapping, IdentifierEntry};
pub use roles::{FreeTextRole, RoleTable};
