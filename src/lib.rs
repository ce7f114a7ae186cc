// Tabula - JSON flattening and anonymization ETL tool
// Copyright (c) 2025 Tabula Contributors
// Licensed under the MIT License

//! # Tabula - JSON flattening and anonymization ETL
//!
//! Tabula ingests deeply nested, schema-irregular JSON export documents and
//! produces a flat, anonymized, `;`-delimited tabular dataset suitable for
//! downstream dimensional loading.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Discovering** the leaf-path schema across an irregular record set
//! - **Flattening** nested trees into a flat table, exploding list values
//!   into rows column by column
//! - **Anonymizing** free-text and identifier columns with stable synthetic
//!   substitutes, backed by a persistent mapping store
//!
//! ## Architecture
//!
//! Tabula follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (schema discovery, extraction, flattening,
//!   pipeline coordination)
//! - [`anonymization`] - Deterministic value replacement and the mapping
//!   store
//! - [`adapters`] - External I/O (JSON document input, delimited table
//!   output)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabula::config::load_config;
//! use tabula::core::Pipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("tabula.toml")?;
//!
//!     let summary = Pipeline::new(config).run()?;
//!
//!     println!("Wrote {} rows across {} columns", summary.rows_out, summary.columns);
//!     Ok(())
//! }
//! ```
//!
//! ## Determinism
//!
//! Two properties make runs reproducible:
//!
//! - Schema order, row order and list explosion order are all derived from
//!   document order, so identical input yields an identical flat table.
//! - The anonymization mapping store persists every original → synthetic
//!   assignment; reruns over previously seen values redraw nothing.
//!
//! ```rust,no_run
//! use tabula::anonymization::{AnonymizationEngine, AnonymizationMapping, RoleTable};
//! use tabula::anonymization::roles::FreeTextRole;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mapping = AnonymizationMapping::load(
//!     Path::new("mappings/free_text.csv"),
//!     Path::new("mappings/identifiers.csv"),
//! )?;
//!
//! let mut roles = RoleTable::new();
//! roles.add_free_text("buyer.nodes.name", FreeTextRole::Organization);
//!
//! let engine = AnonymizationEngine::new(roles, mapping, 6);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Tabula uses the [`domain::TabulaError`] type for all errors:
//!
//! ```rust,no_run
//! use tabula::domain::TabulaError;
//!
//! fn example() -> Result<(), TabulaError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = tabula::config::load_config("tabula.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Tabula uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting pipeline run");
//! warn!(column = "items.nodes.qty", "Non-numeric values coerced to missing");
//! ```

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
