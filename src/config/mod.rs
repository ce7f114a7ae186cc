//! Configuration management for Tabula.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Tabula uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`TABULA_*` prefix)
//! - Default values for optional settings
//! - Type-safe configuration structs with validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabula::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tabula.toml")?;
//!
//! println!("Input document: {}", config.input.path);
//! println!("Flat table: {}", config.output.flat_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! path = "export.json"
//! record_path = ["data", "biztransactions", "nodes"]
//!
//! [output]
//! flat_path = "flat.csv"
//! anonymized_path = "anonymized.csv"
//! delimiter = ";"
//!
//! [anonymization]
//! free_text_mapping_path = "mappings/free_text.csv"
//! identifier_mapping_path = "mappings/identifiers.csv"
//! batch_size = 100000
//!
//! [[anonymization.free_text]]
//! column = "buyer.nodes.name"
//! role = "organization"
//!
//! [[anonymization.identifier]]
//! column = "rowId"
//! class = "PO"
//!
//! [numeric]
//! columns = ["items.nodes.quantity"]
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    AnonymizationConfig, ApplicationConfig, FreeTextField, IdentifierField, InputConfig,
    LoggingConfig, NumericConfig, OutputConfig, TabulaConfig,
};
