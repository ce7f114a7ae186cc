//! Core transformation logic
//!
//! The three pure stages and their coordinator:
//!
//! - [`schema`] - first-encounter schema discovery over record trees
//! - [`extract`] - cardinality-driven leaf extraction along a column path
//! - [`flatten`] - table materialization and sequential list explosion
//! - [`pipeline`] - the end-to-end run over a loaded configuration
//!
//! Schema discovery, extraction and flattening never touch the filesystem;
//! all I/O is behind [`crate::adapters`] and sequenced by the pipeline.

pub mod extract;
pub mod flatten;
pub mod pipeline;
pub mod schema;

// Re-export commonly used items
pub use extract::extract;
pub use flatten::flatten;
pub use pipeline::{Pipeline, RunSummary};
pub use schema::discover_schema;
