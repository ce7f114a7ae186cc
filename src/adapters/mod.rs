//! External I/O adapters
//!
//! Everything that touches the filesystem lives here:
//!
//! - [`json`] - input document reading and envelope unwrapping
//! - [`csv`] - delimited flat-table reading and writing
//!
//! The mapping store's own persistence lives with the store in
//! [`crate::anonymization::mapping`].

pub mod csv;
pub mod json;

pub use self::csv::{TableReader, TableWriter};
pub use self::json::load_records;
