//! Domain models and types for Tabula.
//!
//! This module contains the core domain models shared by schema discovery,
//! flattening, and anonymization.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Nested records** ([`ValueTree`]) as a tagged variant with exhaustive
//!   pattern matching for traversal
//! - **Leaf addressing** ([`ColumnPath`]) with array-eliding dot paths
//! - **Cardinality-shaped values** ([`Cell`], [`Scalar`])
//! - **The flat table** ([`FlatTable`])
//! - **Error types** ([`TabulaError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use tabula::domain::{Result, TabulaError};
//!
//! fn example() -> Result<()> {
//!     Err(TabulaError::Input("not a JSON object".to_string()))
//! }
//! ```

pub mod cell;
pub mod errors;
pub mod path;
pub mod result;
pub mod table;
pub mod value;

// Re-export commonly used types for convenience
pub use cell::{Cell, Scalar};
pub use errors::TabulaError;
pub use path::ColumnPath;
pub use result::Result;
pub use table::FlatTable;
pub use value::ValueTree;
