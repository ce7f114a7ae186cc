//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod anonymize;
pub mod flatten;
pub mod init;
pub mod run;
pub mod validate;

use crate::core::RunSummary;

/// Print a run summary in a consistent shape across commands
pub(crate) fn print_summary(summary: &RunSummary) {
    println!();
    println!("Run Summary:");
    if summary.records_in > 0 {
        println!("  Records read: {}", summary.records_in);
    }
    println!("  Columns: {}", summary.columns);
    println!("  Rows written: {}", summary.rows_out);
    if summary.free_text_mapped > 0 || summary.identifiers_mapped > 0 {
        println!("  Free-text mappings: {}", summary.free_text_mapped);
        println!("  Identifier mappings: {}", summary.identifiers_mapped);
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();
}
