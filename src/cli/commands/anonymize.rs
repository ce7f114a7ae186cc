//! Anonymize command implementation
//!
//! This module implements the `anonymize` command: an existing flat table
//! file is read in batches and rewritten with synthetic values.

use super::print_summary;
use crate::config::load_config;
use crate::core::Pipeline;
use clap::Args;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting anonymize-only run");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Anonymizing flat table");
        println!("  Flat table: {}", config.output.flat_path);
        println!("  Anonymized table: {}", config.output.anonymized_path);

        let summary = Pipeline::new(config).anonymize_only()?;

        println!("✅ Anonymization complete");
        print_summary(&summary);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymize_with_missing_config_is_config_error() {
        let args = AnonymizeArgs {};
        let code = args.execute("definitely-missing.toml").unwrap();
        assert_eq!(code, 2);
    }
}
