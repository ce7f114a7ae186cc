//! Flatten command implementation
//!
//! This module implements the `flatten` command: the input document is
//! flattened to the flat table file, with no anonymization.

use super::print_summary;
use crate::config::load_config;
use crate::core::Pipeline;
use clap::Args;

/// Arguments for the flatten command
#[derive(Args, Debug)]
pub struct FlattenArgs {}

impl FlattenArgs {
    /// Execute the flatten command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting flatten-only run");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Flattening input document");
        println!("  Input: {}", config.input.path);
        println!("  Flat table: {}", config.output.flat_path);

        let summary = Pipeline::new(config).flatten_only()?;

        println!("✅ Flatten complete");
        print_summary(&summary);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_with_missing_config_is_config_error() {
        let args = FlattenArgs {};
        let code = args.execute("definitely-missing.toml").unwrap();
        assert_eq!(code, 2);
    }
}
