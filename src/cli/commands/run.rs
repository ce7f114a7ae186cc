//! Run command implementation
//!
//! This module implements the `run` command: the full pipeline from the
//! JSON input document to the anonymized flat table file.

use super::print_summary;
use crate::config::load_config;
use crate::core::Pipeline;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting full pipeline run");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("🚀 Running pipeline");
        println!("  Input: {}", config.input.path);
        println!("  Flat table: {}", config.output.flat_path);
        println!("  Anonymized table: {}", config.output.anonymized_path);

        let summary = Pipeline::new(config).run()?;

        println!("✅ Pipeline run complete");
        print_summary(&summary);
        Ok(0)
    }
}
