//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Tabula configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates internally, so a successful load means a
        // valid configuration
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Input: {}", config.input.path);
        println!("  Record Path: {}", config.input.record_path.join("."));
        println!("  Flat Table: {}", config.output.flat_path);
        println!("  Anonymized Table: {}", config.output.anonymized_path);
        println!("  Delimiter: '{}'", config.output.delimiter);
        println!("  Batch Size: {}", config.anonymization.batch_size);
        println!(
            "  Free-Text Columns: {}",
            config.anonymization.free_text.len()
        );
        println!(
            "  Identifier Columns: {}",
            config.anonymization.identifier.len()
        );
        println!("  Numeric Columns: {}", config.numeric.columns.len());
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_missing_file_is_config_error() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-missing.toml").unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_valid_file() {
        let toml_content = r#"
[input]
path = "export.json"

[output]
flat_path = "flat.csv"
anonymized_path = "anonymized.csv"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&temp_file.path().to_string_lossy())
            .unwrap();
        assert_eq!(code, 0);
    }
}
