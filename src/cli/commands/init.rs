//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "tabula.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tabula configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point [input] at your JSON export document");
                println!("  3. Declare free-text and identifier columns under [anonymization]");
                println!("  4. Validate configuration: tabula validate-config");
                println!("  5. Run the pipeline: tabula run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Tabula Configuration File
# JSON flattening and anonymization ETL tool

[application]
log_level = "info"

[input]
# JSON export document to ingest
path = "export.json"

# Nesting path of the record array inside the document envelope
record_path = ["data", "biztransactions", "nodes"]

[output]
flat_path = "flat.csv"
anonymized_path = "anonymized.csv"
delimiter = ";"

[anonymization]
# Persistent mapping files; reruns reuse previously assigned values
free_text_mapping_path = "mappings/free_text.csv"
identifier_mapping_path = "mappings/identifiers.csv"

# Rows per batch (bounds memory, no effect on output)
batch_size = 100000

# Zero-padding width of identifier sequence numbers
sequence_width = 6

# Free-text columns: role is organization, facility, person or generic
[[anonymization.free_text]]
column = "buyer.nodes.name"
role = "organization"

# Identifier columns: class tags drive sequential tokens like PO_000001.
# Omit class to fall back to hash-derived tokens.
[[anonymization.identifier]]
column = "rowId"
class = "PO"

[numeric]
# Columns whose non-numeric content is coerced to the missing marker
columns = []

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabula.toml");
        fs::write(&path, InitArgs::generate_config()).unwrap();

        let config = crate::config::load_config(&path).unwrap();
        assert_eq!(config.output.delimiter, ";");
        assert_eq!(config.anonymization.sequence_width, 6);
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabula.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabula.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[input]"));
    }
}
