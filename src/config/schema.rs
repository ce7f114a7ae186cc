//! Configuration schema types
//!
//! This module defines the configuration structure for Tabula.

use crate::anonymization::FreeTextRole;
use serde::{Deserialize, Serialize};

/// Main Tabula configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabulaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input document settings
    pub input: InputConfig,

    /// Output table settings
    pub output: OutputConfig,

    /// Anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Declared numeric columns
    #[serde(default)]
    pub numeric: NumericConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TabulaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.anonymization.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Input document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the JSON export document
    pub path: String,

    /// Nesting path of the record array inside the document envelope
    #[serde(default = "default_record_path")]
    pub record_path: Vec<String>,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("input.path cannot be empty".to_string());
        }
        if self.record_path.iter().any(|s| s.is_empty()) {
            return Err("input.record_path segments cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Output table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path for the flattened (pre-anonymization) table
    pub flat_path: String,

    /// Path for the anonymized table
    pub anonymized_path: String,

    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.flat_path.is_empty() {
            return Err("output.flat_path cannot be empty".to_string());
        }
        if self.anonymized_path.is_empty() {
            return Err("output.anonymized_path cannot be empty".to_string());
        }
        if self.delimiter.len() != 1 || !self.delimiter.is_ascii() {
            return Err(format!(
                "output.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ));
        }
        Ok(())
    }

    /// The delimiter as the byte the `csv` crate expects
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes()[0]
    }
}

/// Anonymization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Path of the persisted free-text mapping (original,anonymized)
    #[serde(default = "default_free_text_mapping_path")]
    pub free_text_mapping_path: String,

    /// Path of the persisted identifier mapping (original,fake,id_type)
    #[serde(default = "default_identifier_mapping_path")]
    pub identifier_mapping_path: String,

    /// Rows processed per batch; bounds memory only
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Zero-padding width of identifier sequence numbers
    #[serde(default = "default_sequence_width")]
    pub sequence_width: usize,

    /// Declared free-text columns and their roles
    #[serde(default)]
    pub free_text: Vec<FreeTextField>,

    /// Declared identifier columns and their class tags
    #[serde(default)]
    pub identifier: Vec<IdentifierField>,
}

impl AnonymizationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("anonymization.batch_size must be greater than 0".to_string());
        }
        if !(1..=12).contains(&self.sequence_width) {
            return Err(format!(
                "anonymization.sequence_width must be between 1 and 12, got {}",
                self.sequence_width
            ));
        }
        for field in &self.free_text {
            if field.column.is_empty() {
                return Err("anonymization.free_text column cannot be empty".to_string());
            }
        }
        for field in &self.identifier {
            if field.column.is_empty() {
                return Err("anonymization.identifier column cannot be empty".to_string());
            }
            if let Some(class) = &field.class {
                if class.is_empty() {
                    return Err(format!(
                        "anonymization.identifier class for column '{}' cannot be empty",
                        field.column
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            free_text_mapping_path: default_free_text_mapping_path(),
            identifier_mapping_path: default_identifier_mapping_path(),
            batch_size: default_batch_size(),
            sequence_width: default_sequence_width(),
            free_text: vec![],
            identifier: vec![],
        }
    }
}

/// A declared free-text column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeTextField {
    /// Dot-joined column path in the flat table
    pub column: String,

    /// Role deciding the flavor of synthetic replacement
    #[serde(default)]
    pub role: FreeTextRole,
}

/// A declared identifier column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierField {
    /// Dot-joined column path in the flat table
    pub column: String,

    /// Class tag for sequential tokens; omit to use the hash fallback
    #[serde(default)]
    pub class: Option<String>,
}

/// Declared numeric columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumericConfig {
    /// Columns whose non-numeric content is coerced to the missing marker
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_record_path() -> Vec<String> {
    vec![
        "data".to_string(),
        "biztransactions".to_string(),
        "nodes".to_string(),
    ]
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_free_text_mapping_path() -> String {
    "mappings/free_text.csv".to_string()
}

fn default_identifier_mapping_path() -> String {
    "mappings/identifiers.csv".to_string()
}

fn default_batch_size() -> usize {
    100_000
}

fn default_sequence_width() -> usize {
    6
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> TabulaConfig {
        TabulaConfig {
            application: ApplicationConfig::default(),
            input: InputConfig {
                path: "export.json".to_string(),
                record_path: default_record_path(),
            },
            output: OutputConfig {
                flat_path: "flat.csv".to_string(),
                anonymized_path: "anonymized.csv".to_string(),
                delimiter: default_delimiter(),
            },
            anonymization: AnonymizationConfig::default(),
            numeric: NumericConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_minimal_config_is_valid() {
        assert!(minimal_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = minimal_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_input_path_rejected() {
        let mut config = minimal_config();
        config.input.path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_multi_character_delimiter_rejected() {
        let mut config = minimal_config();
        config.output.delimiter = ";;".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delimiter_byte() {
        let config = minimal_config();
        assert_eq!(config.output.delimiter_byte(), b';');
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = minimal_config();
        config.anonymization.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sequence_width_out_of_range_rejected() {
        let mut config = minimal_config();
        config.anonymization.sequence_width = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_identifier_class_rejected() {
        let mut config = minimal_config();
        config.anonymization.identifier.push(IdentifierField {
            column: "rowId".to_string(),
            class: Some(String::new()),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let anonymization = AnonymizationConfig::default();
        assert_eq!(anonymization.batch_size, 100_000);
        assert_eq!(anonymization.sequence_width, 6);
        assert_eq!(default_delimiter(), ";");
    }
}
