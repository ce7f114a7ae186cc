//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::TabulaConfig;
use crate::domain::errors::TabulaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TabulaConfig
/// 4. Applies environment variable overrides (TABULA_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use tabula::config::loader::load_config;
///
/// let config = load_config("tabula.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TabulaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TabulaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TabulaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: TabulaConfig = toml::from_str(&contents)
        .map_err(|e| TabulaError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        TabulaError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TabulaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using TABULA_* prefix
///
/// Environment variables follow the pattern: TABULA_<SECTION>_<KEY>
/// For example: TABULA_INPUT_PATH, TABULA_OUTPUT_DELIMITER
fn apply_env_overrides(config: &mut TabulaConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("TABULA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Input overrides
    if let Ok(val) = std::env::var("TABULA_INPUT_PATH") {
        config.input.path = val;
    }
    if let Ok(val) = std::env::var("TABULA_INPUT_RECORD_PATH") {
        config.input.record_path = val.split('.').map(str::to_string).collect();
    }

    // Output overrides
    if let Ok(val) = std::env::var("TABULA_OUTPUT_FLAT_PATH") {
        config.output.flat_path = val;
    }
    if let Ok(val) = std::env::var("TABULA_OUTPUT_ANONYMIZED_PATH") {
        config.output.anonymized_path = val;
    }
    if let Ok(val) = std::env::var("TABULA_OUTPUT_DELIMITER") {
        config.output.delimiter = val;
    }

    // Anonymization overrides
    if let Ok(val) = std::env::var("TABULA_ANONYMIZATION_FREE_TEXT_MAPPING_PATH") {
        config.anonymization.free_text_mapping_path = val;
    }
    if let Ok(val) = std::env::var("TABULA_ANONYMIZATION_IDENTIFIER_MAPPING_PATH") {
        config.anonymization.identifier_mapping_path = val;
    }
    if let Ok(val) = std::env::var("TABULA_ANONYMIZATION_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.anonymization.batch_size = size;
        }
    }
    if let Ok(val) = std::env::var("TABULA_ANONYMIZATION_SEQUENCE_WIDTH") {
        if let Ok(width) = val.parse() {
            config.anonymization.sequence_width = width;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("TABULA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TABULA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TEST_VAR", "test_value");
        let input = "path = \"${TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"test_value\"\n");
        std::env::remove_var("TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("MISSING_VAR");
        let input = "path = \"${MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("COMMENTED_VAR");
        let input = "# path = \"${COMMENTED_VAR}\"\nname = \"tabula\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[input]
path = "export.json"
record_path = ["data", "biztransactions", "nodes"]

[output]
flat_path = "flat.csv"
anonymized_path = "anonymized.csv"

[anonymization]
batch_size = 50000

[[anonymization.free_text]]
column = "buyer.nodes.name"
role = "organization"

[[anonymization.identifier]]
column = "rowId"
class = "PO"

[numeric]
columns = ["items.nodes.quantity"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.input.path, "export.json");
        assert_eq!(config.output.delimiter, ";");
        assert_eq!(config.anonymization.batch_size, 50_000);
        assert_eq!(config.anonymization.free_text.len(), 1);
        assert_eq!(
            config.anonymization.identifier[0].class.as_deref(),
            Some("PO")
        );
        assert_eq!(config.numeric.columns, vec!["items.nodes.quantity"]);
    }

    #[test]
    fn test_load_config_invalid_values_rejected() {
        let toml_content = r#"
[input]
path = "export.json"

[output]
flat_path = "flat.csv"
anonymized_path = "anonymized.csv"
delimiter = "toolong"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
