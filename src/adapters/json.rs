//! Input document adapter
//!
//! Reads the JSON export document and unwraps its fixed envelope: the array
//! of record nodes lives at a configured nesting path (for example
//! `data.biztransactions.nodes`). Each record node becomes a [`ValueTree`].
//!
//! Malformed or unparseable input is fatal: no row is produced.

use crate::domain::{Result, TabulaError, ValueTree};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a document and extract its record collection
pub fn load_records(path: &Path, record_path: &[String]) -> Result<Vec<ValueTree>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TabulaError::Input(format!("Failed to read {}: {e}", path.display()))
    })?;

    let document: Value = serde_json::from_str(&contents).map_err(|e| {
        TabulaError::Input(format!("Failed to parse {}: {e}", path.display()))
    })?;

    let records = extract_records(document, record_path)?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded input document"
    );

    Ok(records)
}

/// Walk the envelope path and convert the record array to value trees
pub fn extract_records(document: Value, record_path: &[String]) -> Result<Vec<ValueTree>> {
    let mut node = &document;
    for (depth, key) in record_path.iter().enumerate() {
        node = node.get(key).ok_or_else(|| {
            TabulaError::Input(format!(
                "Envelope path segment '{}' not found at depth {depth}",
                key
            ))
        })?;
    }

    let items = node.as_array().ok_or_else(|| {
        TabulaError::Input(format!(
            "Envelope path '{}' does not point at an array of records",
            record_path.join(".")
        ))
    })?;

    Ok(items.iter().cloned().map(ValueTree::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn envelope_path() -> Vec<String> {
        vec![
            "data".to_string(),
            "biztransactions".to_string(),
            "nodes".to_string(),
        ]
    }

    #[test]
    fn test_extract_records_from_envelope() {
        let document = json!({
            "data": {"biztransactions": {"nodes": [
                {"rowId": "R1"},
                {"rowId": "R2"}
            ]}}
        });

        let records = extract_records(document, &envelope_path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].get("rowId").is_some());
    }

    #[test]
    fn test_extract_records_missing_segment_is_fatal() {
        let document = json!({"data": {}});
        let result = extract_records(document, &envelope_path());
        assert!(matches!(result, Err(TabulaError::Input(_))));
    }

    #[test]
    fn test_extract_records_non_array_is_fatal() {
        let document = json!({"data": {"biztransactions": {"nodes": {"not": "an array"}}}});
        let result = extract_records(document, &envelope_path());
        assert!(matches!(result, Err(TabulaError::Input(_))));
    }

    #[test]
    fn test_extract_records_empty_path_uses_root() {
        let document = json!([{"a": 1}]);
        let records = extract_records(document, &[]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data": {{"biztransactions": {{"nodes": [{{"rowId": "R1"}}]}}}}}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let records = load_records(file.path(), &envelope_path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_records_unparseable_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        file.flush().unwrap();

        let result = load_records(file.path(), &envelope_path());
        assert!(matches!(result, Err(TabulaError::Input(_))));
    }

    #[test]
    fn test_load_records_missing_file_is_fatal() {
        let result = load_records(Path::new("does-not-exist.json"), &envelope_path());
        assert!(matches!(result, Err(TabulaError::Input(_))));
    }
}
