//! Pipeline coordinator
//!
//! Sequences the full run: read document → discover schema → flatten →
//! anonymize in bounded batches → write outputs → flush the mapping store.
//! Strictly sequential and single-threaded; the global row order is record
//! order times per-record explosion order, so reruns over identical input
//! and an unchanged mapping store produce identical output.
//!
//! The flatten-only and anonymize-only entry points cover the two halves
//! separately: `flatten_only` stops after the flat table file, and
//! `anonymize_only` starts from an existing flat table file instead of a
//! JSON document.

use crate::adapters::csv::{TableReader, TableWriter};
use crate::adapters::json::load_records;
use crate::anonymization::{AnonymizationEngine, AnonymizationMapping, RoleTable};
use crate::config::TabulaConfig;
use crate::core::flatten::flatten;
use crate::core::schema::discover_schema;
use crate::domain::Result;
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the input document (0 for anonymize-only runs)
    pub records_in: usize,
    /// Columns in the flat table
    pub columns: usize,
    /// Data rows written to the output file
    pub rows_out: usize,
    /// Free-text mappings in the store after the run
    pub free_text_mapped: usize,
    /// Identifier mappings in the store after the run
    pub identifiers_mapped: usize,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

/// Coordinates one run over a loaded configuration
pub struct Pipeline {
    config: TabulaConfig,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration
    pub fn new(config: TabulaConfig) -> Self {
        Self { config }
    }

    /// Full run: JSON document → flat table file → anonymized table file
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();

        let (headers, mut rows, records_in) = self.build_flat_rows()?;
        self.write_table(&self.config.output.flat_path, &headers, &rows)?;

        let (rows_out, free_text_mapped, identifiers_mapped) =
            self.anonymize_rows(&headers, &mut rows)?;
        let summary = RunSummary {
            records_in,
            columns: headers.len(),
            rows_out,
            free_text_mapped,
            identifiers_mapped,
            duration: started.elapsed(),
        };

        tracing::info!(
            records = summary.records_in,
            columns = summary.columns,
            rows = summary.rows_out,
            duration_ms = summary.duration.as_millis(),
            "Pipeline run complete"
        );

        Ok(summary)
    }

    /// Flatten only: JSON document → flat table file, no anonymization
    pub fn flatten_only(&self) -> Result<RunSummary> {
        let started = Instant::now();

        let (headers, rows, records_in) = self.build_flat_rows()?;
        self.write_table(&self.config.output.flat_path, &headers, &rows)?;

        Ok(RunSummary {
            records_in,
            columns: headers.len(),
            rows_out: rows.len(),
            free_text_mapped: 0,
            identifiers_mapped: 0,
            duration: started.elapsed(),
        })
    }

    /// Anonymize only: existing flat table file → anonymized table file
    ///
    /// Reads the flat table in batches of the configured size; the mapping
    /// store carries over between batches, so the output is identical to a
    /// single-pass run.
    pub fn anonymize_only(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let delimiter = self.config.output.delimiter_byte();

        let mut reader =
            TableReader::open(Path::new(&self.config.output.flat_path), delimiter)?;
        let headers = reader.headers().to_vec();

        let mut engine = self.build_engine()?;
        let mut writer = TableWriter::create(
            Path::new(&self.config.output.anonymized_path),
            delimiter,
            &headers,
        )?;

        loop {
            let mut batch = reader.read_batch(self.config.anonymization.batch_size)?;
            if batch.is_empty() {
                break;
            }
            engine.anonymize_batch(&headers, &mut batch);
            writer.write_rows(&batch)?;
        }
        writer.flush()?;
        let rows_out = writer.rows_written();

        let mapping = engine.into_mapping();
        self.flush_mapping(&mapping)?;

        Ok(RunSummary {
            records_in: 0,
            columns: headers.len(),
            rows_out,
            free_text_mapped: mapping.free_text_len(),
            identifiers_mapped: mapping.identifier_len(),
            duration: started.elapsed(),
        })
    }

    /// Load, discover, flatten, render and coerce; the shared front half
    fn build_flat_rows(&self) -> Result<(Vec<String>, Vec<Vec<String>>, usize)> {
        let records = load_records(
            Path::new(&self.config.input.path),
            &self.config.input.record_path,
        )?;

        let schema = discover_schema(&records);
        let table = flatten(&records, &schema);

        let headers = table.headers();
        let mut rows = table.render_rows();
        coerce_numeric_columns(&headers, &mut rows, &self.config.numeric.columns);

        Ok((headers, rows, records.len()))
    }

    /// Anonymize rendered rows in batches and write the anonymized file
    ///
    /// Returns rows written plus the final mapping store sizes.
    fn anonymize_rows(
        &self,
        headers: &[String],
        rows: &mut [Vec<String>],
    ) -> Result<(usize, usize, usize)> {
        let mut engine = self.build_engine()?;
        let mut writer = TableWriter::create(
            Path::new(&self.config.output.anonymized_path),
            self.config.output.delimiter_byte(),
            headers,
        )?;

        for batch in rows.chunks_mut(self.config.anonymization.batch_size) {
            engine.anonymize_batch(headers, batch);
            writer.write_rows(batch)?;
        }
        writer.flush()?;
        let rows_out = writer.rows_written();

        let mapping = engine.into_mapping();
        self.flush_mapping(&mapping)?;
        Ok((rows_out, mapping.free_text_len(), mapping.identifier_len()))
    }

    /// Build the engine with declared roles and the loaded mapping store
    fn build_engine(&self) -> Result<AnonymizationEngine> {
        let mut roles = RoleTable::new();
        for field in &self.config.anonymization.free_text {
            roles.add_free_text(field.column.clone(), field.role);
        }
        for field in &self.config.anonymization.identifier {
            roles.add_identifier(field.column.clone(), field.class.clone());
        }

        let mapping = AnonymizationMapping::load(
            Path::new(&self.config.anonymization.free_text_mapping_path),
            Path::new(&self.config.anonymization.identifier_mapping_path),
        )?;

        Ok(AnonymizationEngine::new(
            roles,
            mapping,
            self.config.anonymization.sequence_width,
        ))
    }

    fn flush_mapping(&self, mapping: &AnonymizationMapping) -> Result<()> {
        if let Some(parent) = Path::new(&self.config.anonymization.free_text_mapping_path).parent()
        {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        mapping.flush(
            Path::new(&self.config.anonymization.free_text_mapping_path),
            Path::new(&self.config.anonymization.identifier_mapping_path),
        )
    }

    fn write_table(&self, path: &str, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
        let mut writer =
            TableWriter::create(Path::new(path), self.config.output.delimiter_byte(), headers)?;
        writer.write_rows(rows)?;
        writer.flush()?;
        Ok(())
    }

}

/// Coerce declared numeric columns to the empty missing marker when the
/// rendered content does not parse as a number
///
/// Prepares the table for downstream loaders that expect declared numeric
/// columns to be numeric or missing, never arbitrary text.
pub fn coerce_numeric_columns(
    headers: &[String],
    rows: &mut [Vec<String>],
    numeric_columns: &[String],
) {
    let indexes: Vec<usize> = numeric_columns
        .iter()
        .filter_map(|column| headers.iter().position(|h| h == column))
        .collect();
    if indexes.is_empty() {
        return;
    }

    let mut coerced = 0usize;
    for row in rows.iter_mut() {
        for &index in &indexes {
            let value = &row[index];
            if !value.is_empty() && value.parse::<f64>().is_err() {
                row[index] = String::new();
                coerced += 1;
            }
        }
    }

    if coerced > 0 {
        tracing::warn!(
            coerced,
            columns = indexes.len(),
            "Non-numeric values in declared numeric columns coerced to missing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AnonymizationConfig, ApplicationConfig, FreeTextField, IdentifierField, InputConfig,
        LoggingConfig, NumericConfig, OutputConfig,
    };
    use crate::anonymization::FreeTextRole;
    use std::fs;
    use tempfile::TempDir;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_coerce_numeric_columns() {
        let headers = headers(&["qty", "name"]);
        let mut rows = vec![
            vec!["12".to_string(), "widget".to_string()],
            vec!["12.5".to_string(), "bolt".to_string()],
            vec!["twelve".to_string(), "nut".to_string()],
            vec!["".to_string(), "washer".to_string()],
        ];

        coerce_numeric_columns(&headers, &mut rows, &["qty".to_string()]);

        assert_eq!(rows[0][0], "12");
        assert_eq!(rows[1][0], "12.5");
        assert_eq!(rows[2][0], "");
        assert_eq!(rows[3][0], "");
        // Text column untouched
        assert_eq!(rows[2][1], "nut");
    }

    #[test]
    fn test_coerce_ignores_undeclared_and_absent_columns() {
        let headers = headers(&["name"]);
        let mut rows = vec![vec!["not a number".to_string()]];
        coerce_numeric_columns(&headers, &mut rows, &["qty".to_string()]);
        assert_eq!(rows[0][0], "not a number");
    }

    fn pipeline_config(dir: &TempDir) -> TabulaConfig {
        let input_path = dir.path().join("export.json");
        fs::write(
            &input_path,
            r#"{"data": {"biztransactions": {"nodes": [
                {"rowId": "A1", "buyer": {"nodes": [{"name": "Acme Corp"}]},
                 "items": {"nodes": [{"sku": "S1"}, {"sku": "S2"}]}},
                {"rowId": "A2", "buyer": {"nodes": [{"name": "Acme Corp"}]},
                 "items": {"nodes": [{"sku": "S3"}]}}
            ]}}}"#,
        )
        .unwrap();

        TabulaConfig {
            application: ApplicationConfig::default(),
            input: InputConfig {
                path: input_path.to_string_lossy().to_string(),
                record_path: vec![
                    "data".to_string(),
                    "biztransactions".to_string(),
                    "nodes".to_string(),
                ],
            },
            output: OutputConfig {
                flat_path: dir.path().join("flat.csv").to_string_lossy().to_string(),
                anonymized_path: dir
                    .path()
                    .join("anonymized.csv")
                    .to_string_lossy()
                    .to_string(),
                delimiter: ";".to_string(),
            },
            anonymization: AnonymizationConfig {
                free_text_mapping_path: dir
                    .path()
                    .join("mappings/free_text.csv")
                    .to_string_lossy()
                    .to_string(),
                identifier_mapping_path: dir
                    .path()
                    .join("mappings/identifiers.csv")
                    .to_string_lossy()
                    .to_string(),
                batch_size: 2,
                sequence_width: 6,
                free_text: vec![FreeTextField {
                    column: "buyer.nodes.name".to_string(),
                    role: FreeTextRole::Organization,
                }],
                identifier: vec![IdentifierField {
                    column: "rowId".to_string(),
                    class: Some("PO".to_string()),
                }],
            },
            numeric: NumericConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_full_run_produces_both_tables_and_mappings() {
        let dir = TempDir::new().unwrap();
        let config = pipeline_config(&dir);
        let pipeline = Pipeline::new(config.clone());

        let summary = pipeline.run().unwrap();
        assert_eq!(summary.records_in, 2);
        // Record A1 explodes to 2 rows on items.nodes.sku, A2 stays 1.
        assert_eq!(summary.rows_out, 3);
        assert_eq!(summary.free_text_mapped, 1);
        assert_eq!(summary.identifiers_mapped, 2);

        let flat = fs::read_to_string(&config.output.flat_path).unwrap();
        assert!(flat.starts_with("rowId;buyer.nodes.name;items.nodes.sku"));
        assert!(flat.contains("A1;Acme Corp;S1"));
        assert!(flat.contains("A1;Acme Corp;S2"));

        let anonymized = fs::read_to_string(&config.output.anonymized_path).unwrap();
        assert!(anonymized.contains("PO_000001"));
        assert!(anonymized.contains("PO_000002"));
        assert!(!anonymized.contains("Acme Corp"));
    }

    #[test]
    fn test_rerun_reuses_persisted_mappings() {
        let dir = TempDir::new().unwrap();
        let config = pipeline_config(&dir);

        Pipeline::new(config.clone()).run().unwrap();
        let first = fs::read_to_string(&config.output.anonymized_path).unwrap();

        Pipeline::new(config.clone()).run().unwrap();
        let second = fs::read_to_string(&config.output.anonymized_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_only_skips_anonymization() {
        let dir = TempDir::new().unwrap();
        let config = pipeline_config(&dir);

        let summary = Pipeline::new(config.clone()).flatten_only().unwrap();
        assert_eq!(summary.rows_out, 3);
        assert_eq!(summary.free_text_mapped, 0);

        let flat = fs::read_to_string(&config.output.flat_path).unwrap();
        assert!(flat.contains("Acme Corp"));
        assert!(!Path::new(&config.output.anonymized_path).exists());
    }

    #[test]
    fn test_anonymize_only_matches_full_run_output() {
        let dir = TempDir::new().unwrap();
        let config = pipeline_config(&dir);

        let full = Pipeline::new(config.clone()).run().unwrap();
        let from_full = fs::read_to_string(&config.output.anonymized_path).unwrap();
        fs::remove_file(&config.output.anonymized_path).unwrap();

        let summary = Pipeline::new(config.clone()).anonymize_only().unwrap();
        assert_eq!(summary.rows_out, full.rows_out);

        let from_split = fs::read_to_string(&config.output.anonymized_path).unwrap();
        assert_eq!(from_full, from_split);
    }
}
