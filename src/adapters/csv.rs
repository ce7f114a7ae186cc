//! Delimited table I/O
//!
//! Reads and writes the flat table as `;`-delimited UTF-8 text, header row
//! first. The reader hands rows back in bounded batches so anonymization of
//! a large existing table never needs the whole file in memory.

use crate::domain::{Result, TabulaError};
use std::fs::File;
use std::path::Path;

/// Writer for the flat table file
pub struct TableWriter {
    writer: csv::Writer<File>,
    rows_written: usize,
}

impl TableWriter {
    /// Create the output file and write the header row
    pub fn create(path: &Path, delimiter: u8, headers: &[String]) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(path)
            .map_err(|e| {
                TabulaError::Table(format!("Failed to create {}: {e}", path.display()))
            })?;

        let mut table_writer = Self {
            writer,
            rows_written: 0,
        };
        table_writer.writer.write_record(headers)?;
        Ok(table_writer)
    }

    /// Append one data row
    pub fn write_row(&mut self, row: &[String]) -> Result<()> {
        self.writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append a batch of data rows
    pub fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered output to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Batched reader for an existing flat table file
pub struct TableReader {
    reader: csv::Reader<File>,
    headers: Vec<String>,
}

impl TableReader {
    /// Open the file and read its header row
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(false)
            .from_path(path)
            .map_err(|e| {
                TabulaError::Table(format!("Failed to open {}: {e}", path.display()))
            })?;

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self { reader, headers })
    }

    /// The header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Read up to `batch_size` data rows; an empty result means end of file
    pub fn read_batch(&mut self, batch_size: usize) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();

        for record in self.reader.records().take(batch_size) {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(rows)
    }
}
