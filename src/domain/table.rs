//! Flat table representation
//!
//! A [`FlatTable`] holds the discovered schema once and the rows
//! positionally: row `i`, column `j` corresponds to `columns[j]`.

use super::cell::Cell;
use super::path::ColumnPath;

/// Ordered flat table of cells
///
/// Columns are in schema order (first-encounter order across the record
/// set). Rows are appended in record order; after explosion a single record
/// may contribute several consecutive rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTable {
    /// Column paths in schema order
    pub columns: Vec<ColumnPath>,
    /// Rows of cells, positionally aligned with `columns`
    pub rows: Vec<Vec<Cell>>,
}

impl FlatTable {
    /// Create an empty table with the given schema
    pub fn new(columns: Vec<ColumnPath>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// The row must be aligned with the schema; a mismatch is a programming
    /// error in the flattener.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of a column path, if present
    pub fn column_index(&self, path: &ColumnPath) -> Option<usize> {
        self.columns.iter().position(|c| c == path)
    }

    /// Header row: dot-joined column paths in schema order
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.to_string()).collect()
    }

    /// Render all rows to delimited-output strings
    pub fn render_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::Scalar;
    use std::str::FromStr;

    fn schema(names: &[&str]) -> Vec<ColumnPath> {
        names
            .iter()
            .map(|n| ColumnPath::from_str(n).unwrap())
            .collect()
    }

    #[test]
    fn test_headers_dot_joined_in_schema_order() {
        let table = FlatTable::new(schema(&["rowId", "buyer.nodes.name"]));
        assert_eq!(table.headers(), vec!["rowId", "buyer.nodes.name"]);
    }

    #[test]
    fn test_push_and_render() {
        let mut table = FlatTable::new(schema(&["a", "b"]));
        table.push_row(vec![
            Cell::Scalar(Scalar::Text("x".to_string())),
            Cell::Missing,
        ]);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.render_rows(), vec![vec!["x".to_string(), String::new()]]);
    }

    #[test]
    fn test_column_index() {
        let table = FlatTable::new(schema(&["a", "b.c"]));
        let path = ColumnPath::from_str("b.c").unwrap();
        assert_eq!(table.column_index(&path), Some(1));
        assert_eq!(table.column_index(&ColumnPath::from_str("nope").unwrap()), None);
    }
}
