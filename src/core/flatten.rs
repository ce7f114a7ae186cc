//! Table flattening with column-ordered list explosion
//!
//! Orchestrates schema discovery and path extraction over a record
//! collection, then explodes list-valued cells column by column to yield a
//! strictly flat table.
//!
//! Explosion is deliberately *sequential*: column `i` operates on the table
//! state already produced by exploding columns `0..i-1`, so a record with
//! list columns of lengths `k1, k2, …` (in schema order) contributes
//! `k1 × k2 × …` rows. This compounding is the documented behavior, not a
//! joint cross-product of all list columns at once; [`explode_column`] is
//! kept as a standalone operation so a joint mode could be offered later.

use crate::core::extract::extract;
use crate::domain::{Cell, ColumnPath, FlatTable, ValueTree};

/// Flatten a record collection against a column-path schema
///
/// The schema normally comes from [`crate::core::schema::discover_schema`]
/// over the full record set, but may be supplied externally to keep later
/// batches consistent with an already-published table layout.
///
/// A record with no list-valued columns contributes exactly one output row.
pub fn flatten(records: &[ValueTree], schema: &[ColumnPath]) -> FlatTable {
    let mut table = materialize(records, schema);

    for index in 0..table.column_count() {
        explode_column(&mut table, index);
    }

    tracing::debug!(
        records = records.len(),
        columns = table.column_count(),
        rows = table.row_count(),
        "Flattened record collection"
    );

    table
}

/// Materialize one row per record, one cell per schema column
pub fn materialize(records: &[ValueTree], schema: &[ColumnPath]) -> FlatTable {
    let mut table = FlatTable::new(schema.to_vec());

    for record in records {
        let row: Vec<Cell> = schema.iter().map(|path| extract(record, path)).collect();
        table.push_row(row);
    }

    table
}

/// Explode list cells in one column into one row per element
///
/// Every row holding a [`Cell::List`] in the column is replaced by `k` rows
/// (k = list length), identical in every other column, each holding one list
/// element with order preserved. Rows holding `Missing` or a scalar pass
/// through unchanged. A no-op when the column holds no lists.
pub fn explode_column(table: &mut FlatTable, index: usize) {
    if !table.rows.iter().any(|row| row[index].is_list()) {
        return;
    }

    let old_rows = std::mem::take(&mut table.rows);
    let mut exploded = Vec::with_capacity(old_rows.len());

    for mut row in old_rows {
        match std::mem::replace(&mut row[index], Cell::Missing) {
            Cell::List(items) => {
                for item in items {
                    let mut copy = row.clone();
                    copy[index] = Cell::Scalar(item);
                    exploded.push(copy);
                }
            }
            other => {
                row[index] = other;
                exploded.push(row);
            }
        }
    }

    table.rows = exploded;
}
