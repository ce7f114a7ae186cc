//! Schema discovery
//!
//! Derives the ordered set of unique leaf column paths across a collection
//! of records. Traversal is depth-first per record: object keys are visited
//! in document order, array elements share their parent's path (no index
//! segment), and every scalar or null leaf contributes its accumulated path.
//!
//! The global order is the first record's own leaf-discovery order, extended
//! by any genuinely new paths contributed by later records. The schema is
//! computed once over the full record set; deriving it from a partial batch
//! is not reproducible.

use crate::domain::{ColumnPath, ValueTree};
use std::collections::HashSet;

/// Discover the ordered set of unique leaf column paths
///
/// Paths are unique and ordered by first encounter. Ambiguous schemas
/// (a scalar at a position another record nests under) are surfaced with a
/// warning and left to first-encounter precedence; see [`prefix_conflicts`].
///
/// # Examples
///
/// ```
/// use tabula::core::schema::discover_schema;
/// use tabula::domain::ValueTree;
/// use serde_json::json;
///
/// let records = vec![ValueTree::from(json!({"buyer": {"nodes": {"name": "Acme Corp"}}}))];
/// let schema = discover_schema(&records);
/// assert_eq!(schema.len(), 1);
/// assert_eq!(schema[0].to_string(), "buyer.nodes.name");
/// ```
pub fn discover_schema(records: &[ValueTree]) -> Vec<ColumnPath> {
    let mut ordered = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        collect_leaf_paths(record, &ColumnPath::root(), &mut ordered, &mut seen);
    }

    for (scalar, nested) in prefix_conflicts(&ordered) {
        tracing::warn!(
            scalar_path = %scalar,
            nested_path = %nested,
            "Ambiguous schema: path holds a scalar in one record and nests deeper in another; \
             first-encounter order decides column placement"
        );
    }

    ordered
}

fn collect_leaf_paths(
    node: &ValueTree,
    prefix: &ColumnPath,
    ordered: &mut Vec<ColumnPath>,
    seen: &mut HashSet<ColumnPath>,
) {
    match node {
        ValueTree::Null | ValueTree::Bool(_) | ValueTree::Number(_) | ValueTree::Text(_) => {
            // A leaf at the record root has no addressable path.
            if !prefix.is_root() && seen.insert(prefix.clone()) {
                ordered.push(prefix.clone());
            }
        }
        ValueTree::Array(items) => {
            for item in items {
                collect_leaf_paths(item, prefix, ordered, seen);
            }
        }
        ValueTree::Object(entries) => {
            for (key, child) in entries {
                collect_leaf_paths(child, &prefix.child(key), ordered, seen);
            }
        }
    }
}

/// Find pairs where one discovered path is a strict prefix of another
///
/// Such pairs mean the same position held a scalar in one record and a
/// nested object/array in another. Behavior is driven by whichever record
/// contributed first; this is reported, never silently repaired.
pub fn prefix_conflicts(schema: &[ColumnPath]) -> Vec<(ColumnPath, ColumnPath)> {
    let mut conflicts = Vec::new();
    for (i, a) in schema.iter().enumerate() {
        for b in schema.iter().skip(i + 1) {
            if a.is_strict_prefix_of(b) {
                conflicts.push((a.clone(), b.clone()));
            } else if b.is_strict_prefix_of(a) {
                conflicts.push((b.clone(), a.clone()));
            }
        }
    }
    conflicts
}
