//! Path extraction
//!
//! Resolves one [`ColumnPath`] against one record. The extractor is a pure
//! function: recursive descent consumes one path segment per object level,
//! while arrays fan out into every element with the path unconsumed. Hits
//! are collected in traversal order and aggregated by cardinality.

use crate::domain::{Cell, ColumnPath, Scalar, ValueTree};

/// Extract the cardinality-appropriate cell for a path within one record
///
/// - 0 hits → [`Cell::Missing`]
/// - 1 hit → [`Cell::Scalar`]
/// - >1 hits → [`Cell::List`] in traversal order
///
/// An explicit null leaf counts as a hit, so cardinality is preserved even
/// for records carrying nulls inside repeated groups.
///
/// # Examples
///
/// ```
/// use tabula::core::extract::extract;
/// use tabula::domain::{Cell, ColumnPath, Scalar, ValueTree};
/// use serde_json::json;
/// use std::str::FromStr;
///
/// let record = ValueTree::from(json!({"buyer": {"nodes": {"name": "Acme Corp"}}}));
/// let path = ColumnPath::from_str("buyer.nodes.name").unwrap();
/// assert_eq!(
///     extract(&record, &path),
///     Cell::Scalar(Scalar::Text("Acme Corp".to_string()))
/// );
/// ```
pub fn extract(record: &ValueTree, path: &ColumnPath) -> Cell {
    let mut hits = Vec::new();
    collect_hits(record, path.segments(), &mut hits);

    match hits.len() {
        0 => Cell::Missing,
        1 => Cell::Scalar(hits.swap_remove(0)),
        _ => Cell::List(hits),
    }
}

fn collect_hits(node: &ValueTree, segments: &[String], hits: &mut Vec<Scalar>) {
    match node {
        // Arrays fan out with the path unconsumed, in element order.
        ValueTree::Array(items) => {
            for item in items {
                collect_hits(item, segments, hits);
            }
        }
        ValueTree::Object(entries) => {
            if let Some((first, rest)) = segments.split_first() {
                if let Some((_, child)) = entries.iter().find(|(k, _)| k == first) {
                    collect_hits(child, rest, hits);
                }
            }
            // Path exhausted at an object: cardinality zero for this branch.
        }
        leaf => {
            if segments.is_empty() {
                hits.push(leaf_scalar(leaf));
            }
        }
    }
}

fn leaf_scalar(leaf: &ValueTree) -> Scalar {
    match leaf {
        ValueTree::Null => Scalar::Null,
        ValueTree::Bool(b) => Scalar::Bool(*b),
        ValueTree::Number(n) => Scalar::Number(n.clone()),
        ValueTree::Text(s) => Scalar::Text(s.clone()),
        ValueTree::Array(_) | ValueTree::Object(_) => {
            unreachable!("leaf_scalar called on a container node")
        }
    }
}
