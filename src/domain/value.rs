//! In-memory representation of one nested record
//!
//! A [`ValueTree`] is a tagged variant mirroring the JSON data model, with
//! object keys kept in the document's own order. It is pure data: traversal
//! lives in [`crate::core`].

use serde_json::Value;

/// One nested record as a tagged tree
///
/// Object entries preserve the key order of the source document (serde_json
/// is built with `preserve_order`). Trees are built once per input document
/// and are immutable during flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueTree {
    /// JSON null
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number, kept in its original representation
    Number(serde_json::Number),
    /// JSON string
    Text(String),
    /// JSON array
    Array(Vec<ValueTree>),
    /// JSON object with entries in document order
    Object(Vec<(String, ValueTree)>),
}

impl ValueTree {
    /// Whether this node is a leaf (scalar or null)
    pub fn is_leaf(&self) -> bool {
        !matches!(self, ValueTree::Array(_) | ValueTree::Object(_))
    }

    /// Look up a key on an object node
    ///
    /// Returns `None` for non-object nodes and absent keys.
    pub fn get(&self, key: &str) -> Option<&ValueTree> {
        match self {
            ValueTree::Object(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Human-readable variant name, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ValueTree::Null => "null",
            ValueTree::Bool(_) => "boolean",
            ValueTree::Number(_) => "number",
            ValueTree::Text(_) => "string",
            ValueTree::Array(_) => "array",
            ValueTree::Object(_) => "object",
        }
    }
}

impl From<Value> for ValueTree {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ValueTree::Null,
            Value::Bool(b) => ValueTree::Bool(b),
            Value::Number(n) => ValueTree::Number(n),
            Value::String(s) => ValueTree::Text(s),
            Value::Array(items) => {
                ValueTree::Array(items.into_iter().map(ValueTree::from).collect())
            }
            Value::Object(map) => ValueTree::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ValueTree::from(v)))
                    .collect(),
            ),
        }
    }
}
