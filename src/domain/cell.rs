//! Per-record, per-column cell values
//!
//! Extraction of one [`crate::domain::ColumnPath`] from one record yields a
//! [`Cell`] whose shape is driven by hit cardinality: zero hits are
//! [`Cell::Missing`], one hit is a [`Cell::Scalar`], more than one is a
//! [`Cell::List`] in traversal order.

use std::fmt;

/// A single leaf value
///
/// `Null` is a real leaf (an explicit JSON null), distinct from a path that
/// matched nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Explicit null leaf
    Null,
    /// Boolean leaf
    Bool(bool),
    /// Numeric leaf in its original representation
    Number(serde_json::Number),
    /// String leaf
    Text(String),
}

impl Scalar {
    /// Render the scalar for delimited output
    ///
    /// Nulls render as the empty field, matching the missing-value marker.
    pub fn render(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Cardinality-shaped cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// The path matched no leaf in this record
    Missing,
    /// The path matched exactly one leaf
    Scalar(Scalar),
    /// The path matched several leaves, in traversal order
    List(Vec<Scalar>),
}

impl Cell {
    /// Whether this cell still holds a list
    pub fn is_list(&self) -> bool {
        matches!(self, Cell::List(_))
    }

    /// Render the cell for delimited output
    ///
    /// A surviving list renders as a bracketed, comma-separated literal
    /// (`[a, b, c]`) rather than an error.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Scalar(s) => s.render(),
            Cell::List(items) => {
                let rendered: Vec<String> = items.iter().map(Scalar::render).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    #[test]
    fn test_scalar_render() {
        assert_eq!(Scalar::Null.render(), "");
        assert_eq!(Scalar::Bool(true).render(), "true");
        assert_eq!(Scalar::Text("Acme Corp".to_string()).render(), "Acme Corp");
        assert_eq!(Scalar::Number(Number::from(42)).render(), "42");
    }

    #[test]
    fn test_scalar_render_float_keeps_json_text() {
        let n: Number = serde_json::from_str("12.5").unwrap();
        assert_eq!(Scalar::Number(n).render(), "12.5");
    }

    #[test]
    fn test_cell_render_missing_is_empty() {
        assert_eq!(Cell::Missing.render(), "");
    }

    #[test]
    fn test_cell_render_list_bracket_literal() {
        let cell = Cell::List(vec![
            Scalar::Text("a".to_string()),
            Scalar::Text("b".to_string()),
            Scalar::Text("c".to_string()),
        ]);
        assert_eq!(cell.render(), "[a, b, c]");
    }

    #[test]
    fn test_is_list() {
        assert!(!Cell::Missing.is_list());
        assert!(!Cell::Scalar(Scalar::Null).is_list());
        assert!(Cell::List(vec![Scalar::Null, Scalar::Null]).is_list());
    }
}
