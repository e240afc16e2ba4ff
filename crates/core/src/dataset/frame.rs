//! Rectangular dataset of fiscal records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single cell value in a fiscal record.
///
/// Variant order defines axis ordering during aggregation: null sorts
/// first, then numeric values, then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Missing or empty cell.
    Null,
    /// Whole-number cell (fiscal years, counts).
    Integer(i64),
    /// Monetary cell with decimal precision.
    Amount(Decimal),
    /// Free-text cell (ministry names, codes).
    Text(String),
}

impl FieldValue {
    /// Returns the cell as a monetary amount, if it is numeric.
    #[must_use]
    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            Self::Integer(v) => Some(Decimal::from(*v)),
            Self::Amount(v) => Some(*v),
            Self::Null | Self::Text(_) => None,
        }
    }

    /// Returns the cell as a whole number, if it is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if the cell is missing.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the cell as an axis label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Integer(v) => v.to_string(),
            Self::Amount(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Errors raised while assembling a frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// A row does not match the schema width.
    #[error("Row width {got} does not match schema width {expected}")]
    RowWidth {
        /// Number of fields in the schema.
        expected: usize,
        /// Number of cells in the rejected row.
        got: usize,
    },
}

/// A rectangular dataset: ordered field names plus rows of cells.
///
/// The frame is the opaque input to aggregation. Rows are immutable once
/// pushed; fields are looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalFrame {
    fields: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl FiscalFrame {
    /// Creates an empty frame with the given field names.
    #[must_use]
    pub const fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            rows: Vec::new(),
        }
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::RowWidth` if the row width differs from the
    /// schema width.
    pub fn push_row(&mut self, row: Vec<FieldValue>) -> Result<(), FrameError> {
        if row.len() != self.fields.len() {
            return Err(FrameError::RowWidth {
                expected: self.fields.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Field names, in column order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Position of a field by name.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    /// Number of records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the frame holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_field_index_lookup() {
        let frame = FiscalFrame::new(vec!["OFFC_NM".to_string(), "FSCL_YY".to_string()]);

        assert_eq!(frame.field_index("FSCL_YY"), Some(1));
        assert_eq!(frame.field_index("MISSING"), None);
    }

    #[test]
    fn test_push_row_rejects_width_mismatch() {
        let mut frame = FiscalFrame::new(vec!["OFFC_NM".to_string(), "FSCL_YY".to_string()]);
        let result = frame.push_row(vec![FieldValue::Text("Defense".to_string())]);

        assert!(matches!(
            result,
            Err(FrameError::RowWidth {
                expected: 2,
                got: 1
            })
        ));
        assert!(frame.is_empty());
    }

    #[test]
    fn test_integer_cell_coerces_to_amount() {
        assert_eq!(FieldValue::Integer(100).as_amount(), Some(dec!(100)));
        assert_eq!(FieldValue::Amount(dec!(1.5)).as_amount(), Some(dec!(1.5)));
        assert_eq!(FieldValue::Text("x".to_string()).as_amount(), None);
        assert_eq!(FieldValue::Null.as_amount(), None);
    }
}
