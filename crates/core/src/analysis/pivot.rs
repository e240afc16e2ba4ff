//! Pivot aggregation of raw fiscal records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::AnalysisError;
use super::types::{ColumnKey, GroupKey, PivotedTable};
use crate::dataset::{FieldValue, FiscalFrame};

/// Pivots raw records into a ministry-by-year table of summed amounts.
pub struct Aggregator;

impl Aggregator {
    /// Groups records by (group fields) x (time fields) and sums the value
    /// field within each cell.
    ///
    /// Combinations with no matching records stay absent (`None`), and
    /// records whose value field is not numeric are skipped. Rows and
    /// columns come out sorted by their source cell values, so aggregating
    /// the same input twice yields an identical table.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidField` if any named field is missing
    /// from the frame schema, and `AnalysisError::EmptyDataset` if the
    /// frame holds zero records.
    pub fn aggregate(
        frame: &FiscalFrame,
        group_keys: &[&str],
        time_keys: &[&str],
        value_field: &str,
    ) -> Result<PivotedTable, AnalysisError> {
        let group_indices = resolve_fields(frame, group_keys)?;
        let time_indices = resolve_fields(frame, time_keys)?;
        let value_index = resolve_fields(frame, &[value_field])?[0];

        if frame.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        // Sum per (row key, column key); BTreeMap keeps both axes sorted.
        let mut sums: BTreeMap<(Vec<FieldValue>, Vec<FieldValue>), Decimal> = BTreeMap::new();
        for record in frame.rows() {
            let Some(amount) = record[value_index].as_amount() else {
                continue;
            };
            let group: Vec<FieldValue> = group_indices.iter().map(|&i| record[i].clone()).collect();
            let time: Vec<FieldValue> = time_indices.iter().map(|&i| record[i].clone()).collect();
            *sums.entry((group, time)).or_insert(Decimal::ZERO) += amount;
        }

        let mut row_values: Vec<&Vec<FieldValue>> = sums.keys().map(|(g, _)| g).collect();
        row_values.sort();
        row_values.dedup();
        let mut column_values: Vec<&Vec<FieldValue>> = sums.keys().map(|(_, t)| t).collect();
        column_values.sort();
        column_values.dedup();

        let row_positions: BTreeMap<&Vec<FieldValue>, usize> = row_values
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        let column_positions: BTreeMap<&Vec<FieldValue>, usize> = column_values
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();

        let mut cells = vec![vec![None; column_values.len()]; row_values.len()];
        for ((group, time), amount) in &sums {
            cells[row_positions[group]][column_positions[time]] = Some(*amount);
        }

        let rows = row_values
            .iter()
            .map(|values| GroupKey::new(values.iter().map(FieldValue::label).collect()))
            .collect();
        let columns = column_values
            .iter()
            .map(|values| column_key(values.as_slice()))
            .collect();
        let group_fields = group_keys.iter().map(ToString::to_string).collect();

        Ok(PivotedTable::from_parts(group_fields, rows, columns, cells))
    }
}

fn resolve_fields(frame: &FiscalFrame, names: &[&str]) -> Result<Vec<usize>, AnalysisError> {
    names
        .iter()
        .map(|name| {
            frame
                .field_index(name)
                .ok_or_else(|| AnalysisError::InvalidField((*name).to_string()))
        })
        .collect()
}

/// One time field yields a flat column; several yield a two-level column
/// with the trailing field as the fiscal-year label.
fn column_key(values: &[FieldValue]) -> ColumnKey {
    match values {
        [year] => ColumnKey::Flat { year: year.label() },
        [outer @ .., year] => ColumnKey::Nested {
            group: outer
                .iter()
                .map(FieldValue::label)
                .collect::<Vec<_>>()
                .join("/"),
            year: year.label(),
        },
        [] => ColumnKey::Flat {
            year: String::new(),
        },
    }
}
