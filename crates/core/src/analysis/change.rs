//! Year-over-year change calculation.

use rust_decimal::Decimal;

use super::types::{ChangeTable, PivotedTable};

/// Computes year-over-year percentage deltas from a pivoted table.
pub struct ChangeCalculator;

impl ChangeCalculator {
    /// Computes the percentage change of every cell against the previous
    /// column.
    ///
    /// Column order is taken as already chronological and is not re-sorted.
    /// The first column has no prior basis and is undefined for every row;
    /// a zero or missing previous amount also yields an undefined cell
    /// rather than a division fault. Values are percentages already
    /// multiplied by 100.
    #[must_use]
    pub fn year_over_year(table: &PivotedTable) -> ChangeTable {
        let cells = (0..table.row_count())
            .map(|row| {
                (0..table.column_count())
                    .map(|column| {
                        if column == 0 {
                            return None;
                        }
                        let previous = table.cell(row, column - 1)?;
                        let current = table.cell(row, column)?;
                        if previous.is_zero() {
                            return None;
                        }
                        Some((current - previous) / previous * Decimal::ONE_HUNDRED)
                    })
                    .collect()
            })
            .collect();

        ChangeTable::from_parts(
            table.group_fields().to_vec(),
            table.rows().to_vec(),
            table.columns().to_vec(),
            cells,
        )
    }
}
