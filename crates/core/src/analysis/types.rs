//! Analysis data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Composite row identity: one label per requested group field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    /// Creates a key from its ordered labels.
    #[must_use]
    pub const fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    /// Ordered labels, one per group field.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

/// Column identity for a pivoted table.
///
/// A single time field yields flat columns; multiple time fields yield a
/// two-level layout with the leading fields as the outer label and the last
/// field as the inner fiscal-year label. Downstream components only ever
/// consume the inner label, so both shapes are handled uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    /// Single-level column: the fiscal-year label alone.
    Flat {
        /// Fiscal-year label.
        year: String,
    },
    /// Two-level column: outer group label plus inner fiscal-year label.
    Nested {
        /// Outer label (leading time fields, joined).
        group: String,
        /// Inner fiscal-year label.
        year: String,
    },
}

impl ColumnKey {
    /// The inner fiscal-year label, regardless of column shape.
    #[must_use]
    pub fn year(&self) -> &str {
        match self {
            Self::Flat { year } | Self::Nested { year, .. } => year,
        }
    }

    /// Full column label for display and export headers.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Flat { year } => year.clone(),
            Self::Nested { group, year } => format!("{group}/{year}"),
        }
    }
}

/// Ministry-by-year table of summed budget amounts.
///
/// Rows are distinct group keys, columns are fiscal years in chronological
/// order, and a cell is the summed amount for that pair. Combinations that
/// never occurred in the input are `None`, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotedTable {
    group_fields: Vec<String>,
    rows: Vec<GroupKey>,
    columns: Vec<ColumnKey>,
    cells: Vec<Vec<Option<Decimal>>>,
}

impl PivotedTable {
    pub(crate) const fn from_parts(
        group_fields: Vec<String>,
        rows: Vec<GroupKey>,
        columns: Vec<ColumnKey>,
        cells: Vec<Vec<Option<Decimal>>>,
    ) -> Self {
        Self {
            group_fields,
            rows,
            columns,
            cells,
        }
    }

    /// Names of the fields that formed the row grouping.
    #[must_use]
    pub fn group_fields(&self) -> &[String] {
        &self.group_fields
    }

    /// Row identities, in table order.
    #[must_use]
    pub fn rows(&self) -> &[GroupKey] {
        &self.rows
    }

    /// Column identities, in chronological order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Cell at (row, column); `None` marks an absent combination.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Decimal> {
        self.cells[row][column]
    }

    /// All cells of one row, in column order.
    #[must_use]
    pub fn row_cells(&self, row: usize) -> &[Option<Decimal>] {
        &self.cells[row]
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct fiscal-year labels, in order of first appearance.
    #[must_use]
    pub fn years(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for column in &self.columns {
            if !seen.iter().any(|y: &String| y == column.year()) {
                seen.push(column.year().to_string());
            }
        }
        seen
    }

    /// Per-row amounts for one fiscal year.
    ///
    /// For two-level layouts the first column carrying the year is taken,
    /// matching how the original ranking sorted by the first outer group.
    #[must_use]
    pub fn year_slice(&self, year: &str) -> Vec<Option<Decimal>> {
        let Some(column) = self.columns.iter().position(|c| c.year() == year) else {
            return vec![None; self.rows.len()];
        };
        self.cells.iter().map(|row| row[column]).collect()
    }
}

/// Year-over-year percentage changes, same shape as the pivoted table.
///
/// The first column and every cell without a defined prior-year basis are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeTable {
    group_fields: Vec<String>,
    rows: Vec<GroupKey>,
    columns: Vec<ColumnKey>,
    cells: Vec<Vec<Option<Decimal>>>,
}

impl ChangeTable {
    pub(crate) const fn from_parts(
        group_fields: Vec<String>,
        rows: Vec<GroupKey>,
        columns: Vec<ColumnKey>,
        cells: Vec<Vec<Option<Decimal>>>,
    ) -> Self {
        Self {
            group_fields,
            rows,
            columns,
            cells,
        }
    }

    /// Names of the fields that formed the row grouping.
    #[must_use]
    pub fn group_fields(&self) -> &[String] {
        &self.group_fields
    }

    /// Row identities, in table order.
    #[must_use]
    pub fn rows(&self) -> &[GroupKey] {
        &self.rows
    }

    /// Column identities, in chronological order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Change at (row, column); `None` marks an undefined change.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Decimal> {
        self.cells[row][column]
    }

    /// All changes of one row, in column order.
    #[must_use]
    pub fn row_cells(&self, row: usize) -> &[Option<Decimal>] {
        &self.cells[row]
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Rendered year-over-year changes, same shape as the change table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedChangeTable {
    group_fields: Vec<String>,
    rows: Vec<GroupKey>,
    columns: Vec<ColumnKey>,
    cells: Vec<Vec<String>>,
}

impl FormattedChangeTable {
    pub(crate) const fn from_parts(
        group_fields: Vec<String>,
        rows: Vec<GroupKey>,
        columns: Vec<ColumnKey>,
        cells: Vec<Vec<String>>,
    ) -> Self {
        Self {
            group_fields,
            rows,
            columns,
            cells,
        }
    }

    /// Names of the fields that formed the row grouping.
    #[must_use]
    pub fn group_fields(&self) -> &[String] {
        &self.group_fields
    }

    /// Row identities, in table order.
    #[must_use]
    pub fn rows(&self) -> &[GroupKey] {
        &self.rows
    }

    /// Column identities, in chronological order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Rendered change at (row, column).
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.cells[row][column]
    }

    /// All rendered changes of one row, in column order.
    #[must_use]
    pub fn row_cells(&self, row: usize) -> &[String] {
        &self.cells[row]
    }
}

/// Sort direction for per-year rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest budget first.
    Ascending,
    /// Largest budget first.
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// One ministry with its budget amount for a ranked year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Ministry identity.
    pub ministry: GroupKey,
    /// Summed budget amount for the ranked year.
    pub amount: Decimal,
}

/// Ordered ministries for one (year, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingView {
    /// Fiscal-year label.
    pub year: String,
    /// Sort direction.
    pub direction: SortDirection,
    /// Ministries in ranked order; ties keep original row order.
    pub entries: Vec<RankedEntry>,
}

/// Combined output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// Pivoted budget-by-ministry-by-year table.
    pub budget_by_ministry: PivotedTable,
    /// Rendered year-over-year changes.
    pub changes_yoy: FormattedChangeTable,
    /// Rankings keyed `"{year}_asc"` / `"{year}_desc"`.
    pub sorted_budgets: BTreeMap<String, RankingView>,
}
