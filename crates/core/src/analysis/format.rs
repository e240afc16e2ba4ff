//! Percentage rendering for year-over-year changes.

use rust_decimal::Decimal;

use super::types::{ChangeTable, FormattedChangeTable};

/// Renders numeric deltas as signed percentage strings.
pub struct PercentFormatter;

impl PercentFormatter {
    /// Formats one delta: positive values get an explicit `+`, negative
    /// values keep their sign, and both zero and undefined render `"NaN"`.
    ///
    /// Pure and total: every input maps to a string, nothing panics.
    #[must_use]
    pub fn format(value: Option<Decimal>) -> String {
        match value {
            Some(x) if x > Decimal::ZERO => format!("+{:.2}%", x.round_dp(2)),
            Some(x) if x < Decimal::ZERO => format!("{:.2}%", x.round_dp(2)),
            // Zero change renders like an undefined change, matching the
            // original exporter output.
            _ => "NaN".to_string(),
        }
    }

    /// Renders every cell of a change table.
    #[must_use]
    pub fn format_table(changes: &ChangeTable) -> FormattedChangeTable {
        let cells = (0..changes.rows().len())
            .map(|row| changes.row_cells(row).iter().map(|c| Self::format(*c)).collect())
            .collect();

        FormattedChangeTable::from_parts(
            changes.group_fields().to_vec(),
            changes.rows().to_vec(),
            changes.columns().to_vec(),
            cells,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Some(dec!(5)), "+5.00%")]
    #[case(Some(dec!(50)), "+50.00%")]
    #[case(Some(dec!(-3.333)), "-3.33%")]
    #[case(Some(dec!(-10)), "-10.00%")]
    #[case(Some(dec!(0.004)), "+0.00%")]
    #[case(Some(dec!(0)), "NaN")]
    #[case(None, "NaN")]
    fn test_format_totality(#[case] input: Option<Decimal>, #[case] expected: &str) {
        assert_eq!(PercentFormatter::format(input), expected);
    }

    /// A computed zero change and a change with no prior-year basis both
    /// render "NaN" - the two cases cannot be told apart in the output.
    #[test]
    fn test_zero_change_is_indistinguishable_from_missing_basis() {
        assert_eq!(
            PercentFormatter::format(Some(Decimal::ZERO)),
            PercentFormatter::format(None)
        );
    }
}
