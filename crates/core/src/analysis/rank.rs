//! Per-year budget rankings.

use std::collections::BTreeMap;

use super::types::{PivotedTable, RankedEntry, RankingView, SortDirection};

/// Produces ascending and descending ministry rankings for every year.
pub struct RankingSorter;

impl RankingSorter {
    /// Ranks ministries by budget amount for each fiscal year in the table.
    ///
    /// Works on flat and two-level column layouts alike through the year
    /// slice abstraction. Undefined cells are excluded from the ordering in
    /// both directions; a year whose cells are all undefined still emits
    /// both keys with empty orderings. Both directions are stable sorts, so
    /// ministries with equal amounts keep their original row order.
    #[must_use]
    pub fn rank_by_year(table: &PivotedTable) -> BTreeMap<String, RankingView> {
        let mut sorted_budgets = BTreeMap::new();

        for year in table.years() {
            let entries: Vec<RankedEntry> = table
                .rows()
                .iter()
                .zip(table.year_slice(&year))
                .filter_map(|(ministry, amount)| {
                    amount.map(|amount| RankedEntry {
                        ministry: ministry.clone(),
                        amount,
                    })
                })
                .collect();

            let mut ascending = entries.clone();
            ascending.sort_by(|a, b| a.amount.cmp(&b.amount));
            let mut descending = entries;
            descending.sort_by(|a, b| b.amount.cmp(&a.amount));

            sorted_budgets.insert(
                format!("{year}_{}", SortDirection::Ascending),
                RankingView {
                    year: year.clone(),
                    direction: SortDirection::Ascending,
                    entries: ascending,
                },
            );
            sorted_budgets.insert(
                format!("{year}_{}", SortDirection::Descending),
                RankingView {
                    year: year.clone(),
                    direction: SortDirection::Descending,
                    entries: descending,
                },
            );
        }

        sorted_budgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{ColumnKey, GroupKey};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn table(rows: &[(&str, Vec<Option<Decimal>>)], years: &[&str]) -> PivotedTable {
        PivotedTable::from_parts(
            vec!["OFFC_NM".to_string()],
            rows.iter()
                .map(|(name, _)| GroupKey::new(vec![(*name).to_string()]))
                .collect(),
            years
                .iter()
                .map(|year| ColumnKey::Flat {
                    year: (*year).to_string(),
                })
                .collect(),
            rows.iter().map(|(_, cells)| cells.clone()).collect(),
        )
    }

    fn names(view: &RankingView) -> Vec<String> {
        view.entries.iter().map(|e| e.ministry.to_string()).collect()
    }

    #[test]
    fn test_both_directions_emitted_per_year() {
        let pivot = table(
            &[("Defense", vec![Some(dec!(100)), Some(dec!(150))])],
            &["2024", "2025"],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        assert_eq!(rankings.len(), 4);
        assert!(rankings.contains_key("2024_asc"));
        assert!(rankings.contains_key("2024_desc"));
        assert!(rankings.contains_key("2025_asc"));
        assert!(rankings.contains_key("2025_desc"));
    }

    #[test]
    fn test_orderings_are_reverses_for_distinct_amounts() {
        let pivot = table(
            &[
                ("Defense", vec![Some(dec!(100))]),
                ("Education", vec![Some(dec!(300))]),
                ("Health", vec![Some(dec!(200))]),
            ],
            &["2024"],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        let ascending = names(&rankings["2024_asc"]);
        let mut reversed = names(&rankings["2024_desc"]);
        reversed.reverse();

        assert_eq!(ascending, vec!["Defense", "Health", "Education"]);
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn test_ties_keep_original_row_order_in_both_directions() {
        let pivot = table(
            &[
                ("Defense", vec![Some(dec!(100))]),
                ("Education", vec![Some(dec!(100))]),
                ("Health", vec![Some(dec!(50))]),
            ],
            &["2024"],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        assert_eq!(
            names(&rankings["2024_asc"]),
            vec!["Health", "Defense", "Education"]
        );
        assert_eq!(
            names(&rankings["2024_desc"]),
            vec!["Defense", "Education", "Health"]
        );
    }

    #[test]
    fn test_undefined_cells_are_excluded() {
        let pivot = table(
            &[
                ("Defense", vec![Some(dec!(100))]),
                ("Ghost", vec![None]),
            ],
            &["2024"],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        assert_eq!(names(&rankings["2024_asc"]), vec!["Defense"]);
        assert_eq!(names(&rankings["2024_desc"]), vec!["Defense"]);
    }

    #[test]
    fn test_all_undefined_year_still_emits_empty_orderings() {
        let pivot = table(
            &[
                ("Defense", vec![Some(dec!(100)), None]),
                ("Education", vec![Some(dec!(200)), None]),
            ],
            &["2024", "2025"],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        assert!(rankings["2025_asc"].entries.is_empty());
        assert!(rankings["2025_desc"].entries.is_empty());
    }

    #[test]
    fn test_two_level_layout_ranks_by_first_matching_column() {
        let pivot = PivotedTable::from_parts(
            vec!["OFFC_NM".to_string()],
            vec![
                GroupKey::new(vec!["Defense".to_string()]),
                GroupKey::new(vec!["Education".to_string()]),
            ],
            vec![
                ColumnKey::Nested {
                    group: "Operations".to_string(),
                    year: "2024".to_string(),
                },
                ColumnKey::Nested {
                    group: "Welfare".to_string(),
                    year: "2024".to_string(),
                },
            ],
            vec![
                vec![Some(dec!(100)), Some(dec!(900))],
                vec![Some(dec!(50)), Some(dec!(999))],
            ],
        );
        let rankings = RankingSorter::rank_by_year(&pivot);

        // One year across both outer groups, ranked on the first column.
        assert_eq!(rankings.len(), 2);
        assert_eq!(
            names(&rankings["2024_asc"]),
            vec!["Education", "Defense"]
        );
    }
}
