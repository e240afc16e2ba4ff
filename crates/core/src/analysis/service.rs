//! Orchestration of the analysis pipeline.

use crate::dataset::FiscalFrame;

use super::change::ChangeCalculator;
use super::error::AnalysisError;
use super::format::PercentFormatter;
use super::pivot::Aggregator;
use super::rank::RankingSorter;
use super::types::ResultBundle;

/// Runs the full budget analysis over one materialized dataset.
pub struct AnalysisService {
    frame: FiscalFrame,
}

impl AnalysisService {
    /// Creates a service over an already-materialized dataset.
    #[must_use]
    pub const fn new(frame: FiscalFrame) -> Self {
        Self { frame }
    }

    /// Pivots once, then derives the formatted change table and the
    /// per-year rankings independently from that single pivot.
    ///
    /// # Errors
    ///
    /// Propagates `AnalysisError` from aggregation unchanged; this layer
    /// adds no failure modes of its own.
    pub fn analyze(
        &self,
        group_keys: &[&str],
        time_keys: &[&str],
        value_field: &str,
    ) -> Result<ResultBundle, AnalysisError> {
        let budget_by_ministry =
            Aggregator::aggregate(&self.frame, group_keys, time_keys, value_field)?;

        let changes = ChangeCalculator::year_over_year(&budget_by_ministry);
        let changes_yoy = PercentFormatter::format_table(&changes);
        let sorted_budgets = RankingSorter::rank_by_year(&budget_by_ministry);

        Ok(ResultBundle {
            budget_by_ministry,
            changes_yoy,
            sorted_budgets,
        })
    }
}
