//! Budget aggregation and trend analysis.

pub mod change;
pub mod error;
pub mod format;
pub mod pivot;
pub mod rank;
pub mod service;
pub mod types;


pub use change::ChangeCalculator;
pub use error::AnalysisError;
pub use format::PercentFormatter;
pub use pivot::Aggregator;
pub use rank::RankingSorter;
pub use service::AnalysisService;
pub use types::{
    ChangeTable, ColumnKey, FormattedChangeTable, GroupKey, PivotedTable, RankedEntry,
    RankingView, ResultBundle, SortDirection,
};
