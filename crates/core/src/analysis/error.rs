//! Analysis error types.

use thiserror::Error;

/// Errors raised by the aggregation pipeline.
///
/// Missing cells are never errors; they travel through the pipeline as
/// `None` and surface as `"NaN"` in formatted output. Only schema mistakes
/// and an empty input are fatal.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A requested grouping, time, or value field is absent from the schema.
    #[error("Field not found in dataset schema: {0}")]
    InvalidField(String),

    /// The dataset holds zero records.
    #[error("Dataset contains no records")]
    EmptyDataset,
}
