//! Provider error types.

use openfiscal_core::dataset::FrameError;
use thiserror::Error;

/// Errors raised while loading fiscal records.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source file could not be read.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The source file is not well-formed CSV.
    #[error("Malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The configured fiscal-year field is absent from the header.
    #[error("Year field not found in dataset header: {0}")]
    MissingYearField(String),

    /// A record did not fit the frame schema.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
