//! Export error types.

use thiserror::Error;

/// Errors raised while writing result files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized as CSV.
    #[error("Failed to serialize CSV record: {0}")]
    Csv(#[from] csv::Error),
}
