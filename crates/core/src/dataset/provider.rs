//! Seam for external record suppliers.

use super::frame::FiscalFrame;

/// An opaque supplier of rectangular fiscal records.
///
/// Loaders (files, remote APIs) live outside this crate and implement this
/// trait; the analysis pipeline only ever sees the resulting frame.
pub trait DataProvider {
    /// Failure type of the underlying source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Materializes the full dataset.
    fn fetch(&self) -> Result<FiscalFrame, Self::Error>;
}
