//! Fiscal record loaders for OpenFiscal.
//!
//! Implements the `DataProvider` seam of `openfiscal-core` for CSV files:
//! cells are typed on read and records are windowed to a configured span of
//! fiscal years, the way the original data manager was constructed with a
//! start and end year.

pub mod error;
pub mod file;

pub use error::ProviderError;
pub use file::CsvFileProvider;
