//! CSV export of OpenFiscal analysis results.
//!
//! Consumes the result bundle produced by `openfiscal-core` and writes it
//! to disk: one file for the formatted year-over-year changes and one file
//! per ranking sort key. Files are UTF-8 with a leading byte-order mark so
//! spreadsheet tools pick the encoding up correctly.

pub mod error;
pub mod writer;

pub use error::ExportError;
pub use writer::{write_changes_csv, write_ranking_csvs};
