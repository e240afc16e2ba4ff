//! CSV file-backed data provider.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::debug;

use openfiscal_core::dataset::{DataProvider, FieldValue, FiscalFrame};

use super::error::ProviderError;

/// Loads fiscal records from a headered CSV file, keeping only records
/// whose fiscal year falls inside a configured inclusive window.
#[derive(Debug, Clone)]
pub struct CsvFileProvider {
    path: PathBuf,
    year_field: String,
    start_year: i64,
    end_year: i64,
}

impl CsvFileProvider {
    /// Creates a provider over one CSV file and a fiscal-year window.
    pub fn new(
        path: impl Into<PathBuf>,
        year_field: impl Into<String>,
        start_year: i64,
        end_year: i64,
    ) -> Self {
        Self {
            path: path.into(),
            year_field: year_field.into(),
            start_year,
            end_year,
        }
    }

    fn load(&self) -> Result<FiscalFrame, ProviderError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let year_index = headers
            .iter()
            .position(|h| h == &self.year_field)
            .ok_or_else(|| ProviderError::MissingYearField(self.year_field.clone()))?;

        let mut frame = FiscalFrame::new(headers.clone());
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record?;
            let cells: Vec<FieldValue> = (0..headers.len())
                .map(|i| type_cell(record.get(i).unwrap_or("")))
                .collect();
            // Records outside the year window, or without a readable year,
            // are dropped rather than surfaced as errors.
            match cells[year_index].as_integer() {
                Some(year) if (self.start_year..=self.end_year).contains(&year) => {
                    frame.push_row(cells)?;
                }
                _ => skipped += 1,
            }
        }

        debug!(
            records = frame.record_count(),
            skipped,
            path = %self.path.display(),
            "fiscal records loaded"
        );
        Ok(frame)
    }
}

impl DataProvider for CsvFileProvider {
    type Error = ProviderError;

    fn fetch(&self) -> Result<FiscalFrame, Self::Error> {
        self.load()
    }
}

/// Types a raw cell: whole numbers become integers, decimal numbers become
/// amounts, empty cells become null, anything else stays text.
fn type_cell(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return FieldValue::Integer(value);
    }
    if let Ok(value) = trimmed.parse::<Decimal>() {
        return FieldValue::Amount(value);
    }
    FieldValue::Text(raw.to_string())
}
