//! CSV writers for analysis result views.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use openfiscal_core::analysis::{FormattedChangeTable, RankingView};

use super::error::ExportError;

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding.
const BOM: &[u8] = b"\xEF\xBB\xBF";

fn bom_writer(path: &Path) -> Result<csv::Writer<File>, ExportError> {
    let mut file = File::create(path)?;
    file.write_all(BOM)?;
    Ok(csv::Writer::from_writer(file))
}

/// Writes the formatted year-over-year change table to
/// `<dir>/changes_yoy.csv`.
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be created or written.
pub fn write_changes_csv(
    changes: &FormattedChangeTable,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = dir.join("changes_yoy.csv");
    let mut writer = bom_writer(&path)?;

    let mut header = vec![changes.group_fields().join(" / ")];
    header.extend(changes.columns().iter().map(|c| c.label()));
    writer.write_record(&header)?;

    for (row, ministry) in changes.rows().iter().enumerate() {
        let mut record = vec![ministry.to_string()];
        record.extend(changes.row_cells(row).iter().cloned());
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), "change table exported");
    Ok(path)
}

/// Writes one `<dir>/budget_{year}_{asc|desc}.csv` per ranking sort key.
///
/// # Errors
///
/// Returns `ExportError` if any file cannot be created or written.
pub fn write_ranking_csvs(
    sorted_budgets: &BTreeMap<String, RankingView>,
    dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut paths = Vec::with_capacity(sorted_budgets.len());

    for (key, view) in sorted_budgets {
        let path = dir.join(format!("budget_{key}.csv"));
        let mut writer = bom_writer(&path)?;

        writer.write_record(["ministry", view.year.as_str()])?;
        for entry in &view.entries {
            writer.write_record([entry.ministry.to_string(), entry.amount.to_string()])?;
        }
        writer.flush()?;
        paths.push(path);
    }

    info!(files = paths.len(), "rankings exported");
    Ok(paths)
}
