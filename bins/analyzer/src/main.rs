//! OpenFiscal analyzer
//!
//! Entry point for the budget analysis pipeline: loads fiscal records,
//! runs the analysis once, and exports the derived views as CSV files.

use std::path::Path;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openfiscal_core::analysis::AnalysisService;
use openfiscal_core::dataset::DataProvider;
use openfiscal_export::{write_changes_csv, write_ranking_csvs};
use openfiscal_provider::CsvFileProvider;
use openfiscal_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openfiscal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Fetch the fiscal records for the configured year window
    let provider = CsvFileProvider::new(
        &config.data.path,
        &config.data.year_field,
        config.data.start_year,
        config.data.end_year,
    );
    let frame = provider.fetch()?;
    info!(
        records = frame.record_count(),
        path = %config.data.path,
        "fiscal records loaded"
    );

    // Run the analysis once over the materialized dataset
    let group_keys: Vec<&str> = config.data.group_fields.iter().map(String::as_str).collect();
    let time_keys: Vec<&str> = config.data.time_fields.iter().map(String::as_str).collect();

    let service = AnalysisService::new(frame);
    let bundle = service.analyze(&group_keys, &time_keys, &config.data.value_field)?;
    info!(
        ministries = bundle.budget_by_ministry.row_count(),
        years = bundle.budget_by_ministry.column_count(),
        "budget trends analyzed"
    );

    // Dispatch the bundle to the export collaborator
    let out_dir = Path::new(&config.output.dir);
    std::fs::create_dir_all(out_dir)?;
    write_changes_csv(&bundle.changes_yoy, out_dir)?;
    let ranking_files = write_ranking_csvs(&bundle.sorted_budgets, out_dir)?;
    info!(
        dir = %out_dir.display(),
        files = ranking_files.len() + 1,
        "analysis exported"
    );

    Ok(())
}
