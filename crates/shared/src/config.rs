//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Dataset configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Export configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the fiscal records CSV file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Field holding the fiscal year of each record.
    #[serde(default = "default_year_field")]
    pub year_field: String,
    /// First fiscal year to retain (inclusive).
    #[serde(default = "default_start_year")]
    pub start_year: i64,
    /// Last fiscal year to retain (inclusive).
    #[serde(default = "default_end_year")]
    pub end_year: i64,
    /// Fields identifying the row grouping (e.g. ministry name).
    #[serde(default = "default_group_fields")]
    pub group_fields: Vec<String>,
    /// Fields identifying the column grouping (e.g. fiscal year).
    #[serde(default = "default_time_fields")]
    pub time_fields: Vec<String>,
    /// Numeric field summed per (group, time) cell.
    #[serde(default = "default_value_field")]
    pub value_field: String,
}

fn default_path() -> String {
    "data/fiscal.csv".to_string()
}

fn default_year_field() -> String {
    "FSCL_YY".to_string()
}

fn default_start_year() -> i64 {
    2024
}

fn default_end_year() -> i64 {
    2025
}

fn default_group_fields() -> Vec<String> {
    vec!["OFFC_NM".to_string()]
}

fn default_time_fields() -> Vec<String> {
    vec!["FSCL_YY".to_string()]
}

fn default_value_field() -> String {
    "Y_YY_MEDI_KCUR_AMT".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            year_field: default_year_field(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            group_fields: default_group_fields(),
            time_fields: default_time_fields(),
            value_field: default_value_field(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the exported CSV files.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

fn default_output_dir() -> String {
    "out".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("OPENFISCAL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
