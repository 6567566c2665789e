use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section and every field carries a default, so the application runs
/// with no `config.toml` present at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub display: Display,
}

/// Describes where the transaction data lives and how to read it.
#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    /// Path of the CSV file to analyze when no `--input` flag is given.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,
    /// The strftime pattern every transaction date must match (e.g., "%Y-%m-%d").
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Controls how the rendered report looks.
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    /// The currency symbol prefixed to monetary values (e.g., "$").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// How many rows of each breakdown table the terminal report shows.
    #[serde(default = "default_max_table_rows")]
    pub max_table_rows: usize,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            date_format: default_date_format(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            max_table_rows: default_max_table_rows(),
        }
    }
}

fn default_input_file() -> PathBuf {
    PathBuf::from("ecommerce_transactions.csv")
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_max_table_rows() -> usize {
    15
}
