use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Source file not found: {}", path.display())]
    DataNotFound { path: PathBuf },

    #[error("Failed to open the source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read the source file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{name}' is missing from the header after normalization")]
    MissingColumn { name: &'static str },

    #[error("Line {line}: cannot parse '{value}' as a date with format '{format}'")]
    InvalidDate {
        line: u64,
        value: String,
        format: String,
    },

    #[error("Line {line}: cannot parse '{value}' as a purchase amount")]
    InvalidAmount { line: u64, value: String },

    #[error("Line {line}: cannot parse '{value}' as an age")]
    InvalidAge { line: u64, value: String },
}
