//! # Salient Ingest Crate
//!
//! This crate is the application's intake: it turns a raw delimited file
//! into the typed `Transaction` records every aggregate is computed from.
//!
//! ## Architectural Principles
//!
//! - **Single Validation Point:** Header names are normalized and the
//!   schema is checked once, up front. Everything downstream works with
//!   typed fields, so a schema mismatch is a load-time fault with a clear
//!   diagnostic, never a scattered runtime lookup failure.
//! - **Fail-Fast Loading:** A row that cannot be parsed (bad date, bad
//!   amount, malformed age) aborts the whole load with the offending line
//!   number and value. There is no partial-row skipping; the caller either
//!   gets the complete dataset or an error.
//!
//! ## Public API
//!
//! - `load_transactions`: Reads, validates, and parses the source file.
//! - `ColumnLayout`: The resolved positions of the required columns.
//! - `normalize_header`: The header canonicalization rule.
//! - `IngestError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use error::IngestError;
pub use loader::load_transactions;
pub use schema::{ColumnLayout, normalize_header};
