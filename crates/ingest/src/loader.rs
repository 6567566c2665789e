use crate::error::IngestError;
use crate::schema::ColumnLayout;
use chrono::NaiveDate;
use core_types::Transaction;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Reads the source file into typed `Transaction` records.
///
/// Dates must match `date_format` exactly (no autodetection). The load is
/// all-or-nothing: the first unparsable row aborts it with the offending
/// line number, and a missing file is reported as `DataNotFound` so the
/// caller can show a friendly message instead of a raw I/O error.
pub fn load_transactions(
    path: &Path,
    date_format: &str,
) -> Result<Vec<Transaction>, IngestError> {
    let started = Instant::now();

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => IngestError::DataNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Io(err),
    })?;

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    // Single validation point: resolve every required column up front.
    let layout = ColumnLayout::resolve(reader.headers()?)?;

    let mut transactions = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // Header occupies line 1; quoted fields can span lines, so prefer
        // the reader's own position when it is available.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        match parse_row(&record, &layout, date_format, line) {
            Ok(tx) => transactions.push(tx),
            Err(err) => {
                tracing::error!(%err, line, "aborting load, no partial dataset is produced");
                return Err(err);
            }
        }
    }

    tracing::info!(
        rows = transactions.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        path = %path.display(),
        "loaded transaction dataset"
    );

    Ok(transactions)
}

/// Parses one record into a `Transaction` using the resolved layout.
fn parse_row(
    record: &StringRecord,
    layout: &ColumnLayout,
    date_format: &str,
    line: u64,
) -> Result<Transaction, IngestError> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let raw_date = field(layout.date).trim();
    let date = NaiveDate::parse_from_str(raw_date, date_format).map_err(|_| {
        IngestError::InvalidDate {
            line,
            value: raw_date.to_string(),
            format: date_format.to_string(),
        }
    })?;

    let raw_amount = field(layout.amount).trim();
    let amount: Decimal = raw_amount.parse().map_err(|_| IngestError::InvalidAmount {
        line,
        value: raw_amount.to_string(),
    })?;

    // Age is the one field allowed to be blank; such rows simply fall out
    // of the age-based aggregates. A non-empty, non-numeric age is a fault.
    let raw_age = field(layout.age).trim();
    let age = if raw_age.is_empty() {
        None
    } else {
        Some(raw_age.parse::<u32>().map_err(|_| IngestError::InvalidAge {
            line,
            value: raw_age.to_string(),
        })?)
    };

    Ok(Transaction {
        date,
        amount,
        category: field(layout.category).to_string(),
        country: field(layout.country).to_string(),
        user_name: field(layout.user_name).to_string(),
        age,
        payment_method: field(layout.payment_method).to_string(),
    })
}
