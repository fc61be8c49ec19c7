//! CSV loader for expense lists.
//!
//! Lets a user seed the ledger for the current run from a spreadsheet
//! export instead of typing every expense. Nothing is ever written back.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive and must match exactly.
//!
//! | Column  | Required | Type    | Notes                                    |
//! |---------|----------|---------|------------------------------------------|
//! | `name`  | yes      | string  | Must not be blank                        |
//! | `value` | yes      | decimal | `$` prefix and `,` separators allowed    |
//!
//! ### Example
//!
//! ```csv
//! name,value
//! Rent,"$1,200.00"
//! Groceries,350.50
//! ```
use rust_decimal::Decimal;
use serde::Deserialize;
use wage_core::{Ledger, LedgerError};

use crate::utils::{ParseDecimalError, parse_decimal};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    value: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading expenses from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read expense file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `value` cell was not a number. `row` is 1-based (header = row 0).
    #[error("row {row}: {source}")]
    InvalidNumber {
        row: usize,
        #[source]
        source: ParseDecimalError,
    },

    /// The row parsed but the ledger refused it (blank name or negative value).
    #[error("row {row}: {source}")]
    InvalidExpense {
        row: usize,
        #[source]
        source: LedgerError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a `(name, value)` pair.
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<(String, Decimal), CsvLoadError> {
    let value = parse_decimal("value", &row.value).map_err(|source| CsvLoadError::InvalidNumber {
        row: row_number,
        source,
    })?;
    Ok((row.name, value))
}

/// Parse CSV text and return a [`Ledger`] holding its rows in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidNumber`] if a value is not a number.
/// * [`CsvLoadError::InvalidExpense`] if a row has a blank name or a
///   negative value.
pub fn load_from_str(input: &str) -> Result<Ledger, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    let mut ledger = Ledger::new();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = idx + 1; // 1-based for user-facing messages
        let (name, value) = convert_row(result?, row_number)?;
        ledger
            .add(name, value)
            .map_err(|source| CsvLoadError::InvalidExpense {
                row: row_number,
                source,
            })?;
    }

    tracing::debug!(rows = ledger.len(), "loaded expenses from CSV");
    Ok(ledger)
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &std::path::Path) -> Result<Ledger, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
