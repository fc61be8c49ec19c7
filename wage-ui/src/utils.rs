use rust_decimal::Decimal;
use thiserror::Error;
use wage_core::calculations::common::round_half_up;

/// Currency symbols accepted in front of a typed amount.
const CURRENCY_PREFIXES: &[char] = &['$', '€', '£', '¥'];

/// Error returned when a form field cannot be parsed as a [`Decimal`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("{field} is required")]
    Missing { field: String },

    #[error("{field}: '{input}' is not a number")]
    Invalid { field: String, input: String },
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// currency symbol and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim()
        .trim_start_matches(CURRENCY_PREFIXES)
        .trim()
        .replace(',', "")
}

/// Parses a required form field into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and a leading
/// currency symbol (e.g. `"$20"`). Empty input is reported as missing.
pub fn parse_decimal(
    field: &str,
    s: &str,
) -> Result<Decimal, ParseDecimalError> {
    parse_optional_decimal(field, s)?.ok_or_else(|| ParseDecimalError::Missing {
        field: field.to_string(),
    })
}

/// Parses an optional form field. Empty or whitespace-only input is `None`;
/// anything else must be a number.
pub fn parse_optional_decimal(
    field: &str,
    s: &str,
) -> Result<Option<Decimal>, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(|e: rust_decimal::Error| {
        tracing::debug!(field, input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            field: field.to_string(),
            input: s.to_string(),
        }
    })
}

/// Formats an amount as currency with two decimal places, e.g. `$1153.85`.
/// A deficit renders as `-$536.00`.
pub fn format_currency(
    symbol: &str,
    value: Decimal,
) -> String {
    let rounded = round_half_up(value);
    if rounded.is_sign_negative() {
        format!("-{symbol}{}", rounded.abs())
    } else {
        format!("{symbol}{rounded}")
    }
}
