//! The in-memory expense ledger.
//!
//! Entries keep insertion order and duplicate names are allowed. The total
//! is recomputed on every read so it can never drift from the entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::Expense;

/// Errors raised when mutating a [`Ledger`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The expense name was empty, or the value was negative or too large.
    #[error("invalid expense: {0}")]
    InvalidValue(String),

    /// No entry exists at the requested position.
    #[error("no expense at position {index} (ledger holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered collection of [`Expense`] entries.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::Ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.add("Rent", dec!(1200.00)).unwrap();
/// ledger.add("Groceries", dec!(350.50)).unwrap();
///
/// assert_eq!(ledger.total(), dec!(1550.50));
///
/// let removed = ledger.remove_at(0).unwrap();
/// assert_eq!(removed.name(), "Rent");
/// assert_eq!(ledger.total(), dec!(350.50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerRecord")]
pub struct Ledger {
    expenses: Vec<Expense>,
}

/// Unvalidated serialized form; every entry is re-added through [`Ledger::add`].
#[derive(Deserialize)]
struct LedgerRecord {
    expenses: Vec<ExpenseRecord>,
}

#[derive(Deserialize)]
struct ExpenseRecord {
    name: String,
    value: Decimal,
}

impl TryFrom<LedgerRecord> for Ledger {
    type Error = LedgerError;

    fn try_from(record: LedgerRecord) -> Result<Self, Self::Error> {
        Self::from_expenses(record.expenses.into_iter().map(|e| (e.name, e.value)))
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from `(name, value)` pairs, validating each one.
    ///
    /// Stops at the first invalid pair.
    pub fn from_expenses<I, S>(entries: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for (name, value) in entries {
            ledger.add(name, value)?;
        }
        Ok(ledger)
    }

    /// Appends an expense.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidValue`] if `name` is blank, if `value`
    /// is negative, or if the new total would overflow a [`Decimal`].
    pub fn add(
        &mut self,
        name: impl Into<String>,
        value: Decimal,
    ) -> Result<(), LedgerError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(LedgerError::InvalidValue(
                "expense name must not be empty".to_string(),
            ));
        }
        if value.is_sign_negative() && !value.is_zero() {
            return Err(LedgerError::InvalidValue(format!(
                "expense '{trimmed}' has negative value {value}"
            )));
        }

        if self.total().checked_add(value).is_none() {
            return Err(LedgerError::InvalidValue(format!(
                "expense '{trimmed}' makes the total too large"
            )));
        }

        debug!(name = trimmed, %value, "adding expense");
        self.expenses.push(Expense::new(trimmed.to_string(), value));
        Ok(())
    }

    /// Removes and returns the expense at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::IndexOutOfRange`] when `index` is past the end,
    /// which is always the case for an empty ledger.
    pub fn remove_at(
        &mut self,
        index: usize,
    ) -> Result<Expense, LedgerError> {
        if index >= self.expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }

        let removed = self.expenses.remove(index);
        debug!(index, name = removed.name(), "removed expense");
        Ok(removed)
    }

    /// Sum of every entry; zero when empty.
    pub fn total(&self) -> Decimal {
        self.expenses.iter().map(Expense::value).sum()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        debug!(count = self.expenses.len(), "clearing ledger");
        self.expenses.clear();
    }
}
