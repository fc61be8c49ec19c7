use std::fmt;

use thiserror::Error;
use wage_core::{EarningsError, LedgerError};

use crate::csv_loader::CsvLoadError;
use crate::utils::ParseDecimalError;

const NUMBERS_ONLY: &str = "Invalid input. Please enter numbers only.";
const SELECT_EXPENSE: &str = "Please select an expense to delete.";

/// Everything a form action can fail with.
///
/// None of these are fatal: the session shows [`UiError::dialog`] and keeps
/// the ledger and labels as they were.
#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Parse(#[from] ParseDecimalError),

    #[error(transparent)]
    Earnings(#[from] EarningsError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A delete was requested without choosing an entry.
    #[error("no expense selected")]
    NoSelection,

    #[error("unknown calculation method '{0}'")]
    UnknownMode(String),

    #[error("expense '{0}' must be written as NAME=VALUE")]
    MalformedExpense(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    Csv(#[from] CsvLoadError),

    #[error("invalid log level: {0}")]
    LogLevel(String),
}

/// A titled message shown to the user in place of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: &'static str,
    pub message: String,
}

impl fmt::Display for Dialog {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl UiError {
    /// Maps the error to the dialog the form shows for it.
    pub fn dialog(&self) -> Dialog {
        match self {
            Self::Parse(_) | Self::Earnings(_) | Self::Ledger(LedgerError::InvalidValue(_)) => {
                Dialog {
                    title: "Invalid Input",
                    message: format!("{NUMBERS_ONLY} ({self})"),
                }
            }
            Self::NoSelection | Self::Ledger(LedgerError::IndexOutOfRange { .. }) => Dialog {
                title: "Error",
                message: SELECT_EXPENSE.to_string(),
            },
            Self::UnknownMode(mode) => Dialog {
                title: "Invalid Input",
                message: format!("Calculation method '{mode}' must be 'hourly' or 'salary'."),
            },
            Self::MalformedExpense(_) => Dialog {
                title: "Invalid Input",
                message: format!("{self}."),
            },
            Self::UnknownCommand(command) => Dialog {
                title: "Error",
                message: format!("Unknown command '{command}'. Type 'help' for a list of commands."),
            },
            Self::Csv(_) | Self::LogLevel(_) => Dialog {
                title: "Error",
                message: self.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_input_uses_numbers_only_dialog() {
        let error = UiError::from(EarningsError::InvalidInput(
            "hourly rate is required".to_string(),
        ));

        assert_eq!(
            error.dialog(),
            Dialog {
                title: "Invalid Input",
                message: "Invalid input. Please enter numbers only. (invalid input: hourly rate is required)"
                    .to_string(),
            }
        );
    }

    #[test]
    fn missing_selection_asks_user_to_select() {
        let from_ledger = UiError::from(LedgerError::IndexOutOfRange { index: 3, len: 1 });

        assert_eq!(from_ledger.dialog().title, "Error");
        assert_eq!(from_ledger.dialog().message, SELECT_EXPENSE);
        assert_eq!(UiError::NoSelection.dialog().message, SELECT_EXPENSE);
    }

    #[test]
    fn dialog_display_joins_title_and_message() {
        let dialog = UiError::UnknownCommand("frobnicate".to_string()).dialog();

        assert_eq!(
            dialog.to_string(),
            "Error: Unknown command 'frobnicate'. Type 'help' for a list of commands."
        );
    }
}
