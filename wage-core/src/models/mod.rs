mod calculation_mode;
mod earnings_input;
mod expense;
mod ledger;

pub use calculation_mode::CalculationMode;
pub use earnings_input::EarningsInput;
pub use expense::Expense;
pub use ledger::{Ledger, LedgerError};
