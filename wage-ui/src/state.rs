//! Session state for the calculator form.
//!
//! Holds the only [`Ledger`] of the run, the raw form text and the last
//! computed label values. Nothing here outlives the process.

use rust_decimal::Decimal;
use wage_core::Ledger;

use crate::models::WageForm;
use crate::utils::format_currency;

/// Last values shown in the result labels.
///
/// The earnings labels start at zero; the hourly wage and remaining income
/// labels start blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub required_hourly_wage: Option<Decimal>,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub yearly: Decimal,
    pub remaining_income: Option<Decimal>,
}

impl Labels {
    pub fn required_wage_text(
        &self,
        symbol: &str,
    ) -> Option<String> {
        self.required_hourly_wage.map(|wage| {
            format!(
                "To cover your expenses and have money saved, you would need to make {} per hour before taxes.",
                format_currency(symbol, wage)
            )
        })
    }

    pub fn earnings_text(
        &self,
        symbol: &str,
    ) -> [String; 3] {
        [
            format!(
                "Your estimated weekly earnings are: {}",
                format_currency(symbol, self.weekly)
            ),
            format!(
                "Your estimated monthly earnings are: {}",
                format_currency(symbol, self.monthly)
            ),
            format!(
                "Your estimated yearly earnings are: {}",
                format_currency(symbol, self.yearly)
            ),
        ]
    }

    pub fn remaining_text(
        &self,
        symbol: &str,
    ) -> Option<String> {
        self.remaining_income.map(|remaining| {
            format!(
                "Your remaining income after expenses is: {}",
                format_currency(symbol, remaining)
            )
        })
    }

    /// Every non-blank label, in form order.
    pub fn render(
        &self,
        symbol: &str,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        lines.extend(self.required_wage_text(symbol));
        lines.extend(self.earnings_text(symbol));
        lines.extend(self.remaining_text(symbol));
        lines
    }
}

/// Application-wide state for one run of the form.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ledger: Ledger,
    pub form: WageForm,
    pub labels: Labels,
}

impl AppState {
    pub fn new(form: WageForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    /// Clears the ledger and the labels. Form fields are kept.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.labels = Labels::default();
    }
}
