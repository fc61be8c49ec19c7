use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationMode;

/// Snapshot of the earnings fields of the form.
///
/// A `None` field was left blank. Only the fields the selected
/// [`CalculationMode`] uses are ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsInput {
    pub mode: CalculationMode,
    pub working_hours_per_week: Option<Decimal>,
    /// Used iff `mode` is [`CalculationMode::Hourly`].
    pub hourly_rate: Option<Decimal>,
    /// Used iff `mode` is [`CalculationMode::Salary`].
    pub annual_salary: Option<Decimal>,
}

impl EarningsInput {
    pub fn hourly(
        working_hours_per_week: Decimal,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            mode: CalculationMode::Hourly,
            working_hours_per_week: Some(working_hours_per_week),
            hourly_rate: Some(hourly_rate),
            annual_salary: None,
        }
    }

    pub fn salary(annual_salary: Decimal) -> Self {
        Self {
            mode: CalculationMode::Salary,
            working_hours_per_week: None,
            hourly_rate: None,
            annual_salary: Some(annual_salary),
        }
    }

    /// Adds the weekly hours to an input built with [`EarningsInput::salary`].
    pub fn with_hours(
        mut self,
        working_hours_per_week: Decimal,
    ) -> Self {
        self.working_hours_per_week = Some(working_hours_per_week);
        self
    }
}
