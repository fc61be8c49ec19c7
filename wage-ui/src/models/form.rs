use std::fmt;

use rust_decimal::Decimal;
use wage_core::{CalculationMode, EarningsInput};

use crate::config::FormDefaults;
use crate::utils::{ParseDecimalError, parse_decimal, parse_optional_decimal};

/// Raw text of the earnings fields, exactly as the user typed it.
///
/// Text is only parsed when a calculation runs, so a half-typed value
/// never blocks editing another field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WageForm {
    pub working_hours: String,
    pub mode: CalculationMode,
    pub hourly_rate: String,
    pub annual_salary: String,
}

impl WageForm {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            working_hours: defaults.hours_per_week.clone().unwrap_or_default(),
            mode: defaults.mode,
            hourly_rate: defaults.hourly_rate.clone().unwrap_or_default(),
            annual_salary: defaults.annual_salary.clone().unwrap_or_default(),
        }
    }

    /// Parses the fields the selected mode uses.
    ///
    /// Working hours are parsed in both modes when present. Blank fields
    /// become `None` and are reported by the calculator if required.
    pub fn to_earnings_input(&self) -> Result<EarningsInput, ParseDecimalError> {
        let working_hours_per_week =
            parse_optional_decimal("working hours per week", &self.working_hours)?;

        let (hourly_rate, annual_salary) = match self.mode {
            CalculationMode::Hourly => (
                parse_optional_decimal("hourly rate", &self.hourly_rate)?,
                None,
            ),
            CalculationMode::Salary => (
                None,
                parse_optional_decimal("annual salary", &self.annual_salary)?,
            ),
        };

        Ok(EarningsInput {
            mode: self.mode,
            working_hours_per_week,
            hourly_rate,
            annual_salary,
        })
    }

    /// Working hours are required for the hourly wage needed to cover expenses.
    pub fn working_hours(&self) -> Result<Decimal, ParseDecimalError> {
        parse_decimal("working hours per week", &self.working_hours)
    }
}

fn field_display(value: &str) -> &str {
    if value.trim().is_empty() { "(not set)" } else { value }
}

impl fmt::Display for WageForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Working hours per week: {}", field_display(&self.working_hours))?;
        writeln!(f, "Calculation method:     {}", self.mode)?;
        writeln!(f, "Hourly rate:            {}", field_display(&self.hourly_rate))?;
        write!(f, "Annual salary:          {}", field_display(&self.annual_salary))
    }
}
