use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::earnings::{
    EarningsError, monthly_earnings, remaining_income, required_hourly_wage, weekly_earnings,
    working_hours, yearly_earnings,
};
use crate::models::{CalculationMode, EarningsInput};

/// Every derived figure for one form snapshot.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::{EarningsInput, EarningsReport};
///
/// let report = EarningsReport::compute(&EarningsInput::hourly(dec!(40), dec!(20)), dec!(1000)).unwrap();
///
/// assert_eq!(report.weekly, dec!(800));
/// assert_eq!(report.monthly, dec!(3464));
/// assert_eq!(report.yearly, dec!(0));
/// assert_eq!(report.remaining_income, dec!(2464));
/// assert!(report.required_hourly_wage.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    pub mode: CalculationMode,
    pub total_expenses: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub yearly: Decimal,
    /// `None` in salary mode when no working hours were entered.
    pub required_hourly_wage: Option<Decimal>,
    /// Monthly earnings minus total expenses; negative for a deficit.
    pub remaining_income: Decimal,
}

impl EarningsReport {
    /// Computes all figures, failing on the first invalid field.
    ///
    /// # Errors
    ///
    /// Returns [`EarningsError::InvalidInput`] when any figure the mode
    /// needs cannot be computed. In salary mode, working hours are optional
    /// but must be positive when given.
    pub fn compute(
        input: &EarningsInput,
        total_expenses: Decimal,
    ) -> Result<Self, EarningsError> {
        let weekly = weekly_earnings(input)?;
        let monthly = monthly_earnings(input)?;
        let yearly = yearly_earnings(input)?;
        let remaining = remaining_income(input, total_expenses)?;

        let required = match (input.mode, input.working_hours_per_week) {
            (CalculationMode::Salary, None) => None,
            _ => Some(required_hourly_wage(total_expenses, working_hours(input)?)?),
        };

        info!(
            mode = %input.mode,
            %total_expenses,
            %weekly,
            %monthly,
            %yearly,
            %remaining,
            "computed earnings report"
        );

        Ok(Self {
            mode: input.mode,
            total_expenses,
            weekly,
            monthly,
            yearly,
            required_hourly_wage: required,
            remaining_income: remaining,
        })
    }

    pub fn is_deficit(&self) -> bool {
        self.remaining_income < Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    #[test]
    fn salary_report_without_hours_has_no_required_wage() {
        let report = EarningsReport::compute(&EarningsInput::salary(dec!(60000)), dec!(1000)).unwrap();

        assert_eq!(report.monthly, dec!(5000));
        assert_eq!(report.yearly, dec!(60000));
        assert_eq!(report.remaining_income, dec!(4000));
        assert_eq!(report.required_hourly_wage, None);
        assert!(!report.is_deficit());
    }

    #[test]
    fn salary_report_with_hours_has_required_wage() {
        let input = EarningsInput::salary(dec!(60000)).with_hours(dec!(40));

        let report = EarningsReport::compute(&input, dec!(1000)).unwrap();

        assert_eq!(report.required_hourly_wage.map(round_half_up), Some(dec!(5.77)));
    }

    #[test]
    fn salary_report_rejects_zero_hours_when_given() {
        let input = EarningsInput::salary(dec!(60000)).with_hours(dec!(0));

        assert!(matches!(
            EarningsReport::compute(&input, dec!(1000)),
            Err(EarningsError::InvalidInput(_))
        ));
    }

    #[test]
    fn hourly_report_flags_deficit() {
        let input = EarningsInput::hourly(dec!(10), dec!(10));

        let report = EarningsReport::compute(&input, dec!(1000)).unwrap();

        assert_eq!(report.monthly, dec!(433));
        assert_eq!(report.remaining_income, dec!(-567));
        assert!(report.is_deficit());
    }

    #[test]
    fn hourly_report_requires_hours() {
        let input = EarningsInput {
            working_hours_per_week: None,
            ..EarningsInput::hourly(dec!(40), dec!(20))
        };

        assert!(EarningsReport::compute(&input, dec!(0)).is_err());
    }
}
