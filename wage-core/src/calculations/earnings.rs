//! Earnings arithmetic for the wage calculator.
//!
//! Every function here is pure: it reads an [`EarningsInput`] snapshot (and
//! possibly the ledger total) and returns a figure. Nothing is rounded;
//! rounding to cents happens only when a value is displayed.
//!
//! | Figure          | Hourly mode                      | Salary mode          |
//! |-----------------|----------------------------------|----------------------|
//! | weekly          | rate × hours                     | salary ÷ 52          |
//! | monthly         | rate × hours × 4.33              | salary ÷ 12          |
//! | yearly          | 0                                | salary               |
//! | remaining       | monthly − total expenses         | monthly − total expenses |
//!
//! Hourly mode has no yearly projection, so its yearly figure is zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

use crate::models::{CalculationMode, EarningsInput};

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: Decimal = dec!(4.33);

/// Number of weeks in a year.
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Number of months in a year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Errors that can occur during earnings calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EarningsError {
    /// A required field is missing or outside its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Converts weekly working hours into monthly working hours.
///
/// # Errors
///
/// Returns [`EarningsError::InvalidInput`] if the product does not fit in a
/// [`Decimal`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::calculations::monthly_hours_from_weekly;
///
/// assert_eq!(monthly_hours_from_weekly(dec!(40)).unwrap(), dec!(173.2));
/// ```
pub fn monthly_hours_from_weekly(hours_per_week: Decimal) -> Result<Decimal, EarningsError> {
    checked_product("monthly working hours", hours_per_week, WEEKS_PER_MONTH)
}

/// Hourly wage needed for a month of work to cover `total_expenses`.
///
/// # Errors
///
/// Returns [`EarningsError::InvalidInput`] if `hours_per_week` is zero or
/// negative, if `total_expenses` is negative, or if the wage overflows.
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::calculations::{common::round_half_up, required_hourly_wage};
///
/// let wage = required_hourly_wage(dec!(1000), dec!(40)).unwrap();
/// assert_eq!(round_half_up(wage), dec!(5.77));
///
/// assert!(required_hourly_wage(dec!(1000), dec!(0)).is_err());
/// ```
pub fn required_hourly_wage(
    total_expenses: Decimal,
    hours_per_week: Decimal,
) -> Result<Decimal, EarningsError> {
    check_hours(hours_per_week)?;
    if total_expenses < Decimal::ZERO {
        return Err(EarningsError::InvalidInput(format!(
            "total expenses must not be negative, got {total_expenses}"
        )));
    }

    total_expenses
        .checked_div(monthly_hours_from_weekly(hours_per_week)?)
        .ok_or_else(|| too_large("required hourly wage"))
}

/// Projected monthly earnings.
///
/// # Errors
///
/// Returns [`EarningsError::InvalidInput`] if a field the selected mode
/// needs is missing or out of range, or if the figure overflows a
/// [`Decimal`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::{EarningsInput, calculations::monthly_earnings};
///
/// let hourly = EarningsInput::hourly(dec!(40), dec!(20));
/// assert_eq!(monthly_earnings(&hourly).unwrap(), dec!(3464.0));
///
/// let salaried = EarningsInput::salary(dec!(60000));
/// assert_eq!(monthly_earnings(&salaried).unwrap(), dec!(5000));
/// ```
pub fn monthly_earnings(input: &EarningsInput) -> Result<Decimal, EarningsError> {
    match input.mode {
        CalculationMode::Hourly => {
            let (hours, rate) = hourly_fields(input)?;
            checked_product("monthly earnings", rate, monthly_hours_from_weekly(hours)?)
        }
        CalculationMode::Salary => Ok(salary_field(input)? / MONTHS_PER_YEAR),
    }
}

/// Projected weekly earnings.
///
/// # Errors
///
/// Same conditions as [`monthly_earnings`].
pub fn weekly_earnings(input: &EarningsInput) -> Result<Decimal, EarningsError> {
    match input.mode {
        CalculationMode::Hourly => {
            let (hours, rate) = hourly_fields(input)?;
            checked_product("weekly earnings", rate, hours)
        }
        CalculationMode::Salary => Ok(salary_field(input)? / WEEKS_PER_YEAR),
    }
}

/// Projected yearly earnings. Always zero in hourly mode.
///
/// The hourly fields are still validated so a bad form reports an error
/// instead of a silent zero.
///
/// # Errors
///
/// Same conditions as [`monthly_earnings`].
pub fn yearly_earnings(input: &EarningsInput) -> Result<Decimal, EarningsError> {
    match input.mode {
        CalculationMode::Hourly => {
            hourly_fields(input)?;
            Ok(Decimal::ZERO)
        }
        CalculationMode::Salary => salary_field(input),
    }
}

/// Monthly earnings minus `total_expenses`.
///
/// A negative result is a deficit, not an error.
///
/// # Errors
///
/// Same conditions as [`monthly_earnings`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::{EarningsInput, calculations::remaining_income};
///
/// let input = EarningsInput::hourly(dec!(40), dec!(20));
/// assert_eq!(remaining_income(&input, dec!(1000)).unwrap(), dec!(2464));
/// assert_eq!(remaining_income(&input, dec!(4000)).unwrap(), dec!(-536));
/// ```
pub fn remaining_income(
    input: &EarningsInput,
    total_expenses: Decimal,
) -> Result<Decimal, EarningsError> {
    let remaining = monthly_earnings(input)?
        .checked_sub(total_expenses)
        .ok_or_else(|| too_large("remaining income"))?;
    if remaining < Decimal::ZERO {
        warn!(
            %remaining,
            %total_expenses,
            "expenses exceed monthly earnings"
        );
    }
    Ok(remaining)
}

fn too_large(figure: &str) -> EarningsError {
    EarningsError::InvalidInput(format!("{figure} is too large to compute"))
}

fn checked_product(
    figure: &str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, EarningsError> {
    a.checked_mul(b).ok_or_else(|| too_large(figure))
}

fn check_hours(hours_per_week: Decimal) -> Result<Decimal, EarningsError> {
    if hours_per_week <= Decimal::ZERO {
        return Err(EarningsError::InvalidInput(format!(
            "working hours per week must be greater than zero, got {hours_per_week}"
        )));
    }
    Ok(hours_per_week)
}

fn check_non_negative(
    field: &str,
    value: Option<Decimal>,
) -> Result<Decimal, EarningsError> {
    match value {
        None => Err(EarningsError::InvalidInput(format!("{field} is required"))),
        Some(v) if v < Decimal::ZERO => Err(EarningsError::InvalidInput(format!(
            "{field} must not be negative, got {v}"
        ))),
        Some(v) => Ok(v),
    }
}

/// Working hours and hourly rate, both validated.
fn hourly_fields(input: &EarningsInput) -> Result<(Decimal, Decimal), EarningsError> {
    let hours = working_hours(input)?;
    let rate = check_non_negative("hourly rate", input.hourly_rate)?;
    Ok((hours, rate))
}

pub(crate) fn working_hours(input: &EarningsInput) -> Result<Decimal, EarningsError> {
    let hours = input.working_hours_per_week.ok_or_else(|| {
        EarningsError::InvalidInput("working hours per week is required".to_string())
    })?;
    check_hours(hours)
}

fn salary_field(input: &EarningsInput) -> Result<Decimal, EarningsError> {
    check_non_negative("annual salary", input.annual_salary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn hourly_input() -> EarningsInput {
        EarningsInput::hourly(dec!(40), dec!(20))
    }

    // =========================================================================
    // monthly_hours_from_weekly
    // =========================================================================

    #[test]
    fn monthly_hours_uses_weeks_per_month() {
        assert_eq!(monthly_hours_from_weekly(dec!(40)).unwrap(), dec!(173.20));
        assert_eq!(monthly_hours_from_weekly(dec!(0)).unwrap(), dec!(0));
        assert_eq!(monthly_hours_from_weekly(dec!(37.5)).unwrap(), dec!(162.375));
    }

    #[test]
    fn monthly_hours_overflow_is_invalid() {
        assert!(matches!(
            monthly_hours_from_weekly(Decimal::MAX),
            Err(EarningsError::InvalidInput(_))
        ));
    }

    // =========================================================================
    // required_hourly_wage
    // =========================================================================

    #[test]
    fn required_hourly_wage_divides_by_monthly_hours() {
        let wage = required_hourly_wage(dec!(1000), dec!(40)).unwrap();

        assert_eq!(round_half_up(wage), dec!(5.77));
    }

    #[test]
    fn required_hourly_wage_is_zero_without_expenses() {
        assert_eq!(required_hourly_wage(dec!(0), dec!(40)).unwrap(), dec!(0));
    }

    #[test]
    fn required_hourly_wage_rejects_zero_hours() {
        let result = required_hourly_wage(dec!(1000), dec!(0));

        assert!(matches!(result, Err(EarningsError::InvalidInput(_))));
    }

    #[test]
    fn required_hourly_wage_rejects_negative_hours() {
        let result = required_hourly_wage(dec!(1000), dec!(-5));

        assert!(matches!(result, Err(EarningsError::InvalidInput(_))));
    }

    #[test]
    fn required_hourly_wage_rejects_negative_total() {
        let result = required_hourly_wage(dec!(-1), dec!(40));

        assert!(matches!(result, Err(EarningsError::InvalidInput(_))));
    }

    // =========================================================================
    // monthly / weekly / yearly
    // =========================================================================

    #[test]
    fn hourly_monthly_earnings() {
        assert_eq!(monthly_earnings(&hourly_input()).unwrap(), dec!(3464.0));
    }

    #[test]
    fn hourly_weekly_earnings() {
        assert_eq!(weekly_earnings(&hourly_input()).unwrap(), dec!(800));
    }

    #[test]
    fn hourly_yearly_earnings_is_always_zero() {
        for (hours, rate) in [(dec!(40), dec!(20)), (dec!(10), dec!(99.99)), (dec!(60), dec!(0))] {
            let input = EarningsInput::hourly(hours, rate);
            assert_eq!(yearly_earnings(&input).unwrap(), Decimal::ZERO);
        }
    }

    #[test]
    fn hourly_yearly_earnings_still_validates_fields() {
        let input = EarningsInput {
            hourly_rate: None,
            ..hourly_input()
        };

        assert!(yearly_earnings(&input).is_err());
    }

    #[test]
    fn salary_figures() {
        let input = EarningsInput::salary(dec!(60000));

        assert_eq!(monthly_earnings(&input).unwrap(), dec!(5000.0));
        assert_eq!(round_half_up(weekly_earnings(&input).unwrap()), dec!(1153.85));
        assert_eq!(yearly_earnings(&input).unwrap(), dec!(60000.0));
    }

    #[test]
    fn salary_mode_ignores_hourly_fields() {
        let input = EarningsInput {
            mode: CalculationMode::Salary,
            working_hours_per_week: Some(dec!(-3)),
            hourly_rate: Some(dec!(-1)),
            annual_salary: Some(dec!(24000)),
        };

        assert_eq!(monthly_earnings(&input).unwrap(), dec!(2000));
    }

    #[test]
    fn hourly_mode_ignores_salary_field() {
        let input = EarningsInput {
            annual_salary: Some(dec!(-100)),
            ..hourly_input()
        };

        assert_eq!(weekly_earnings(&input).unwrap(), dec!(800));
    }

    #[test]
    fn missing_hours_in_hourly_mode_is_invalid() {
        let input = EarningsInput {
            working_hours_per_week: None,
            ..hourly_input()
        };

        assert_eq!(
            monthly_earnings(&input),
            Err(EarningsError::InvalidInput(
                "working hours per week is required".to_string()
            ))
        );
    }

    #[test]
    fn zero_hours_in_hourly_mode_is_invalid() {
        let input = EarningsInput::hourly(dec!(0), dec!(20));

        assert!(weekly_earnings(&input).is_err());
    }

    #[test]
    fn negative_rate_is_invalid() {
        let input = EarningsInput::hourly(dec!(40), dec!(-20));

        assert!(matches!(
            monthly_earnings(&input),
            Err(EarningsError::InvalidInput(_))
        ));
    }

    #[test]
    fn huge_rate_is_invalid_instead_of_overflowing() {
        let input = EarningsInput::hourly(dec!(40), Decimal::MAX);

        assert!(matches!(
            weekly_earnings(&input),
            Err(EarningsError::InvalidInput(_))
        ));
        assert!(matches!(
            monthly_earnings(&input),
            Err(EarningsError::InvalidInput(_))
        ));
        assert!(yearly_earnings(&input).is_ok());
        assert!(remaining_income(&input, dec!(100)).is_err());
    }

    #[test]
    fn huge_hours_are_invalid_instead_of_overflowing() {
        let input = EarningsInput::hourly(Decimal::MAX, dec!(1));

        assert!(matches!(
            monthly_earnings(&input),
            Err(EarningsError::InvalidInput(_))
        ));
        assert!(required_hourly_wage(dec!(1000), Decimal::MAX).is_err());
    }

    #[test]
    fn tiny_hours_with_huge_expenses_is_invalid() {
        let result = required_hourly_wage(Decimal::MAX, dec!(0.0000000001));

        assert!(matches!(result, Err(EarningsError::InvalidInput(_))));
    }

    #[test]
    fn missing_salary_is_invalid() {
        let input = EarningsInput {
            mode: CalculationMode::Salary,
            ..EarningsInput::default()
        };

        assert_eq!(
            yearly_earnings(&input),
            Err(EarningsError::InvalidInput("annual salary is required".to_string()))
        );
    }

    #[test]
    fn negative_salary_is_invalid() {
        let input = EarningsInput::salary(dec!(-60000));

        assert!(monthly_earnings(&input).is_err());
    }

    // =========================================================================
    // remaining_income
    // =========================================================================

    #[test]
    fn remaining_income_subtracts_expenses() {
        assert_eq!(remaining_income(&hourly_input(), dec!(1000)).unwrap(), dec!(2464.0));
    }

    #[test]
    fn remaining_income_may_be_negative() {
        let input = EarningsInput::salary(dec!(24000));

        assert_eq!(remaining_income(&input, dec!(2500)).unwrap(), dec!(-500));
    }

    #[test]
    fn remaining_income_propagates_invalid_input() {
        let input = EarningsInput::hourly(dec!(0), dec!(20));

        assert!(remaining_income(&input, dec!(100)).is_err());
    }
}
