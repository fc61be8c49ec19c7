//! Earnings calculations for the wage calculator.
//!
//! [`earnings`] holds the individual figures, [`report`] bundles them into
//! a single snapshot, and [`common`] holds the cents rounding used for
//! display.

pub mod common;
pub mod earnings;
pub mod report;

pub use earnings::{
    EarningsError, MONTHS_PER_YEAR, WEEKS_PER_MONTH, WEEKS_PER_YEAR, monthly_earnings,
    monthly_hours_from_weekly, remaining_income, required_hourly_wage, weekly_earnings,
    yearly_earnings,
};
pub use report::EarningsReport;
