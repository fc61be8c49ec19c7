use std::fmt;

use wage_core::EarningsReport;

use crate::utils::format_currency;

/// An [`EarningsReport`] paired with the currency symbol it is shown in.
#[derive(Clone, Debug)]
pub struct ReportModel<'a> {
    pub report: &'a EarningsReport,
    pub currency_symbol: &'a str,
    pub expense_count: usize,
}

impl ReportModel<'_> {
    fn money(
        &self,
        value: rust_decimal::Decimal,
    ) -> String {
        format_currency(self.currency_symbol, value)
    }
}

impl fmt::Display for ReportModel<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let report = self.report;
        writeln!(f, "Calculation method:   {}", report.mode)?;
        writeln!(
            f,
            "Total expenses:       {} ({} entries)",
            self.money(report.total_expenses),
            self.expense_count
        )?;
        match report.required_hourly_wage {
            Some(wage) => writeln!(f, "Required hourly wage: {}", self.money(wage))?,
            None => writeln!(f, "Required hourly wage: not set (enter working hours)")?,
        }
        writeln!(f, "Weekly earnings:      {}", self.money(report.weekly))?;
        writeln!(f, "Monthly earnings:     {}", self.money(report.monthly))?;
        writeln!(f, "Yearly earnings:      {}", self.money(report.yearly))?;
        write!(f, "Remaining income:     {}", self.money(report.remaining_income))?;
        if report.is_deficit() {
            write!(f, " (deficit)")?;
        }
        Ok(())
    }
}
