//! The calculator form as a line-driven session.
//!
//! Each line the user enters maps to one button or field of the form. A
//! command either succeeds and prints the labels it touched, or fails and
//! prints a dialog; failures never change the ledger or the labels.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};
use wage_core::calculations::{
    monthly_earnings, remaining_income, required_hourly_wage, weekly_earnings, yearly_earnings,
};
use wage_core::{CalculationMode, EarningsReport, Ledger};

use crate::config::AppConfig;
use crate::csv_loader;
use crate::error::UiError;
use crate::logging;
use crate::models::{ReportModel, WageForm};
use crate::state::AppState;
use crate::utils::{format_currency, parse_decimal};

pub const HELP: &str = "\
Commands:
  add <name> <value>      add an expense (the last word is the value)
  delete [n]              delete expense number n as shown by 'list'
  list                    show the expenses and their total
  load <file.csv>         append expenses from a CSV file (name,value)
  hours <value>           set working hours per week
  mode hourly|salary      choose the calculation method
  rate <value>            set the hourly rate
  salary <value>          set the annual salary
  expenses                calculate the hourly wage needed to cover expenses
  earnings                calculate weekly, monthly and yearly earnings
  remaining               calculate remaining income after expenses
  show                    show the form and every label
  reset                   clear all expenses and results
  log <level>             change the log level (error, warn, info, debug, trace)
  help                    show this help
  quit                    leave the calculator";

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, value: String },
    Delete(Option<String>),
    List,
    Load(PathBuf),
    Hours(String),
    Mode(String),
    Rate(String),
    Salary(String),
    CalculateExpenses,
    CalculateEarnings,
    CalculateRemaining,
    Show,
    Reset,
    LogLevel(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, UiError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "add" => {
                let (name, value) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, value)) => (name.trim(), value),
                    None => ("", rest),
                };
                Self::Add {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }
            "delete" | "del" | "rm" => Self::Delete((!rest.is_empty()).then(|| rest.to_string())),
            "list" | "ls" => Self::List,
            "load" => Self::Load(PathBuf::from(rest)),
            "hours" => Self::Hours(rest.to_string()),
            "mode" => Self::Mode(rest.to_string()),
            "rate" => Self::Rate(rest.to_string()),
            "salary" => Self::Salary(rest.to_string()),
            "expenses" => Self::CalculateExpenses,
            "earnings" => Self::CalculateEarnings,
            "remaining" => Self::CalculateRemaining,
            "show" => Self::Show,
            "reset" => Self::Reset,
            "log" => Self::LogLevel(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(UiError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Inputs for a one-shot calculation.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    /// `NAME=VALUE` pairs.
    pub expenses: Vec<String>,
    pub expenses_file: Option<PathBuf>,
    pub hours: Option<String>,
    pub mode: Option<String>,
    pub rate: Option<String>,
    pub salary: Option<String>,
}

pub struct App {
    state: AppState,
    currency_symbol: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(WageForm::from_defaults(&config.defaults)),
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn money(
        &self,
        value: rust_decimal::Decimal,
    ) -> String {
        format_currency(&self.currency_symbol, value)
    }

    /// Runs one command against the session state.
    pub fn execute(
        &mut self,
        command: Command,
    ) -> Result<Outcome, UiError> {
        debug!(?command, "executing command");
        let output = match command {
            Command::Add { name, value } => {
                let value = parse_decimal("expense value", &value)?;
                self.state.ledger.add(name, value)?;
                self.render_ledger()
            }
            Command::Delete(selection) => {
                let index = selection
                    .and_then(|s| s.trim().parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .ok_or(UiError::NoSelection)?;
                let removed = self.state.ledger.remove_at(index)?;
                format!("Deleted {}.\n{}", removed.name(), self.render_ledger())
            }
            Command::List => self.render_ledger(),
            Command::Load(path) => {
                let loaded = csv_loader::load_from_file(&path)?;
                self.append(&loaded)?;
                info!(count = loaded.len(), path = %path.display(), "imported expenses");
                self.render_ledger()
            }
            Command::Hours(text) => {
                self.state.form.working_hours = text;
                self.state.form.to_string()
            }
            Command::Mode(text) => {
                self.state.form.mode = parse_mode(&text)?;
                self.state.form.to_string()
            }
            Command::Rate(text) => {
                self.state.form.hourly_rate = text;
                self.state.form.to_string()
            }
            Command::Salary(text) => {
                self.state.form.annual_salary = text;
                self.state.form.to_string()
            }
            Command::CalculateExpenses => self.calculate_expenses()?,
            Command::CalculateEarnings => self.calculate_earnings()?,
            Command::CalculateRemaining => self.calculate_remaining()?,
            Command::Show => format!(
                "{}\n{}\n{}",
                self.state.form,
                self.render_ledger(),
                self.state.labels.render(&self.currency_symbol).join("\n")
            ),
            Command::Reset => {
                self.state.reset();
                "Cleared all expenses and results.".to_string()
            }
            Command::LogLevel(level) => {
                logging::set_log_level(&level).map_err(|e| UiError::LogLevel(e.to_string()))?;
                format!("Log level set to '{level}'.")
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// Hourly wage needed to cover expenses, plus remaining income.
    fn calculate_expenses(&mut self) -> Result<String, UiError> {
        let hours = self.state.form.working_hours()?;
        let input = self.state.form.to_earnings_input()?;
        let total = self.state.ledger.total();

        let wage = required_hourly_wage(total, hours)?;
        let remaining = remaining_income(&input, total)?;

        let labels = &mut self.state.labels;
        labels.required_hourly_wage = Some(wage);
        labels.remaining_income = Some(remaining);

        let symbol = &self.currency_symbol;
        Ok([labels.required_wage_text(symbol), labels.remaining_text(symbol)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn calculate_earnings(&mut self) -> Result<String, UiError> {
        let input = self.state.form.to_earnings_input()?;

        let weekly = weekly_earnings(&input)?;
        let monthly = monthly_earnings(&input)?;
        let yearly = yearly_earnings(&input)?;

        let labels = &mut self.state.labels;
        labels.weekly = weekly;
        labels.monthly = monthly;
        labels.yearly = yearly;

        Ok(labels.earnings_text(&self.currency_symbol).join("\n"))
    }

    fn calculate_remaining(&mut self) -> Result<String, UiError> {
        let input = self.state.form.to_earnings_input()?;
        let remaining = remaining_income(&input, self.state.ledger.total())?;

        self.state.labels.remaining_income = Some(remaining);
        Ok(self
            .state
            .labels
            .remaining_text(&self.currency_symbol)
            .unwrap_or_default())
    }

    fn append(
        &mut self,
        loaded: &Ledger,
    ) -> Result<(), UiError> {
        let mut merged = self.state.ledger.clone();
        for expense in loaded.iter() {
            merged.add(expense.name(), expense.value())?;
        }
        self.state.ledger = merged;
        Ok(())
    }

    fn render_ledger(&self) -> String {
        let ledger = &self.state.ledger;
        if ledger.is_empty() {
            return format!("No expenses entered. Total: {}", self.money(ledger.total()));
        }

        let mut lines: Vec<String> = ledger
            .iter()
            .enumerate()
            .map(|(i, expense)| {
                format!("{:>3}. {}: {}", i + 1, expense.name(), self.money(expense.value()))
            })
            .collect();
        lines.push(format!("Total: {}", self.money(ledger.total())));
        lines.join("\n")
    }

    /// Seeds the session from `request` and computes every figure at once.
    pub fn summary(
        &mut self,
        request: &SummaryRequest,
    ) -> Result<String, UiError> {
        if let Some(path) = &request.expenses_file {
            let loaded = csv_loader::load_from_file(path)?;
            self.append(&loaded)?;
        }
        for pair in &request.expenses {
            let (name, value) = pair
                .rsplit_once('=')
                .ok_or_else(|| UiError::MalformedExpense(pair.clone()))?;
            let value = parse_decimal("expense value", value)?;
            self.state.ledger.add(name, value)?;
        }

        let form = &mut self.state.form;
        if let Some(mode) = &request.mode {
            form.mode = parse_mode(mode)?;
        }
        if let Some(hours) = &request.hours {
            form.working_hours = hours.clone();
        }
        if let Some(rate) = &request.rate {
            form.hourly_rate = rate.clone();
        }
        if let Some(salary) = &request.salary {
            form.annual_salary = salary.clone();
        }

        let input = self.state.form.to_earnings_input()?;
        let report = EarningsReport::compute(&input, self.state.ledger.total())?;

        Ok(format!(
            "{}\n\n{}",
            self.render_ledger(),
            ReportModel {
                report: &report,
                currency_symbol: &self.currency_symbol,
                expense_count: self.state.ledger.len(),
            }
        ))
    }
}

fn parse_mode(text: &str) -> Result<CalculationMode, UiError> {
    CalculationMode::parse(text).ok_or_else(|| UiError::UnknownMode(text.trim().to_string()))
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Errors are written to `output` as dialogs; only I/O failures end the
/// session early.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Hourly Wage Calculator. Type 'help' for a list of commands.")?;
    for line in input.lines() {
        let line = line?;
        let result = Command::parse(&line).and_then(|command| match command {
            Some(command) => app.execute(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(Outcome::Output(text))) => writeln!(output, "{text}")?,
            Ok(Some(Outcome::Quit)) => break,
            Ok(None) => {}
            Err(error) => {
                debug!(%error, "command failed");
                writeln!(output, "{}", error.dialog())?;
            }
        }
    }
    output.flush()
}
