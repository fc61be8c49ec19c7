//! Scripted sessions driven through `run_session`, the same loop the
//! binary runs on stdin/stdout.

use std::io::Cursor;
use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wage_ui::{App, AppConfig, SummaryRequest, run_session};

fn run_script(script: &str) -> (App, String) {
    let mut app = App::new(&AppConfig::default());
    let mut output = Vec::new();
    run_session(&mut app, Cursor::new(script.to_string()), &mut output).expect("in-memory I/O");
    (app, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn hourly_worker_walkthrough() {
    let (app, output) = run_script(
        "\
add Rent 650
add Groceries 250
add Gas 100
hours 40
rate 20
expenses
earnings
",
    );

    assert_eq!(app.state().ledger.total(), dec!(1000));
    assert!(output.contains("you would need to make $5.77 per hour before taxes."));
    assert!(output.contains("Your remaining income after expenses is: $2464.00"));
    assert!(output.contains("Your estimated weekly earnings are: $800.00"));
    assert!(output.contains("Your estimated monthly earnings are: $3464.00"));
    assert!(output.contains("Your estimated yearly earnings are: $0.00"));
}

#[test]
fn salaried_worker_walkthrough() {
    let (_, output) = run_script(
        "\
mode salary
salary 60000
earnings
",
    );

    assert!(output.contains("Your estimated weekly earnings are: $1153.85"));
    assert!(output.contains("Your estimated monthly earnings are: $5000.00"));
    assert!(output.contains("Your estimated yearly earnings are: $60000.00"));
}

#[test]
fn errors_are_reported_and_session_continues() {
    let (app, output) = run_script(
        "\
delete
add Rent abc
hours zero
rate 20
earnings
add Rent 500
list
",
    );

    assert!(output.contains("Error: Please select an expense to delete."));
    assert!(output.contains("Invalid Input: Invalid input. Please enter numbers only."));
    assert_eq!(app.state().ledger.len(), 1);
    assert!(output.contains("  1. Rent: $500.00\nTotal: $500.00"));
    assert_eq!(app.state().labels.weekly, dec!(0));
}

#[test]
fn zero_hours_never_shows_infinity() {
    let (app, output) = run_script(
        "\
add Rent 500
hours 0
rate 20
expenses
",
    );

    assert!(output.contains("Invalid Input"));
    assert!(!output.to_lowercase().contains("inf"));
    assert_eq!(app.state().labels.required_hourly_wage, None);
}

#[test]
fn quit_stops_reading_input() {
    let (app, _) = run_script(
        "\
add Rent 500
quit
add Gas 80
",
    );

    assert_eq!(app.state().ledger.len(), 1);
}

#[test]
fn unknown_commands_point_to_help() {
    let (_, output) = run_script("fly\n");

    assert!(output.contains("Error: Unknown command 'fly'. Type 'help' for a list of commands."));
}

#[test]
fn load_command_appends_csv_expenses() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_expenses.csv");

    let (app, output) = run_script(&format!("add Gym 30\nload {}\n", fixture.display()));

    assert_eq!(app.state().ledger.len(), 5);
    assert_eq!(app.state().ledger.total(), dec!(1745.75));
    assert!(output.contains("Total: $1745.75"));
}

#[test]
fn summary_with_csv_and_salary() {
    let mut app = App::new(&AppConfig::default());
    let request = SummaryRequest {
        expenses_file: Some(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("tests")
                .join("fixtures")
                .join("sample_expenses.csv"),
        ),
        mode: Some("salary".to_string()),
        salary: Some("60000".to_string()),
        ..SummaryRequest::default()
    };

    let text = app.summary(&request).unwrap();

    assert!(text.contains("Calculation method:   Salary"));
    assert!(text.contains("Total expenses:       $1715.75 (4 entries)"));
    assert!(text.contains("Required hourly wage: not set (enter working hours)"));
    assert!(text.contains("Remaining income:     $3284.25"));
}

#[test]
fn oversized_rate_is_reported_not_fatal() {
    let (app, output) = run_script(
        "\
hours 40
rate 79228162514264337593543950335
earnings
rate 20
earnings
",
    );

    assert!(output.contains("Invalid Input: Invalid input. Please enter numbers only."));
    assert!(output.contains("Your estimated weekly earnings are: $800.00"));
    assert_eq!(app.state().labels.weekly, dec!(800));
}

#[test]
fn expense_overflowing_the_total_is_rejected() {
    let (app, output) = run_script(
        "\
add A 79228162514264337593543950335
add B 1
list
",
    );

    assert!(output.contains("Invalid Input"));
    assert_eq!(app.state().ledger.len(), 1);
    assert!(output.contains("Total: $79228162514264337593543950335"));
}
