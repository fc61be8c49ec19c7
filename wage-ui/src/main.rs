use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use wage_ui::logging::{self, LogOptions};
use wage_ui::{App, AppConfig, SummaryRequest, run_session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Hourly wage calculator.
///
/// Enter your monthly expenses and either an hourly rate or an annual
/// salary to see the wage you need and what is left after expenses.
/// Without a subcommand the interactive form starts.
#[derive(Debug, Parser)]
#[command(name = "wage-calc", version, about)]
struct Cli {
    /// Configuration file (defaults to `wage-calc.toml` when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive; overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Hide log output on stderr (file logging is unaffected).
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the interactive form (default).
    Interactive,
    /// Compute every figure once and exit.
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
struct SummaryArgs {
    /// An expense as NAME=VALUE; repeat for more.
    #[arg(short, long = "expense", value_name = "NAME=VALUE")]
    expenses: Vec<String>,

    /// CSV file with `name,value` columns.
    #[arg(short = 'f', long)]
    expenses_file: Option<PathBuf>,

    /// Working hours per week.
    #[arg(long)]
    hours: Option<String>,

    /// Calculation method: hourly or salary.
    #[arg(short, long)]
    mode: Option<String>,

    /// Hourly rate (hourly mode).
    #[arg(short, long)]
    rate: Option<String>,

    /// Annual salary (salary mode).
    #[arg(short, long)]
    salary: Option<String>,
}

impl From<SummaryArgs> for SummaryRequest {
    fn from(args: SummaryArgs) -> Self {
        Self {
            expenses: args.expenses,
            expenses_file: args.expenses_file,
            hours: args.hours,
            mode: args.mode,
            rate: args.rate,
            salary: args.salary,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref()).context("failed to load configuration")?;

    logging::init_logging(&LogOptions {
        level: cli.log_level.as_deref().unwrap_or(&config.log_level),
        stderr: !cli.quiet,
        file: cli.log_file.as_deref(),
    })?;
    debug!(?config, "configuration resolved");

    let mut app = App::new(&config);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            info!("starting interactive form");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut app, stdin.lock(), &mut stdout).context("session I/O failed")?;
        }
        Commands::Summary(args) => match app.summary(&args.into()) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                debug!(%error, "summary failed");
                anyhow::bail!("{}", error.dialog());
            }
        },
    }

    Ok(())
}
