//! Logging for the calculator.
//!
//! Records go to stderr so they never mix with the form on stdout, and
//! optionally to a log file named on the command line. The level filter
//! stays reloadable so the `log` command can change it mid-session.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Where records go and which of them pass.
#[derive(Debug, Clone, Copy)]
pub struct LogOptions<'a> {
    /// A bare level or a full `EnvFilter` directive. `RUST_LOG` wins over it.
    pub level: &'a str,
    /// `false` silences stderr; the log file still receives records.
    pub stderr: bool,
    /// Appended to, created if missing.
    pub file: Option<&'a Path>,
}

static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// `<local time> <LEVEL> <target>: <fields>`, colored on a terminal.
struct CalcFormat;

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

impl<S, N> FormatEvent<S, N> for CalcFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{time}\x1b[0m \x1b[{}m{:>5}\x1b[0m \x1b[36m{}\x1b[0m: ",
                level_color(meta.level()),
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{time} {:>5} {}: ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn make_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(options: &LogOptions<'_>) -> Result<()> {
    let (filter, handle) = reload::Layer::new(make_filter(options.level));

    let stderr_layer = options.stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(CalcFormat)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    let file_layer = match options.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(CalcFormat)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging is already initialized")?;

    let _ = LEVEL_HANDLE.set(handle);
    Ok(())
}

/// Replaces the active level filter. Accepts the same text as
/// [`LogOptions::level`].
pub fn set_log_level(level: &str) -> Result<()> {
    let level = level.trim();
    let handle = LEVEL_HANDLE.get().context("logging is not initialized")?;
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    handle.reload(filter).context("cannot change the log level")
}
