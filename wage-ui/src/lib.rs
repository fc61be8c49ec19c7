pub mod app;
pub mod config;
pub mod csv_loader;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod utils;

pub use app::{App, Command, Outcome, SummaryRequest, run_session};
pub use config::AppConfig;
pub use error::{Dialog, UiError};
