pub mod calculations;
pub mod models;

pub use calculations::{EarningsError, EarningsReport};
pub use models::*;
