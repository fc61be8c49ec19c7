use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects which earnings field is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    #[default]
    Hourly,
    Salary,
}

impl CalculationMode {
    pub fn all() -> &'static [CalculationMode] {
        &[Self::Hourly, Self::Salary]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Salary => "Salary",
        }
    }

    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
