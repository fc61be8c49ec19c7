use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// A named monthly expense. Never mutated after it enters a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    name: String,
    value: Decimal,
}

impl Expense {
    pub(crate) fn new(
        name: String,
        value: Decimal,
    ) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for Expense {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
