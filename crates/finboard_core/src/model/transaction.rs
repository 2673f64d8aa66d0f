use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::ValidationError;

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Income, Kind::Expense];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}

/// A single recorded income or expense, immutable once created.
///
/// `amount` is a non-negative integer in the smallest currency unit.
/// The direction of the flow lives in `kind`, not in the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: Date,
    pub category: Category,
    pub kind: Kind,
    pub amount: i64,
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|source| ValidationError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

impl Transaction {
    /// Create a transaction, rejecting a negative amount.
    pub fn new(
        date: Date,
        category: Category,
        kind: Kind,
        amount: i64,
    ) -> Result<Self, ValidationError> {
        if amount < 0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        Ok(Self {
            date,
            category,
            kind,
            amount,
        })
    }
}
