use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Transaction category.
///
/// A closed set chosen at entry time. Modeled as an enum rather than a
/// free-text string so an invalid category is a construction-time error,
/// never a data-quality issue discovered while aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Salary,
    Rent,
    Groceries,
    Entertainment,
    Investment,
    Other,
}

impl Category {
    /// All categories, in the order the entry form presents them.
    pub const ALL: [Category; 6] = [
        Category::Salary,
        Category::Rent,
        Category::Groceries,
        Category::Entertainment,
        Category::Investment,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Rent => "Rent",
            Category::Groceries => "Groceries",
            Category::Entertainment => "Entertainment",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
