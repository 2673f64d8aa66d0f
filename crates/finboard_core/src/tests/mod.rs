//! Tests for the ledger core
//!
//! Organized by topic:
//! - `ledger` - Append validation and ordering guarantees
//! - `aggregate` - Totals, balance identity, category breakdown
//! - `insight` - The three-way advisory rule and its edge cases

mod insight;
mod ledger;

use jiff::civil::{Date, date};

use crate::model::{Category, Kind, Transaction};

/// Shorthand for building a valid record in tests.
pub(crate) fn tx(d: Date, category: Category, kind: Kind, amount: i64) -> Transaction {
    Transaction::new(d, category, kind, amount).unwrap()
}

/// The two-record ledgers from the dashboard scenarios share one income
/// date and one expense date.
pub(crate) fn income_expense_pair(income: i64, expense: i64) -> crate::Ledger {
    let mut ledger = crate::Ledger::new();
    ledger
        .append(tx(date(2023, 10, 1), Category::Salary, Kind::Income, income))
        .unwrap();
    ledger
        .append(tx(date(2023, 10, 5), Category::Rent, Kind::Expense, expense))
        .unwrap();
    ledger
}
