//! Aggregate totals derived from the ledger
//!
//! Every value here is a pure function of ledger contents, recomputed by
//! a full scan on each render pass. Integer arithmetic throughout; no
//! rounding, no hidden state.

use crate::ledger::Ledger;
use crate::model::{Category, Kind};

/// Sum of all income amounts. Zero for an empty or income-free ledger.
pub fn total_income(ledger: &Ledger) -> i64 {
    sum_of_kind(ledger, Kind::Income)
}

/// Sum of all expense amounts. Zero for an empty or expense-free ledger.
pub fn total_expense(ledger: &Ledger) -> i64 {
    sum_of_kind(ledger, Kind::Expense)
}

/// Total income minus total expense. May be negative.
pub fn balance(ledger: &Ledger) -> i64 {
    total_income(ledger) - total_expense(ledger)
}

fn sum_of_kind(ledger: &Ledger, kind: Kind) -> i64 {
    ledger
        .all()
        .iter()
        .filter(|tx| tx.kind == kind)
        .map(|tx| tx.amount)
        .sum()
}

/// Expense totals per category, in [`Category::ALL`] order.
///
/// Categories with no expense records are omitted; income records never
/// contribute. Feeds the expense-breakdown proportion chart.
pub fn expense_by_category(ledger: &Ledger) -> Vec<(Category, i64)> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let total: i64 = ledger
                .all()
                .iter()
                .filter(|tx| tx.kind == Kind::Expense && tx.category == category)
                .map(|tx| tx.amount)
                .sum();
            (total > 0).then_some((category, total))
        })
        .collect()
}

/// Snapshot of the three headline aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
}

impl Summary {
    /// Compute all three aggregates in one scan-per-total pass.
    pub fn of(ledger: &Ledger) -> Self {
        let total_income = total_income(ledger);
        let total_expense = total_expense(ledger);
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}
