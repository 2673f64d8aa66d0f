//! The session ledger - an append-only sequence of transactions
//!
//! The ledger is exclusively owned by the active session and holds every
//! record in insertion order. Records are never edited, deleted, or
//! reordered in storage; display order is a caller concern handled by
//! [`Ledger::sorted_by_date`].

use jiff::civil::date;

use crate::error::ValidationError;
use crate::model::{Category, Kind, Transaction};

/// An ordered, append-only collection of transactions.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with the fixed illustrative sample:
    /// one month of salary, rent, groceries, and an investment payout.
    pub fn sample() -> Self {
        let entries = vec![
            Transaction {
                date: date(2023, 10, 1),
                category: Category::Salary,
                kind: Kind::Income,
                amount: 50_000_000,
            },
            Transaction {
                date: date(2023, 10, 5),
                category: Category::Rent,
                kind: Kind::Expense,
                amount: 15_000_000,
            },
            Transaction {
                date: date(2023, 10, 10),
                category: Category::Groceries,
                kind: Kind::Expense,
                amount: 4_000_000,
            },
            Transaction {
                date: date(2023, 10, 15),
                category: Category::Investment,
                kind: Kind::Income,
                amount: 10_000_000,
            },
        ];
        Self { entries }
    }

    /// Append a transaction to the end of the ledger.
    ///
    /// Validates the record's invariants even though the entry form
    /// already constrains its widgets; on error the ledger is unchanged.
    pub fn append(&mut self, tx: Transaction) -> Result<(), ValidationError> {
        if tx.amount < 0 {
            return Err(ValidationError::NegativeAmount(tx.amount));
        }
        self.entries.push(tx);
        Ok(())
    }

    /// The full sequence of transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Transactions ordered by date for display.
    ///
    /// Stable sort: records sharing a date keep their insertion order.
    /// The ledger itself is not reordered.
    pub fn sorted_by_date(&self, descending: bool) -> Vec<&Transaction> {
        let mut view: Vec<&Transaction> = self.entries.iter().collect();
        if descending {
            view.sort_by(|a, b| b.date.cmp(&a.date));
        } else {
            view.sort_by(|a, b| a.date.cmp(&b.date));
        }
        view
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
