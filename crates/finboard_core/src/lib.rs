//! Transaction ledger and derived aggregates for the finboard dashboard
//!
//! This crate is the domain core behind the terminal dashboard:
//! - An append-only [`Ledger`] of income/expense transactions
//! - Aggregate totals derived by scanning the ledger ([`aggregate`])
//! - A rule-based advisory message over those totals ([`insight`])
//!
//! Everything is session-scoped and in-memory: the ledger lives exactly
//! as long as its owner, there is no persistence and no shared state.
//! Amounts are integers in the smallest currency unit, so all derived
//! totals are integer-exact.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod error;
pub mod insight;
pub mod ledger;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{Summary, balance, expense_by_category, total_expense, total_income};
pub use error::ValidationError;
pub use insight::{Insight, evaluate};
pub use ledger::Ledger;
pub use model::{Category, Kind, Transaction, parse_date};
