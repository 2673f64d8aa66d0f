//! Terminal dashboard for a single-session income/expense ledger
//!
//! The dashboard renders everything from current ledger state on every
//! interaction: three summary cards, an expense-breakdown chart, a
//! date-ordered cash flow chart, a rule-based insight line, and a
//! sortable transaction table. New records are entered through a form
//! modal and appended to the in-memory ledger from `finboard_core`.

pub mod app;
pub mod components;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
