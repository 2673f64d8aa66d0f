//! Application state for the dashboard session.
//!
//! The ledger is owned here and lives exactly as long as the session;
//! there is no ambient global state and nothing is persisted.

use finboard_core::Ledger;

use crate::modals::ModalState;

pub struct AppState {
    /// The session ledger, injected at startup
    pub ledger: Ledger,
    /// Active modal overlay, if any
    pub modal: ModalState,
    /// Error shown in the status bar until dismissed
    pub error_message: Option<String>,
    /// Table sort direction (newest first by default)
    pub sort_descending: bool,
    /// Scroll offset into the sorted transaction table
    pub table_scroll: usize,
    pub exit: bool,
}

impl AppState {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            modal: ModalState::None,
            error_message: None,
            sort_descending: true,
            table_scroll: 0,
            exit: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
