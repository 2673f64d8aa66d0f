use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use finboard_core::{Category, Kind, Ledger, Transaction, parse_date};

use crate::components::{Component, EventResult, status_bar::StatusBar};
use crate::modals::{MessageModal, ModalAction, ModalResult, ModalState, handle_modal_key, render_modal};
use crate::screens::dashboard::DashboardScreen;
use crate::state::AppState;

pub struct App {
    state: AppState,
    dashboard: DashboardScreen,
    status_bar: StatusBar,
}

impl App {
    /// Create the app around an injected session ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            state: AppState::new(ledger),
            dashboard: DashboardScreen::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(
            "Dashboard started with {} ledger record(s)",
            self.state.ledger.len()
        );

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        // Session state is intentionally discarded on exit
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Dashboard
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.dashboard.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);

        // Modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Modal captures all input while active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.dashboard.handle_key(key_event, &mut self.state);
        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        match action {
            ModalAction::AddTransaction => self.submit_transaction(&value),
        }
    }

    /// Append a form submission to the ledger, all-or-nothing.
    fn submit_transaction(&mut self, serialized: &str) {
        let tx = match parse_submission(serialized) {
            Ok(tx) => tx,
            Err(message) => {
                // A rejected submission aborts without touching the ledger
                self.state.set_error(format!("Invalid transaction: {message}"));
                self.state.modal =
                    ModalState::Message(MessageModal::error("Invalid Transaction", &message));
                return;
            }
        };

        match self.state.ledger.append(tx) {
            Ok(()) => {
                tracing::info!(
                    date = %tx.date,
                    category = %tx.category,
                    kind = %tx.kind,
                    amount = tx.amount,
                    "Transaction recorded"
                );
                self.state.clear_error();
                self.state.table_scroll = 0;
                self.state.modal = ModalState::Message(MessageModal::info(
                    "Recorded",
                    "Transaction recorded successfully.",
                ));
            }
            Err(e) => {
                self.state.set_error(format!("Invalid transaction: {e}"));
                self.state.modal = ModalState::Message(MessageModal::error(
                    "Invalid Transaction",
                    &e.to_string(),
                ));
            }
        }
    }
}

/// Parse the serialized form ("date|category|kind|amount") into a record.
///
/// The form widgets constrain every field, so failures here indicate a
/// defect rather than expected user input; the message is surfaced in
/// the status bar either way.
fn parse_submission(serialized: &str) -> Result<Transaction, String> {
    let mut parts = serialized.split('|');
    let date_s = parts.next().unwrap_or_default();
    let category_s = parts.next().unwrap_or_default();
    let kind_s = parts.next().unwrap_or_default();
    let amount_s = parts.next().unwrap_or_default();

    let date = parse_date(date_s).map_err(|e| format!("{e}"))?;
    let category: Category = category_s.parse().map_err(|e| format!("{e}"))?;
    let kind: Kind = kind_s.parse().map_err(|e| format!("{e}"))?;

    // An untouched amount field submits as empty; the entry minimum is 0
    let amount_s = amount_s.trim();
    let amount: i64 = if amount_s.is_empty() {
        0
    } else {
        amount_s
            .replace(',', "")
            .parse()
            .map_err(|e| format!("invalid amount {amount_s:?}: {e}"))?
    };

    Transaction::new(date, category, kind, amount).map_err(|e| format!("{e}"))
}
