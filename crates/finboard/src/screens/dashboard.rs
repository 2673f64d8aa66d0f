use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, category_chart::CategoryChart, insight_panel::InsightPanel,
    summary_cards::SummaryCards, transaction_table::TransactionTable, trend_chart::TrendChart,
};
use crate::modals::{FormModal, ModalState};
use crate::state::AppState;

/// The single dashboard screen: cards, charts, insight, table.
///
/// Everything below is re-rendered from current ledger state on each
/// interaction; the data volume is a handful of manually entered rows,
/// so there is no caching and no diffing.
pub struct DashboardScreen {
    summary_cards: SummaryCards,
    category_chart: CategoryChart,
    trend_chart: TrendChart,
    insight_panel: InsightPanel,
    transaction_table: TransactionTable,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            summary_cards: SummaryCards::new(),
            category_chart: CategoryChart::new(),
            trend_chart: TrendChart::new(),
            insight_panel: InsightPanel::new(),
            transaction_table: TransactionTable::new(),
        }
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DashboardScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('a') => {
                let today = jiff::Zoned::now().date();
                state.modal = ModalState::Form(FormModal::add_transaction(today));
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                state.sort_descending = !state.sort_descending;
                state.table_scroll = 0;
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if state.table_scroll + 1 < state.ledger.len() {
                    state.table_scroll += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.table_scroll = state.table_scroll.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Summary cards
                Constraint::Length(14), // Charts
                Constraint::Length(3),  // Insight
                Constraint::Min(0),     // Transaction table
            ])
            .split(area);

        self.summary_cards.render(frame, chunks[0], state);

        let chart_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.category_chart.render(frame, chart_chunks[0], state);
        self.trend_chart.render(frame, chart_chunks[1], state);

        self.insight_panel.render(frame, chunks[2], state);
        self.transaction_table.render(frame, chunks[3], state);
    }
}
