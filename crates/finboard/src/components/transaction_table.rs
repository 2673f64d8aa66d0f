use finboard_core::Kind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::AppState;
use crate::util::format::format_amount;

/// The full transaction list, sorted by date for display only.
pub struct TransactionTable;

impl TransactionTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = if state.sort_descending {
            " TRANSACTIONS (newest first) "
        } else {
            " TRANSACTIONS (oldest first) "
        };

        let items: Vec<ListItem> = if state.ledger.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No transactions recorded",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            let ordered = state.ledger.sorted_by_date(state.sort_descending);
            let visible = (area.height as usize).saturating_sub(3);

            let mut items = vec![ListItem::new(Line::from(Span::styled(
                format!(
                    "{:<12} {:<14} {:<8} {:>18}",
                    "Date", "Category", "Kind", "Amount"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )))];

            for tx in ordered.iter().skip(state.table_scroll).take(visible) {
                let kind_color = match tx.kind {
                    Kind::Income => Color::Green,
                    Kind::Expense => Color::Red,
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<12} ", tx.date.to_string())),
                    Span::raw(format!("{:<14} ", tx.category.name())),
                    Span::styled(
                        format!("{:<8} ", tx.kind.name()),
                        Style::default().fg(kind_color),
                    ),
                    Span::raw(format!("{:>18}", format_amount(tx.amount))),
                ])));
            }

            items
        };

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

        frame.render_widget(list, area);
    }
}

impl Default for TransactionTable {
    fn default() -> Self {
        Self::new()
    }
}
