use finboard_core::aggregate::Summary;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::format::format_amount;

/// The three headline cards: total income, total expense, balance.
pub struct SummaryCards;

impl SummaryCards {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = Summary::of(&state.ledger);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        render_card(
            frame,
            chunks[0],
            " TOTAL INCOME ",
            summary.total_income,
            Color::Green,
        );
        render_card(
            frame,
            chunks[1],
            " TOTAL EXPENSES ",
            summary.total_expense,
            Color::Red,
        );
        let balance_color = if summary.balance < 0 {
            Color::Red
        } else {
            Color::Cyan
        };
        render_card(frame, chunks[2], " BALANCE ", summary.balance, balance_color);
    }
}

impl Default for SummaryCards {
    fn default() -> Self {
        Self::new()
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: i64, color: Color) {
    let block = Block::default().borders(Borders::ALL).title(title);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", format_amount(value)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
