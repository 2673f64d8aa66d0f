use finboard_core::aggregate::Summary;
use finboard_core::insight::{Insight, evaluate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

/// Zero-or-one advisory message derived from the current aggregates.
pub struct InsightPanel;

impl InsightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = Summary::of(&state.ledger);

        let line = match evaluate(&summary) {
            Some(insight @ Insight::Overspending) => Line::from(Span::styled(
                format!("\u{26A0} {}", insight.message()),
                Style::default().fg(Color::Yellow),
            )),
            Some(insight @ Insight::Saving { .. }) => Line::from(Span::styled(
                format!("\u{2714} {}", insight.message()),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                "No insight for the current figures.",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let paragraph =
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" INSIGHT "));

        frame.render_widget(paragraph, area);
    }
}

impl Default for InsightPanel {
    fn default() -> Self {
        Self::new()
    }
}
