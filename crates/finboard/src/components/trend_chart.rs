use finboard_core::Kind;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::format::format_compact_amount;

/// Date-ordered bar chart of every transaction, colored by kind.
pub struct TrendChart;

/// Width of one bar plus its gap; bars carry MM-DD labels.
const BAR_SLOT: usize = 6;

impl TrendChart {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" CASH FLOW TIMELINE ");

        if state.ledger.is_empty() {
            let paragraph = Paragraph::new("No transactions recorded")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let ordered = state.ledger.sorted_by_date(false);

        // Sample evenly when there are more records than screen slots
        let inner_width = area.width.saturating_sub(2) as usize;
        let max_bars = (inner_width / BAR_SLOT).max(1);
        let step = if ordered.len() > max_bars {
            (ordered.len() as f64 / max_bars as f64).ceil() as usize
        } else {
            1
        };

        let bars: Vec<Bar> = ordered
            .iter()
            .step_by(step.max(1))
            .take(max_bars)
            .map(|tx| {
                let style = match tx.kind {
                    Kind::Income => Style::default().fg(Color::Green),
                    Kind::Expense => Style::default().fg(Color::Red),
                };

                Bar::default()
                    .value(tx.amount.max(0) as u64)
                    .label(Line::from(format!("{:02}-{:02}", tx.date.month(), tx.date.day())))
                    .text_value(format_compact_amount(tx.amount))
                    .style(style)
                    .value_style(style.add_modifier(Modifier::REVERSED))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .direction(Direction::Vertical);

        frame.render_widget(chart, area);
    }
}

impl Default for TrendChart {
    fn default() -> Self {
        Self::new()
    }
}
