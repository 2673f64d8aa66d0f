use finboard_core::Category;
use finboard_core::aggregate::expense_by_category;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::util::format::format_amount;

/// Consistent dark grey for the empty portion of each bar
const DARK_GREY: Color = Color::Rgb(40, 40, 40);

/// Proportional horizontal bars of expense totals per category.
pub struct CategoryChart;

impl CategoryChart {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" EXPENSE BREAKDOWN ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let breakdown = expense_by_category(&state.ledger);
        if breakdown.is_empty() {
            let msg =
                Paragraph::new("No expenses recorded").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(msg, inner);
            return;
        }

        let total: i64 = breakdown.iter().map(|(_, v)| v).sum();
        if total <= 0 {
            return;
        }

        // One row per category: name, proportional bar, share, amount
        let max_rows = inner.height as usize;
        for (row, (category, value)) in breakdown.iter().take(max_rows).enumerate() {
            let color = category_color(*category);
            let share = *value as f64 / total as f64;
            let percentage = (share * 100.0).round() as i64;

            let bar_width = (inner.width as usize).saturating_sub(36);
            let filled = (bar_width as f64 * share).round() as usize;
            let empty = bar_width.saturating_sub(filled);

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<14} ", category.name()),
                    Style::default().fg(color),
                ),
                Span::styled(" ".repeat(filled), Style::default().bg(color)),
                Span::styled(" ".repeat(empty), Style::default().bg(DARK_GREY)),
                Span::raw(format!(" {:>3}% ", percentage)),
                Span::styled(
                    format_amount(*value),
                    Style::default().fg(Color::Rgb(100, 100, 100)),
                ),
            ]);

            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}

impl Default for CategoryChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed color per category so bars and table rows agree.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Salary => Color::Green,
        Category::Rent => Color::Red,
        Category::Groceries => Color::Yellow,
        Category::Entertainment => Color::Magenta,
        Category::Investment => Color::Blue,
        Category::Other => Color::Gray,
    }
}
