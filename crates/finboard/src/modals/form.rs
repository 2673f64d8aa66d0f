use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::modals::{FieldType, FormField, FormModal, ModalResult};
use crate::util::format::group_thousands;

use super::centered_rect;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line};

/// Render the entry form modal
pub fn render_form_modal(frame: &mut Frame, modal: &FormModal) {
    let area = frame.area();

    // Each field: 1 line label + 3 lines input box
    let field_height = modal.fields.len() as u16 * 4;
    let modal_height = (field_height + 6).min(35);
    let modal_width = 60;

    let modal_area = centered_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", modal.title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut constraints = vec![Constraint::Length(1)]; // top spacing
    for _ in &modal.fields {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // help line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in modal.fields.iter().enumerate() {
        let is_focused = idx == modal.focused_field;
        render_field(frame, chunks[idx + 1], field, is_focused, modal.editing);
    }

    let help_idx = modal.fields.len() + 2;
    let help = if modal.editing {
        HelpText::new()
            .key("[Enter]", Color::Green, "Done")
            .key("[F10/Ctrl+S]", Color::Cyan, "Submit")
            .key("[Esc]", Color::Yellow, "Stop editing")
            .build()
    } else {
        HelpText::new()
            .key("[j/k/Tab]", Color::DarkGray, "Navigate")
            .key("[Enter]", Color::Green, "Edit/cycle")
            .key("[F10/Ctrl+S]", Color::Cyan, "Submit")
            .key("[Esc]", Color::Yellow, "Cancel")
            .build()
    };
    frame.render_widget(help, chunks[help_idx]);
}

fn render_field(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    field: &FormField,
    is_focused: bool,
    is_editing: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let label = Paragraph::new(Line::from(Span::styled(&field.label, label_style)));
    frame.render_widget(label, chunks[0]);

    let border_color = match (is_focused, is_editing) {
        (true, true) => Color::Cyan,
        (true, false) => Color::Yellow,
        _ => Color::DarkGray,
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input_inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    if is_focused && is_editing && field.field_type != FieldType::Select {
        let input_width = (input_inner.width as usize).saturating_sub(1);
        let scrolled = calculate_scroll(&field.value, field.cursor_pos, input_width + 2);
        let line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos);
        frame.render_widget(Paragraph::new(line), input_inner);
    } else {
        let value = Paragraph::new(Line::from(Span::raw(format_display_value(field))));
        frame.render_widget(value, input_inner);
    }
}

fn format_display_value(field: &FormField) -> String {
    match field.field_type {
        FieldType::Currency => {
            if let Ok(val) = field.value.parse::<i64>() {
                group_thousands(val)
            } else if field.value.is_empty() {
                "0".to_string()
            } else {
                field.value.clone()
            }
        }
        FieldType::Select => format!("{} \u{25BE}", field.value),
        FieldType::Text => field.value.clone(),
    }
}

/// Handle key events for the entry form
pub fn handle_form_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    if modal.editing {
        handle_editing_key(key, modal)
    } else {
        handle_navigation_key(key, modal)
    }
}

/// Submit works in both modes; Ctrl+Enter is unreliable in some
/// terminals, so Ctrl+S and F10 are accepted too.
fn is_submit(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers.contains(KeyModifiers::CONTROL)),
        (KeyCode::Enter, true) | (KeyCode::Char('s'), true)
    ) || key.code == KeyCode::F(10)
}

fn handle_editing_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    if is_submit(key) {
        return ModalResult::Confirmed(modal.action, modal.serialize());
    }

    let field = &mut modal.fields[modal.focused_field];

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            modal.editing = false;
            ModalResult::Continue
        }
        KeyCode::Backspace => {
            if field.cursor_pos > 0 {
                field.cursor_pos -= 1;
                field.value.remove(field.cursor_pos);
            }
            ModalResult::Continue
        }
        KeyCode::Delete => {
            if field.cursor_pos < field.value.len() {
                field.value.remove(field.cursor_pos);
            }
            ModalResult::Continue
        }
        KeyCode::Left => {
            field.cursor_pos = field.cursor_pos.saturating_sub(1);
            ModalResult::Continue
        }
        KeyCode::Right => {
            if field.cursor_pos < field.value.len() {
                field.cursor_pos += 1;
            }
            ModalResult::Continue
        }
        KeyCode::Home => {
            field.cursor_pos = 0;
            ModalResult::Continue
        }
        KeyCode::End => {
            field.cursor_pos = field.value.len();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            // Amounts are non-negative integers; text fields take
            // printable ASCII only, keeping cursor_pos a valid byte
            // index into the value
            let valid = match field.field_type {
                FieldType::Currency => c.is_ascii_digit(),
                FieldType::Text => c.is_ascii() && !c.is_ascii_control(),
                FieldType::Select => false,
            };

            if valid {
                field.value.insert(field.cursor_pos, c);
                field.cursor_pos += 1;
            }
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

fn handle_navigation_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    if is_submit(key) {
        return ModalResult::Confirmed(modal.action, modal.serialize());
    }

    let field_count = modal.fields.len();
    let field = &mut modal.fields[modal.focused_field];

    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => {
            match field.field_type {
                FieldType::Select => field.cycle(true),
                _ => {
                    modal.editing = true;
                    field.cursor_pos = field.value.len();
                }
            }
            ModalResult::Continue
        }
        KeyCode::Left if field.field_type == FieldType::Select => {
            field.cycle(false);
            ModalResult::Continue
        }
        KeyCode::Right if field.field_type == FieldType::Select => {
            field.cycle(true);
            ModalResult::Continue
        }
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            modal.focused_field = (modal.focused_field + 1) % field_count;
            ModalResult::Continue
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            modal.focused_field = (modal.focused_field + field_count - 1) % field_count;
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_wraps_focus() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        for _ in 0..form.fields.len() {
            handle_form_key(key(KeyCode::Tab), &mut form);
        }
        assert_eq!(form.focused_field, 0);
    }

    #[test]
    fn test_enter_cycles_select_without_edit_mode() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        form.focused_field = 2; // Kind
        handle_form_key(key(KeyCode::Enter), &mut form);
        assert!(!form.editing);
        assert_eq!(form.fields[2].value, "Expense");
    }

    #[test]
    fn test_currency_field_rejects_non_digits() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        form.focused_field = 3;
        handle_form_key(key(KeyCode::Enter), &mut form);
        assert!(form.editing);

        for c in ['1', '2', 'x', '-', '3'] {
            handle_form_key(key(KeyCode::Char(c)), &mut form);
        }
        assert_eq!(form.fields[3].value, "123");
    }

    #[test]
    fn test_text_field_ignores_non_ascii_input() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        handle_form_key(key(KeyCode::Enter), &mut form); // edit the Date field
        assert!(form.editing);

        // Multi-byte characters are dropped; later edits stay on valid
        // byte offsets instead of panicking mid-string
        for c in ['é', '日', 'x'] {
            handle_form_key(key(KeyCode::Char(c)), &mut form);
        }
        assert_eq!(form.fields[0].value, "2023-10-20x");

        handle_form_key(key(KeyCode::Backspace), &mut form);
        assert_eq!(form.fields[0].value, "2023-10-20");
    }

    #[test]
    fn test_f10_submits_with_serialized_fields() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        form.fields[3].value = "5000".to_string();

        let result = handle_form_key(key(KeyCode::F(10)), &mut form);
        assert_eq!(
            result,
            ModalResult::Confirmed(
                crate::modals::ModalAction::AddTransaction,
                "2023-10-20|Salary|Income|5000".to_string()
            )
        );
    }

    #[test]
    fn test_esc_cancels_in_navigation_mode() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        assert_eq!(handle_form_key(key(KeyCode::Esc), &mut form), ModalResult::Cancelled);
    }
}
