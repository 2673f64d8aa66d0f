/// Modal types for the entry form and message popups.
use jiff::civil::Date;

use finboard_core::{Category, Kind};

use super::ModalAction;

#[derive(Debug)]
pub enum ModalState {
    None,
    Form(FormModal),
    Message(MessageModal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Free text, edited in place
    Text,
    /// Digits only, displayed with thousands separators
    Currency,
    /// One of a fixed option list, cycled with Enter or arrows
    Select,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub field_type: FieldType,
    pub value: String,
    pub cursor_pos: usize,
    /// Options for Select fields, empty otherwise
    pub options: Vec<String>,
}

impl FormField {
    pub fn text(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            field_type: FieldType::Text,
            value: value.to_string(),
            cursor_pos: value.len(),
            options: Vec::new(),
        }
    }

    pub fn currency(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            field_type: FieldType::Currency,
            value: value.to_string(),
            cursor_pos: value.len(),
            options: Vec::new(),
        }
    }

    pub fn select(label: &str, options: Vec<String>) -> Self {
        let value = options.first().cloned().unwrap_or_default();
        Self {
            label: label.to_string(),
            field_type: FieldType::Select,
            cursor_pos: value.len(),
            value,
            options,
        }
    }

    /// Cycle a Select field's value to the next/previous option.
    pub fn cycle(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let idx = self
            .options
            .iter()
            .position(|o| o == &self.value)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.value = self.options[next].clone();
    }
}

#[derive(Debug)]
pub struct FormModal {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused_field: usize,
    pub editing: bool,
    pub action: ModalAction,
}

impl FormModal {
    /// The new-transaction entry form, date prefilled with today.
    pub fn add_transaction(today: Date) -> Self {
        let categories = Category::ALL.iter().map(|c| c.name().to_string()).collect();
        let kinds = Kind::ALL.iter().map(|k| k.name().to_string()).collect();

        Self {
            title: "Add Transaction".to_string(),
            fields: vec![
                FormField::text("Date (YYYY-MM-DD)", &today.to_string()),
                FormField::select("Category", categories),
                FormField::select("Kind", kinds),
                FormField::currency("Amount", ""),
            ],
            focused_field: 0,
            editing: false,
            action: ModalAction::AddTransaction,
        }
    }

    /// Serialize field values for the app-level handler.
    /// Format: field1_value|field2_value|...
    pub fn serialize(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.value.clone())
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_transaction_form_fields() {
        let form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        assert_eq!(form.fields.len(), 4);
        assert_eq!(form.fields[0].value, "2023-10-20");
        assert_eq!(form.fields[1].value, "Salary");
        assert_eq!(form.fields[2].value, "Income");
        assert_eq!(form.fields[3].value, "");
    }

    #[test]
    fn test_select_cycle_wraps() {
        let mut field = FormField::select("Kind", vec!["Income".into(), "Expense".into()]);
        field.cycle(true);
        assert_eq!(field.value, "Expense");
        field.cycle(true);
        assert_eq!(field.value, "Income");
        field.cycle(false);
        assert_eq!(field.value, "Expense");
    }

    #[test]
    fn test_serialize_joins_with_pipes() {
        let mut form = FormModal::add_transaction(jiff::civil::date(2023, 10, 20));
        form.fields[3].value = "1000".to_string();
        assert_eq!(form.serialize(), "2023-10-20|Salary|Income|1000");
    }
}
