use std::fmt;

/// Errors raised while constructing or appending a transaction record.
///
/// These should never surface during normal operation: the form layer
/// constrains its widgets to the closed category/kind sets and a
/// non-negative amount. When one does occur it indicates a programming
/// defect in the caller, and the failed submission leaves the ledger
/// untouched.
#[derive(Debug)]
pub enum ValidationError {
    /// Amount below the minimum of zero
    NegativeAmount(i64),
    /// Category string outside the closed enumerated set
    UnknownCategory(String),
    /// Kind string other than Income/Expense
    UnknownKind(String),
    /// Date string that does not parse as a calendar date
    InvalidDate { input: String, source: jiff::Error },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NegativeAmount(amount) => {
                write!(f, "amount must be non-negative, got {amount}")
            }
            ValidationError::UnknownCategory(s) => write!(f, "unknown category {s:?}"),
            ValidationError::UnknownKind(s) => write!(f, "unknown transaction kind {s:?}"),
            ValidationError::InvalidDate { input, source } => {
                write!(f, "invalid date {input:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}
