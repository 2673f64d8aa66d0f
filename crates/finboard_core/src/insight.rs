//! Rule-based advisory message over the current aggregates
//!
//! A three-way decision evaluated in strict order on every render:
//! overspending warning first, then the savings-rate success message,
//! otherwise silence. The rule is a pure function of the summary, so the
//! same totals always produce the same branch.

use crate::aggregate::Summary;

/// The single advisory message the dashboard may display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Insight {
    /// Expenses exceed 80% of income
    Overspending,
    /// Positive balance; `rate_pct` is the savings rate in percent
    Saving { rate_pct: f64 },
}

impl Insight {
    pub fn message(&self) -> String {
        match self {
            Insight::Overspending => {
                "Warning: expenses exceed 80% of your income. \
                 Consider cutting non-essential spending."
                    .to_string()
            }
            Insight::Saving { rate_pct } => {
                format!("Well done! You saved {rate_pct:.1}% of your income.")
            }
        }
    }
}

/// Evaluate the insight rule for the given aggregates.
///
/// Rule 1 compares `expense > income * 0.8` integer-exactly as
/// `5 * expense > 4 * income`, so it also fires when income is zero and
/// any expense exists. The products are taken in `i128` so totals near
/// `i64::MAX` cannot overflow. Rule 2 additionally requires positive
/// income, which keeps the savings-rate division away from zero;
/// everything else falls through to silence (`None`).
pub fn evaluate(summary: &Summary) -> Option<Insight> {
    if 5 * summary.total_expense as i128 > 4 * summary.total_income as i128 {
        Some(Insight::Overspending)
    } else if summary.balance > 0 && summary.total_income > 0 {
        let rate_pct = summary.balance as f64 / summary.total_income as f64 * 100.0;
        Some(Insight::Saving { rate_pct })
    } else {
        None
    }
}
