/// Currency label shown next to every displayed amount.
/// Amounts are whole units; there is no fractional subdivision on screen.
pub const CURRENCY: &str = "toman";

/// Group an integer amount with thousands separators ("50,000,000").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Full display form: separators plus the currency label.
pub fn format_amount(value: i64) -> String {
    format!("{} {}", group_thousands(value), CURRENCY)
}

/// Compact form for tight chart columns (e.g. 50M, 950K, 12).
pub fn format_compact_amount(value: i64) -> String {
    let abs = value.abs();
    let sign = if value < 0 { "-" } else { "" };

    if abs >= 1_000_000 {
        format!("{}{:.1}M", sign, abs as f64 / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{}{:.0}K", sign, abs as f64 / 1_000.0)
    } else {
        format!("{}{}", sign, abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(50_000_000), "50,000,000");
        assert_eq!(group_thousands(-5_000_000), "-5,000,000");
    }

    #[test]
    fn test_format_amount_has_label() {
        assert_eq!(format_amount(41_000_000), "41,000,000 toman");
    }

    #[test]
    fn test_format_compact_amount() {
        assert_eq!(format_compact_amount(50_000_000), "50.0M");
        assert_eq!(format_compact_amount(4_000_000), "4.0M");
        assert_eq!(format_compact_amount(950), "950");
        assert_eq!(format_compact_amount(1_500), "2K");
        assert_eq!(format_compact_amount(-2_000_000), "-2.0M");
    }
}
