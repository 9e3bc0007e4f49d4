//! Indian-locale number and currency formatting
//!
//! Display-side only; nothing here feeds back into the calculations.
//! Currency values are rounded to whole rupees and grouped en-IN style:
//! the last three digits together, then groups of two (12,34,56,789).

/// Format an amount as whole rupees, e.g. `₹12,62,477`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round();
    let grouped = group_indian(&format!("{:.0}", rounded));
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Format a plain number with en-IN digit grouping.
pub fn format_indian_number(num: f64) -> String {
    let negative = num < 0.0;
    let rounded = num.abs().round();
    let grouped = group_indian(&format!("{:.0}", rounded));
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Insert en-IN separators into a plain digit string.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut parts = Vec::new();
    let head_bytes = head.as_bytes();

    // Walk the head right-to-left in chunks of two
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        parts.push(&head[start..end]);
        end = start;
    }
    parts.reverse();
    parts.push(tail);
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(2_027.64), "₹2,028");
        assert_eq!(format_inr(2_027.49), "₹2,027");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-1_50_000.0), "-₹1,50,000");
        assert_eq!(format_indian_number(-12_345.0), "-12,345");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(format_indian_number(600_000.0), "6,00,000");
    }
}
