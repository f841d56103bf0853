//! Number formatting for display
//!
//! Currency values get two decimals and locale digit grouping, gram
//! values get four decimals and no grouping.

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 12,34,567 (lakh/crore)
    Indian,
    /// 1,234,567
    Western,
}

/// Insert group separators into a string of ASCII digits
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

/// Fixed-point number with grouping, e.g. `5,150.00`
pub fn format_grouped(value: f64, decimals: usize, grouping: Grouping) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // Never print "-0.00"
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Currency amount with symbol, e.g. `₹5,150.00`
pub fn format_currency(value: f64, symbol: &str, grouping: Grouping) -> String {
    format!("{symbol}{}", format_grouped(value, 2, grouping))
}

/// Grams with four decimals, e.g. `0.9142`
pub fn format_grams(grams: f64) -> String {
    format!("{grams:.4}")
}

/// Whole-number counter with grouping
pub fn format_count(count: u64, grouping: Grouping) -> String {
    group_digits(&count.to_string(), grouping)
}
