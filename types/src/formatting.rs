//! Centralized number formatting utilities.
//!
//! All numeric display formatting goes through this module so the CLI
//! summary tables and any future chart frontend render values the same way.

/// Format a number with thousands separators.
///
/// # Examples
/// ```
/// use ascent_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(500), "500");
/// assert_eq!(format_thousands(1_500), "1,500");
/// assert_eq!(format_thousands(-1_500_000), "-1,500,000");
/// ```
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 + 1);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// Format a signed delta with an explicit sign prefix.
///
/// # Examples
/// ```
/// use ascent_types::formatting::format_signed;
/// assert_eq!(format_signed(1_234), "+1,234");
/// assert_eq!(format_signed(-50), "-50");
/// assert_eq!(format_signed(0), "0");
/// ```
pub fn format_signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", format_thousands(n))
    } else {
        format_thousands(n)
    }
}

/// Format a large number with K/M suffix for compact display.
///
/// - Values >= 1,000,000 are formatted as `X.XXM`
/// - Values >= 1,000 are formatted as `X.XXK`
/// - Values below 1,000 are formatted as-is
///
/// # Examples
/// ```
/// use ascent_types::formatting::format_compact;
/// assert_eq!(format_compact(500), "500");
/// assert_eq!(format_compact(1_500), "1.50K");
/// assert_eq!(format_compact(1_500_000), "1.50M");
/// ```
pub fn format_compact(n: i64) -> String {
    if n.abs() >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n.abs() >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Format a percentage from count/total with 1 decimal place.
///
/// Returns `"0%"` if total is zero.
///
/// # Examples
/// ```
/// use ascent_types::formatting::format_pct_ratio;
/// assert_eq!(format_pct_ratio(3, 10), "30.0%");
/// assert_eq!(format_pct_ratio(0, 0), "0%");
/// ```
pub fn format_pct_ratio(count: i64, total: i64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}

/// Format a turn range as `[start]` or `[start-end]`.
///
/// # Examples
/// ```
/// use ascent_types::formatting::format_turn_range;
/// assert_eq!(format_turn_range(5, 5), "[5]");
/// assert_eq!(format_turn_range(5, 9), "[5-9]");
/// ```
pub fn format_turn_range(start: u32, end: u32) -> String {
    if start == end {
        format!("[{}]", start)
    } else {
        format!("[{}-{}]", start, end)
    }
}
