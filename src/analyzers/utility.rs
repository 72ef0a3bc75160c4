use chrono::NaiveDate;

/// Rounds to one decimal place on the exact decimal value of `value`,
/// ties to even (4.25 -> 4.2, 4.35 -> 4.3).
pub fn round1(value: f64) -> f64 {
    // Precision formatting is exact and rounds half to even.
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Percentage of `part` in `total`. Returns 0.0 for an empty total.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// True when `date` is a zero-padded `YYYY-MM-DD` calendar date, the only
/// format for which string order matches chronological order.
pub fn is_iso_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
