//! Display formatting helpers for dashboard figures

use chrono::{DateTime, Utc};

/// Insert thousands separators into a string of digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an integer count with thousands separators, e.g. `125,000`
#[must_use]
pub fn format_number(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a dollar amount with two decimals, e.g. `$34,200.00`
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Format a signed percentage change, e.g. `+15.7%` or `-6.3%`
#[must_use]
pub fn format_percentage(change: f64) -> String {
    if change > 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}

/// Format a rate that is already in percent, e.g. `2.8%`
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Wall-clock time of day for "last updated" readouts
#[must_use]
pub fn format_clock_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}
