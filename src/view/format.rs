//! Number and time formatting for dashboard labels

use chrono::{DateTime, Local, Utc};

/// Format with thousands separators and up to three fraction digits,
/// dropping trailing zeros ("98,750.32", "89,432", "0.5").
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// "$98,750.32"
pub fn usd(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// "$1950.00B"
pub fn usd_billions(value: f64, decimals: usize) -> String {
    format!("${:.*}B", decimals, value / 1_000_000_000.0)
}

/// "$2.85T"
pub fn usd_trillions(value: f64, decimals: usize) -> String {
    format!("${:.*}T", decimals, value / 1_000_000_000_000.0)
}

/// Explicit sign for non-negative values: "+0.67", "-0.45"
pub fn signed(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Ratio as a percentage with two decimals: 0.0234 -> "2.34%"
pub fn ratio_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Timestamp in the viewer's local time, e.g. "10/19/2026, 2:05:09 PM"
pub fn local_timestamp(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Tooltip body for a price chart point
pub fn price_tooltip(time: DateTime<Utc>, price: f64) -> String {
    format!("{}<br/>Price: {}", local_timestamp(time), usd(price))
}
