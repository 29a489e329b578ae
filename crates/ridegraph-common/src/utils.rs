//! Small formatting helpers shared by the CLI and chart modules

use chrono::NaiveDate;

/// Format an optional mean for display, using "no data" when absent
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.1}"),
        None => "no data".to_string(),
    }
}

/// Format a date in the dataset's YYYY-MM-DD notation
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a count with thousands separators for log output
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}
