//! Formatting utilities used for CLI output and the view adapters.

use crate::models::answer::Answer;
use crate::utils::date;

/// Timestamp → `dd/MM/yyyy`; `None` if the value is not a usable timestamp.
pub fn timestamp2date(secs: i64) -> Option<String> {
    date::from_timestamp(secs).map(date::format_display)
}

/// 0 → "No", 1 → "Yes", anything else → `None`.
pub fn int2yes_no(v: i64) -> Option<&'static str> {
    Answer::from_db_int(v).map(|a| a.as_str())
}

/// Fixed-point with a single decimal digit: 36 → "36.0".
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}
