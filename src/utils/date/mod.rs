// Date utility functions

use chrono::{Duration, NaiveDate};

/// Zero-pads to width 2 without truncating wider values ("05", "12", "123").
pub fn zero_pad(value: i64) -> String {
    format!("{:02}", value)
}

/// Civil-calendar addition; `None` only when leaving chrono's date range.
pub fn add_civil_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}
