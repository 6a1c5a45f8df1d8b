//! Calendar reading of an instant in a named time zone.
//!
//! `ZonedComponents` is what the zoned-time reader hands to the deadline
//! calculator: the civil fields of one instant as observed in one zone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Weekday tokens in the order of their index (0 = Sunday).
pub const WEEKDAY_TOKENS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Immutable mapping from abbreviated weekday names to 0-6 indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayTable {
    tokens: [&'static str; 7],
}

impl WeekdayTable {
    /// The canonical Sunday-first table.
    pub const SUNDAY_FIRST: WeekdayTable = WeekdayTable {
        tokens: WEEKDAY_TOKENS,
    };

    /// Index of an abbreviated weekday name, matched case-insensitively.
    pub fn index_of(&self, token: &str) -> Option<u8> {
        self.tokens
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(token.trim()))
            .map(|idx| idx as u8)
    }

    /// Abbreviated name for a 0-6 index.
    pub fn token(&self, index: u8) -> Option<&'static str> {
        self.tokens.get(index as usize).copied()
    }
}

impl Default for WeekdayTable {
    fn default() -> Self {
        Self::SUNDAY_FIRST
    }
}

/// How an instant reads in the target zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonedComponents {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// 0-6, 0 = Sunday
    pub day_of_week: u8,
}

impl ZonedComponents {
    /// Civil date part. Returns `None` only for fields no reader produces.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }

    pub fn naive(&self) -> Option<NaiveDateTime> {
        Some(self.date()?.and_time(self.time()?))
    }

    /// True when the wall clock reads exactly `hour:00:00`.
    pub fn is_top_of_hour(&self, hour: u32) -> bool {
        self.hour == hour && self.minute == 0 && self.second == 0
    }
}
