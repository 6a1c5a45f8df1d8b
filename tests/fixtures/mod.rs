// Test fixtures - reusable test instants
// New York transition Sundays in 2025: spring forward 2025-03-09, fall back 2025-11-02.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;

/// UTC instant of a New York wall-clock time. Panics on gap times.
pub fn new_york(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    New_York
        .with_ymd_and_hms(y, m, d, h, min, s)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Sample instants used across test files
pub mod instants {
    use super::*;

    /// Monday 2025-01-13 10:00 EST
    pub fn standard_time_monday() -> DateTime<Utc> {
        new_york(2025, 1, 13, 10, 0, 0)
    }

    /// Sunday 2025-01-19 17:59:00 EST
    pub fn minute_before_close() -> DateTime<Utc> {
        new_york(2025, 1, 19, 17, 59, 0)
    }

    /// Sunday 2025-01-19 18:00:00 EST
    pub fn at_close() -> DateTime<Utc> {
        new_york(2025, 1, 19, 18, 0, 0)
    }

    /// Friday 2025-10-31 12:00 EDT, two days before fall back
    pub fn before_fall_back() -> DateTime<Utc> {
        new_york(2025, 10, 31, 12, 0, 0)
    }

    /// Friday 2025-03-07 12:00 EST, two days before spring forward
    pub fn before_spring_forward() -> DateTime<Utc> {
        new_york(2025, 3, 7, 12, 0, 0)
    }
}
