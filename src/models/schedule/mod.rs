//! The weekly deadline the countdown targets.
//!
//! These values are fixed for the site: Sunday 18:00 in New York, refreshed
//! once per second. They are not read from settings.

use std::time::Duration;

/// IANA identifier of the zone the deadline is defined in.
pub const TARGET_ZONE: &str = "America/New_York";

/// 0 = Sunday.
pub const TARGET_WEEKDAY: u8 = 0;

pub const TARGET_HOUR: u32 = 18;

pub const REFRESH_PERIOD: Duration = Duration::from_millis(1000);

/// A weekday + hour recurring in a named zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub zone_id: &'static str,
    /// 0-6, 0 = Sunday
    pub weekday: u8,
    /// 0-23, minutes and seconds are always zero
    pub hour: u32,
}

impl WeeklySchedule {
    /// Weekly auction close: Sunday 18:00 America/New_York.
    pub const AUCTION_CLOSE: WeeklySchedule = WeeklySchedule {
        zone_id: TARGET_ZONE,
        weekday: TARGET_WEEKDAY,
        hour: TARGET_HOUR,
    };

    /// Days from `day_of_week` forward to the target weekday, in 0..7.
    pub fn days_until(&self, day_of_week: u8) -> i64 {
        (7 + self.weekday as i64 - day_of_week as i64).rem_euclid(7)
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::AUCTION_CLOSE
    }
}
