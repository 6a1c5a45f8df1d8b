//! UTC offset of the target zone, resolved per instant or per wall-clock time.
//!
//! Offsets are never cached: a DST transition between two calls changes them.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy)]
pub struct UtcOffsetResolver {
    zone: Tz,
}

impl UtcOffsetResolver {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Minutes the zone is ahead of UTC at `instant` (-240 for EDT, -300 for EST).
    pub fn offset_minutes(&self, instant: DateTime<Utc>) -> i32 {
        self.zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
            / 60
    }

    /// Offset in effect at a wall-clock time read in the zone.
    ///
    /// A repeated time (fall back) resolves to the earlier of its two offsets.
    /// A skipped time (spring forward) takes the offset at the wall-clock time
    /// read as if it were UTC.
    pub fn offset_for_local(&self, local: NaiveDateTime) -> i32 {
        match self.zone.offset_from_local_datetime(&local) {
            LocalResult::Single(offset) => offset.fix().local_minus_utc() / 60,
            LocalResult::Ambiguous(earliest, _) => earliest.fix().local_minus_utc() / 60,
            LocalResult::None => {
                log::debug!("{} does not exist in {}, probing as UTC", local, self.zone);
                self.offset_minutes(Utc.from_utc_datetime(&local))
            }
        }
    }

    /// Absolute instant of a wall-clock time in the zone.
    pub fn to_instant(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let offset = self.offset_for_local(local);
        Utc.from_utc_datetime(&(local - Duration::minutes(offset as i64)))
    }
}
