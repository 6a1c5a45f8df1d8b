//! Next occurrence of the weekly deadline as an absolute instant.
//!
//! The candidate date is chosen from the zone-local calendar of `now`, then
//! the deadline hour on that date is converted to UTC with the offset that is
//! in effect on that date. Offsets at `now` are never reused for the target.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::models::schedule::WeeklySchedule;
use crate::models::zoned::ZonedComponents;
use crate::services::offset::UtcOffsetResolver;
use crate::services::zoned::{ZoneError, ZonedTimeReader};
use crate::utils::date::add_civil_days;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadlineError {
    #[error(transparent)]
    Zone(#[from] ZoneError),
    #[error("invalid weekly schedule: weekday {weekday}, hour {hour}")]
    InvalidSchedule { weekday: u8, hour: u32 },
    #[error("no deadline representable after {0}")]
    OutOfRange(DateTime<Utc>),
}

/// Anything that can answer "when is the next deadline after `now`".
#[cfg_attr(test, mockall::automock)]
pub trait DeadlineSource {
    fn next_deadline(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DeadlineError>;
}

#[derive(Debug, Clone, Copy)]
pub struct DeadlineCalculator {
    schedule: WeeklySchedule,
    reader: ZonedTimeReader,
    offsets: UtcOffsetResolver,
}

impl DeadlineCalculator {
    /// Resolves the schedule's zone. An unknown zone is fatal for the caller.
    pub fn new(schedule: WeeklySchedule) -> Result<Self, DeadlineError> {
        if schedule.weekday > 6 || schedule.hour > 23 {
            return Err(DeadlineError::InvalidSchedule {
                weekday: schedule.weekday,
                hour: schedule.hour,
            });
        }
        let reader = ZonedTimeReader::new(schedule.zone_id)?;
        Ok(Self {
            schedule,
            offsets: UtcOffsetResolver::new(reader.zone()),
            reader,
        })
    }

    pub fn auction_close() -> Result<Self, DeadlineError> {
        Self::new(WeeklySchedule::AUCTION_CLOSE)
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn reader(&self) -> &ZonedTimeReader {
        &self.reader
    }

    pub fn offsets(&self) -> &UtcOffsetResolver {
        &self.offsets
    }

    /// Whole calendar days from `et`'s date to the target date.
    ///
    /// On the target weekday only the hour gates the rollover: from
    /// `hour:00:00` onward the target is a week out.
    pub fn days_until_target(&self, et: &ZonedComponents) -> i64 {
        if et.day_of_week == self.schedule.weekday {
            if et.hour >= self.schedule.hour {
                7
            } else {
                0
            }
        } else {
            self.schedule.days_until(et.day_of_week)
        }
    }

    /// Zone-local civil date the next deadline falls on.
    pub fn candidate_date(&self, now: DateTime<Utc>) -> Result<NaiveDate, DeadlineError> {
        let et = self.reader.read(now);
        let today = et.date().ok_or(DeadlineError::OutOfRange(now))?;
        add_civil_days(today, self.days_until_target(&et)).ok_or(DeadlineError::OutOfRange(now))
    }

    /// The next deadline strictly after a previous one.
    pub fn deadline_after(&self, deadline: DateTime<Utc>) -> Result<DateTime<Utc>, DeadlineError> {
        self.next_deadline(deadline + Duration::milliseconds(1))
    }
}

impl DeadlineSource for DeadlineCalculator {
    fn next_deadline(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DeadlineError> {
        let date = self.candidate_date(now)?;
        let wall_clock = date
            .and_hms_opt(self.schedule.hour, 0, 0)
            .ok_or(DeadlineError::OutOfRange(now))?;
        let deadline = self.offsets.to_instant(wall_clock);
        log::trace!(
            "now={} candidate={} offset={} deadline={}",
            now,
            wall_clock,
            self.offsets.offset_for_local(wall_clock),
            deadline
        );
        Ok(deadline)
    }
}
