//! Reads instants as calendar components in a fixed IANA zone.
//!
//! Zone rules come from the compiled tz database (`chrono-tz`), so DST
//! transitions past and future follow the database rather than a local table.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::zoned::{WeekdayTable, ZonedComponents};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The identifier is not in the tz database. There is no fallback zone.
    #[error("unknown time zone identifier '{0}'")]
    UnknownZone(String),
}

#[derive(Debug, Clone, Copy)]
pub struct ZonedTimeReader {
    zone: Tz,
    weekdays: WeekdayTable,
}

impl ZonedTimeReader {
    pub fn new(zone_id: &str) -> Result<Self, ZoneError> {
        Self::with_weekday_table(zone_id, WeekdayTable::SUNDAY_FIRST)
    }

    pub fn with_weekday_table(zone_id: &str, weekdays: WeekdayTable) -> Result<Self, ZoneError> {
        let zone =
            Tz::from_str(zone_id).map_err(|_| ZoneError::UnknownZone(zone_id.to_string()))?;
        Ok(Self { zone, weekdays })
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn read(&self, instant: DateTime<Utc>) -> ZonedComponents {
        let local = instant.with_timezone(&self.zone);
        let token = local.format("%a").to_string();
        let day_of_week = self
            .weekdays
            .index_of(&token)
            .unwrap_or_else(|| local.weekday().num_days_from_sunday() as u8);

        ZonedComponents {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            day_of_week,
        }
    }
}
