use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::zero_pad;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownParts {
    pub days: i64,
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl CountdownParts {
    /// Splits a positive duration into whole days/hours/minutes/seconds.
    /// Returns `None` for zero or negative durations; those are never rendered.
    pub fn from_duration(diff: Duration) -> Option<Self> {
        Self::from_millis(diff.num_milliseconds())
    }

    pub fn from_millis(ms: i64) -> Option<Self> {
        if ms <= 0 {
            return None;
        }
        Some(Self {
            days: ms / MS_PER_DAY,
            hours: ((ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        })
    }

    /// `[days, hours, minutes, seconds]`, each zero-padded to width 2.
    /// Days keep every digit past two.
    pub fn padded(&self) -> [String; 4] {
        [
            zero_pad(self.days),
            zero_pad(self.hours as i64),
            zero_pad(self.minutes as i64),
            zero_pad(self.seconds as i64),
        ]
    }

    pub fn text_for(&self, slot: SlotId) -> String {
        let value = match slot {
            SlotId::Days => self.days,
            SlotId::Hours => self.hours as i64,
            SlotId::Minutes => self.minutes as i64,
            SlotId::Seconds => self.seconds as i64,
        };
        zero_pad(value)
    }
}

impl std::fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [d, h, m, s] = self.padded();
        write!(f, "{} {} {} {}", d, h, m, s)
    }
}

/// Text slots of the countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl SlotId {
    pub const ALL: [SlotId; 4] = [SlotId::Days, SlotId::Hours, SlotId::Minutes, SlotId::Seconds];

    /// Stable element identifier.
    pub fn element_id(&self) -> &'static str {
        match self {
            SlotId::Days => "days",
            SlotId::Hours => "hours",
            SlotId::Minutes => "minutes",
            SlotId::Seconds => "seconds",
        }
    }
}

/// Display regions toggled after a successful tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionId {
    Primary,
    Fallback,
}

/// One rendered tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownFrame {
    pub now: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub parts: CountdownParts,
}

impl CountdownFrame {
    pub fn remaining(&self) -> Duration {
        self.deadline - self.now
    }
}
