use crate::time::Zone;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use std::time::SystemTime;

/// Calendar fields of an absolute time in a particular zone.
///
/// Derived on demand and never stored as the source of truth: the same `SystemTime` can
/// break down differently once the zone rules change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarBreakdown {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Sub-second part, truncated to microseconds.
    pub micros: u32,
    pub weekday: Weekday,
}

/// Calendar fields ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalendarField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Micros,
}

impl CalendarField {
    pub const ALL: [CalendarField; 7] = [
        CalendarField::Year,
        CalendarField::Month,
        CalendarField::Day,
        CalendarField::Hour,
        CalendarField::Minute,
        CalendarField::Second,
        CalendarField::Micros,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl CalendarBreakdown {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            // Leap seconds report nanoseconds past 1e9.
            micros: (dt.nanosecond() / 1_000).min(999_999),
            weekday: dt.weekday(),
        }
    }

    pub fn millis(&self) -> u32 {
        self.micros / 1_000
    }

    /// Numeric value of a single field.
    pub fn get(&self, field: CalendarField) -> i64 {
        match field {
            CalendarField::Year => i64::from(self.year),
            CalendarField::Month => i64::from(self.month),
            CalendarField::Day => i64::from(self.day),
            CalendarField::Hour => i64::from(self.hour),
            CalendarField::Minute => i64::from(self.minute),
            CalendarField::Second => i64::from(self.second),
            CalendarField::Micros => i64::from(self.micros),
        }
    }

    /// The coarsest field whose value differs from `other`, or `None` when all match.
    pub fn first_difference(&self, other: &CalendarBreakdown) -> Option<CalendarField> {
        CalendarField::ALL
            .into_iter()
            .find(|field| self.get(*field) != other.get(*field))
    }
}

/// Break `t` down into calendar fields using the current rules of `zone`.
pub fn breakdown(t: SystemTime, zone: &Zone) -> CalendarBreakdown {
    CalendarBreakdown::from_datetime(&zone.localize(t))
}
