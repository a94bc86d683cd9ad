//! Time-of-day interval model.
//!
//! Availability windows, lab session slots, and assigned shifts are all
//! expressed as a [`TimeInterval`] within a single day.
//!
//! # Overlap Convention
//! Overlap is inclusive at both ends: `[09:00, 11:00]` and `[11:00, 13:00]`
//! overlap, with a zero-length intersection at 11:00. Such an intersection
//! never passes a positive minimum shift duration, so it is harmless to the
//! scheduler.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

const TIME_FORMAT: &str = "%H:%M";
const SECONDS_PER_HOUR: f64 = 3600.0;

/// A time-of-day range `[start, end]` with `start <= end`.
///
/// The invariant is enforced at construction; the fields are private so it
/// cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeInterval {
    /// Creates a new interval.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInterval`] if `start > end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start > end {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from hour/minute pairs.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidTimeFormat`] for out-of-range clock values,
    /// [`ScheduleError::InvalidInterval`] if the start is after the end.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Result<Self> {
        let start_time = NaiveTime::from_hms_opt(start.0, start.1, 0).ok_or_else(|| {
            ScheduleError::time_format(format!("{}:{:02}", start.0, start.1), "a valid HH:MM")
        })?;
        let end_time = NaiveTime::from_hms_opt(end.0, end.1, 0).ok_or_else(|| {
            ScheduleError::time_format(format!("{}:{:02}", end.0, end.1), "a valid HH:MM")
        })?;
        Self::new(start_time, end_time)
    }

    /// Interval start.
    #[inline]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Interval end.
    #[inline]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Duration in fractional hours. Never negative.
    pub fn duration_hours(&self) -> f64 {
        self.end.signed_duration_since(self.start).num_seconds() as f64 / SECONDS_PER_HOUR
    }

    /// Whether two intervals overlap (inclusive at both ends, symmetric).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The common part of two intervals, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Parses a single `HH:MM` clock value.
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| ScheduleError::time_format(value.trim(), "HH:MM"))
}

impl FromStr for TimeInterval {
    type Err = ScheduleError;

    /// Parses `"HH:MM-HH:MM"`.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ScheduleError::time_format(s.trim(), "HH:MM-HH:MM"))?;
        let start = parse_clock(start).map_err(|_| ScheduleError::time_format(s.trim(), "HH:MM-HH:MM"))?;
        let end = parse_clock(end).map_err(|_| ScheduleError::time_format(s.trim(), "HH:MM-HH:MM"))?;
        Self::new(start, end)
    }
}

impl TryFrom<String> for TimeInterval {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeInterval> for String {
    fn from(interval: TimeInterval) -> Self {
        interval.to_string()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}
