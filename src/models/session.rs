//! Lab session model.
//!
//! A lab session is a fixed block of time on a weekday that requires
//! proctor coverage. Sessions are immutable inputs for one scheduling run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{TimeInterval, Weekday};

/// A lab block requiring coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSession {
    /// Day of the session.
    pub day: Weekday,
    /// Session time slot.
    pub slot: TimeInterval,
}

impl LabSession {
    /// Creates a new session.
    pub fn new(day: Weekday, slot: TimeInterval) -> Self {
        Self { day, slot }
    }

    /// Session length in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.slot.duration_hours()
    }

    /// Groups sessions into the per-day slot lists consumed by the generator.
    ///
    /// Input order is preserved within a day.
    pub fn group_by_day(sessions: &[LabSession]) -> BTreeMap<Weekday, Vec<TimeInterval>> {
        let mut by_day: BTreeMap<Weekday, Vec<TimeInterval>> = BTreeMap::new();
        for session in sessions {
            by_day.entry(session.day).or_default().push(session.slot);
        }
        by_day
    }
}
