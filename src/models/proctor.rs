//! Proctor model.
//!
//! A proctor is the human resource assigned to lab sessions. Each proctor
//! has a unique name (the identity key throughout the engine), a star flag
//! marking higher-priority staff, a self-declared weekly hour ceiling, and a
//! per-weekday list of availability windows.
//!
//! # Availability
//! Windows for a day are neither required to be sorted nor disjoint. The
//! generator checks each window independently against each session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{TimeInterval, Weekday};

/// A proctor and their weekly availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProctorRecord {
    /// Unique proctor name.
    pub name: String,
    /// Star proctors are preferred during selection.
    pub is_star: bool,
    /// Declared weekly hour ceiling.
    ///
    /// Carried for reporting; the scheduling passes apply the engine-wide
    /// ceiling from [`SchedulerConfig`](crate::config::SchedulerConfig).
    pub max_weekly_hours: f64,
    /// Availability windows per weekday.
    pub availability: BTreeMap<Weekday, Vec<TimeInterval>>,
}

impl ProctorRecord {
    /// Creates a regular (non-star) proctor with no availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_star: false,
            max_weekly_hours: crate::config::DEFAULT_MAX_WEEKLY_HOURS,
            availability: BTreeMap::new(),
        }
    }

    /// Creates a star proctor.
    pub fn star(name: impl Into<String>) -> Self {
        Self::new(name).with_star(true)
    }

    /// Sets the star flag.
    pub fn with_star(mut self, is_star: bool) -> Self {
        self.is_star = is_star;
        self
    }

    /// Sets the declared weekly hour ceiling.
    pub fn with_max_hours(mut self, hours: f64) -> Self {
        self.max_weekly_hours = hours;
        self
    }

    /// Adds an availability window on a day.
    pub fn with_availability(mut self, day: Weekday, window: TimeInterval) -> Self {
        self.availability.entry(day).or_default().push(window);
        self
    }

    /// Availability windows on a day (empty if none).
    pub fn availability_on(&self, day: Weekday) -> &[TimeInterval] {
        self.availability
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of availability windows across all days.
    pub fn availability_slot_count(&self) -> usize {
        self.availability.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(s: &str) -> TimeInterval {
        s.parse().unwrap()
    }

    #[test]
    fn test_proctor_builder() {
        let p = ProctorRecord::star("Alice")
            .with_max_hours(12.0)
            .with_availability(Weekday::Monday, iv("09:00-12:00"))
            .with_availability(Weekday::Monday, iv("13:00-17:00"))
            .with_availability(Weekday::Thursday, iv("10:00-14:00"));

        assert_eq!(p.name, "Alice");
        assert!(p.is_star);
        assert!((p.max_weekly_hours - 12.0).abs() < 1e-10);
        assert_eq!(p.availability_on(Weekday::Monday).len(), 2);
        assert!(p.availability_on(Weekday::Friday).is_empty());
        assert_eq!(p.availability_slot_count(), 3);
    }

    #[test]
    fn test_regular_default() {
        let p = ProctorRecord::new("Bob");
        assert!(!p.is_star);
        assert_eq!(p.availability_slot_count(), 0);
    }
}
