//! Schedule (solution) model.
//!
//! A schedule maps each weekday to its covered lab sessions, in ascending
//! session start order. Each covered session carries up to
//! [`MAX_PROCTORS_PER_SESSION`] assignments.
//!
//! # Coverage Rules
//! - A session that could not be staffed has no [`SessionCoverage`] entry.
//! - A day that had sessions but no coverage is kept as an empty list, so
//!   renderers still list the day.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{TimeInterval, Weekday};

/// Maximum number of proctors assigned to one session.
pub const MAX_PROCTORS_PER_SESSION: usize = 2;

/// A proctor assigned to part of a lab session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned proctor name.
    pub proctor_name: String,
    /// Star flag of the proctor at assignment time.
    pub is_star: bool,
    /// Overlap of the session slot with the matched availability window.
    pub assigned_time: TimeInterval,
}

/// The proctors covering one lab session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCoverage {
    /// Session slot.
    pub lab_time: TimeInterval,
    /// Assigned proctors, in selection order.
    pub proctors: Vec<Assignment>,
}

/// A weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Covered sessions per day, ordered by start time.
    pub days: BTreeMap<Weekday, Vec<SessionCoverage>>,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(proctor_name: impl Into<String>, is_star: bool, assigned_time: TimeInterval) -> Self {
        Self {
            proctor_name: proctor_name.into(),
            is_star,
            assigned_time,
        }
    }

    /// Assigned duration in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.assigned_time.duration_hours()
    }
}

impl SessionCoverage {
    /// Creates coverage for a session with no proctors yet.
    pub fn new(lab_time: TimeInterval) -> Self {
        Self {
            lab_time,
            proctors: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.proctors.push(assignment);
        self
    }

    /// Whether the session has the maximum number of proctors.
    pub fn is_fully_staffed(&self) -> bool {
        self.proctors.len() >= MAX_PROCTORS_PER_SESSION
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a day is present (possibly with no sessions).
    pub fn ensure_day(&mut self, day: Weekday) {
        self.days.entry(day).or_default();
    }

    /// Appends a covered session to a day.
    ///
    /// Callers add sessions in ascending start order.
    pub fn add_session(&mut self, day: Weekday, coverage: SessionCoverage) {
        self.days.entry(day).or_default().push(coverage);
    }

    /// Covered sessions on a day (empty if none).
    pub fn sessions_on(&self, day: Weekday) -> &[SessionCoverage] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All covered sessions with their day, Monday first.
    pub fn sessions(&self) -> impl Iterator<Item = (Weekday, &SessionCoverage)> {
        self.days
            .iter()
            .flat_map(|(day, sessions)| sessions.iter().map(move |s| (*day, s)))
    }

    /// Number of covered sessions.
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Number of assignments across all sessions.
    pub fn assignment_count(&self) -> usize {
        self.sessions().map(|(_, s)| s.proctors.len()).sum()
    }

    /// Whether no session is covered.
    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }

    /// Sum of assigned-time durations per proctor (hours).
    pub fn hours_by_proctor(&self) -> HashMap<String, f64> {
        let mut hours: HashMap<String, f64> = HashMap::new();
        for (_, session) in self.sessions() {
            for a in &session.proctors {
                *hours.entry(a.proctor_name.clone()).or_insert(0.0) += a.duration_hours();
            }
        }
        hours
    }

    /// Distinct proctor names, in first-appearance order.
    pub fn proctor_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, session) in self.sessions() {
            for a in &session.proctors {
                if !names.contains(&a.proctor_name.as_str()) {
                    names.push(&a.proctor_name);
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(s: &str) -> TimeInterval {
        s.parse().unwrap()
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_session(
            Weekday::Monday,
            SessionCoverage::new(iv("09:00-11:30"))
                .with_assignment(Assignment::new("Alice", true, iv("09:00-11:30")))
                .with_assignment(Assignment::new("Bob", false, iv("09:00-11:30"))),
        );
        s.add_session(
            Weekday::Monday,
            SessionCoverage::new(iv("13:00-16:00"))
                .with_assignment(Assignment::new("Alice", true, iv("13:00-16:00"))),
        );
        s.ensure_day(Weekday::Wednesday);
        s
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.session_count(), 2);
        assert_eq!(s.assignment_count(), 3);
        assert!(!s.is_empty());
        assert!(Schedule::new().is_empty());
    }

    #[test]
    fn test_empty_day_is_kept() {
        let s = sample_schedule();
        assert_eq!(s.days.len(), 2);
        assert!(s.sessions_on(Weekday::Wednesday).is_empty());
        assert!(s.sessions_on(Weekday::Friday).is_empty());
    }

    #[test]
    fn test_hours_by_proctor() {
        let s = sample_schedule();
        let hours = s.hours_by_proctor();
        assert!((hours["Alice"] - 5.5).abs() < 1e-10);
        assert!((hours["Bob"] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_proctor_names_order() {
        let s = sample_schedule();
        assert_eq!(s.proctor_names(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_coverage_helpers() {
        let s = sample_schedule();
        let first = &s.sessions_on(Weekday::Monday)[0];
        assert!(first.is_fully_staffed());
        assert!(!s.sessions_on(Weekday::Monday)[1].is_fully_staffed());
    }

    #[test]
    fn test_serde_shape() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["days"]["Monday"][0]["lab_time"], "09:00-11:30");
        assert_eq!(json["days"]["Monday"][0]["proctors"][0]["proctor_name"], "Alice");
        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
