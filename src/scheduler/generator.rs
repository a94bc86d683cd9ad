//! Draft schedule generator.
//!
//! # Algorithm
//!
//! Days are visited in calendar order (Monday first) regardless of the
//! order sessions were supplied in. Within a day, sessions are processed in
//! ascending start order:
//! 1. Skip sessions shorter than the minimum shift length.
//! 2. For every proctor and every availability window on that day, intersect
//!    the window with the session slot. The overlap is admissible when its
//!    length lies within the shift bounds and the proctor's cumulative hours
//!    plus the overlap stay within the weekly ceiling.
//! 3. Score each admissible overlap:
//!    `1000·star + (max_weekly − cumulative) + 0.1·availability_slots`.
//! 4. Accept up to two distinct proctors in descending score order and add
//!    each accepted overlap to that proctor's cumulative hours, so later
//!    sessions see the updated totals.
//!
//! Sessions with no admissible candidate get no coverage entry.
//!
//! Long sessions are not pre-filtered: the maximum shift bound applies to
//! each overlap, so a session no single window fits within stays uncovered.
//!
//! # Complexity
//! O(s · p · w · log c) where s=sessions, p=proctors, w=windows per proctor
//! per day, c=candidates per session.
//!
//! # Reference
//! Ernst et al. (2004), "Staff scheduling and rostering: A review of
//! applications, methods and models", EJOR 153(1)

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use super::candidate::CandidateQueue;
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{
    Assignment, LabSession, ProctorRecord, Schedule, SessionCoverage, TimeInterval, Weekday,
    MAX_PROCTORS_PER_SESSION,
};
use crate::validation::first_duplicate_name;

const STAR_WEIGHT: f64 = 1000.0;
const AVAILABILITY_WEIGHT: f64 = 0.1;

/// An admissible proctor/overlap pair for one session.
struct Match<'a> {
    proctor: &'a ProctorRecord,
    overlap: TimeInterval,
}

/// Builds a draft schedule directly from proctor availability.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use proctor_schedule::models::{ProctorRecord, Weekday};
/// use proctor_schedule::scheduler::SessionGenerator;
///
/// let proctors = vec![
///     ProctorRecord::star("Alice").with_availability(Weekday::Monday, "09:00-12:00".parse().unwrap()),
/// ];
/// let mut sessions = BTreeMap::new();
/// sessions.insert(Weekday::Monday, vec!["09:00-11:30".parse().unwrap()]);
///
/// let schedule = SessionGenerator::new().generate(&proctors, &sessions).unwrap();
/// assert_eq!(schedule.assignment_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionGenerator {
    config: SchedulerConfig,
}

impl SessionGenerator {
    /// Creates a generator with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given bounds.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The bounds this generator applies.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a draft schedule.
    ///
    /// Cumulative hours are local to this call; concurrent calls never share
    /// state.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidConfig`] if the bounds are unusable.
    /// - [`ScheduleError::DuplicateProctor`] if two proctors share a name.
    pub fn generate(
        &self,
        proctors: &[ProctorRecord],
        sessions_by_day: &BTreeMap<Weekday, Vec<TimeInterval>>,
    ) -> Result<Schedule> {
        self.config.validate()?;
        if let Some(name) = first_duplicate_name(proctors) {
            return Err(ScheduleError::DuplicateProctor(name.to_string()));
        }

        let mut weekly_hours: HashMap<&str, f64> =
            proctors.iter().map(|p| (p.name.as_str(), 0.0)).collect();
        let mut schedule = Schedule::new();
        let mut requested = 0usize;

        for (&day, slots) in sessions_by_day {
            schedule.ensure_day(day);

            let mut ordered: Vec<TimeInterval> = slots.clone();
            ordered.sort_by_key(TimeInterval::start);

            for slot in ordered {
                requested += 1;
                if slot.duration_hours() < self.config.min_shift_hours {
                    debug!(%day, session = %slot, "Session shorter than minimum shift, skipped");
                    continue;
                }

                let selected = self.select_proctors(day, &slot, proctors, &weekly_hours);
                if selected.is_empty() {
                    debug!(%day, session = %slot, "No admissible proctor");
                    continue;
                }

                let mut coverage = SessionCoverage::new(slot);
                for m in selected {
                    *weekly_hours.entry(m.proctor.name.as_str()).or_insert(0.0) +=
                        m.overlap.duration_hours();
                    coverage.proctors.push(Assignment::new(
                        m.proctor.name.clone(),
                        m.proctor.is_star,
                        m.overlap,
                    ));
                }
                debug!(
                    %day,
                    session = %slot,
                    proctors = coverage.proctors.len(),
                    "Session covered"
                );
                schedule.add_session(day, coverage);
            }
        }

        info!(
            requested,
            covered = schedule.session_count(),
            assignments = schedule.assignment_count(),
            "Generated draft schedule"
        );
        Ok(schedule)
    }

    /// Generates a draft schedule from a flat session list.
    pub fn generate_sessions(
        &self,
        proctors: &[ProctorRecord],
        sessions: &[LabSession],
    ) -> Result<Schedule> {
        self.generate(proctors, &LabSession::group_by_day(sessions))
    }

    /// Collects admissible overlaps for one session and picks the best.
    fn select_proctors<'a>(
        &self,
        day: Weekday,
        slot: &TimeInterval,
        proctors: &'a [ProctorRecord],
        weekly_hours: &HashMap<&str, f64>,
    ) -> Vec<Match<'a>> {
        let mut queue = CandidateQueue::new();

        for proctor in proctors {
            let current = weekly_hours
                .get(proctor.name.as_str())
                .copied()
                .unwrap_or(0.0);

            for window in proctor.availability_on(day) {
                let Some(overlap) = slot.intersect(window) else {
                    continue;
                };
                if !self.is_admissible(current, overlap.duration_hours()) {
                    continue;
                }
                queue.push(
                    self.priority_score(proctor, current),
                    Match { proctor, overlap },
                );
            }
        }

        queue.select_distinct(MAX_PROCTORS_PER_SESSION, |m| m.proctor.name.as_str())
    }

    /// Shift length within bounds and weekly ceiling respected.
    fn is_admissible(&self, current_hours: f64, shift_hours: f64) -> bool {
        self.config.shift_in_bounds(shift_hours)
            && current_hours + shift_hours <= self.config.max_weekly_hours
    }

    fn priority_score(&self, proctor: &ProctorRecord, current_hours: f64) -> f64 {
        let star = if proctor.is_star { STAR_WEIGHT } else { 0.0 };
        let remaining = self.config.max_weekly_hours - current_hours;
        let availability = proctor.availability_slot_count() as f64 * AVAILABILITY_WEIGHT;
        star + remaining + availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(s: &str) -> TimeInterval {
        s.parse().unwrap()
    }

    fn sessions(day: Weekday, slots: &[&str]) -> BTreeMap<Weekday, Vec<TimeInterval>> {
        let mut map = BTreeMap::new();
        map.insert(day, slots.iter().map(|s| iv(s)).collect());
        map
    }

    fn names(coverage: &SessionCoverage) -> Vec<&str> {
        coverage
            .proctors
            .iter()
            .map(|a| a.proctor_name.as_str())
            .collect()
    }

    #[test]
    fn test_star_selected_first_and_both_accepted() {
        let proctors = vec![
            ProctorRecord::new("Bob").with_availability(Weekday::Monday, iv("09:00-12:00")),
            ProctorRecord::star("Alice").with_availability(Weekday::Monday, iv("09:00-12:00")),
        ];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Monday, &["09:00-11:30"]))
            .unwrap();

        let monday = schedule.sessions_on(Weekday::Monday);
        assert_eq!(monday.len(), 1);
        assert_eq!(names(&monday[0]), vec!["Alice", "Bob"]);
        assert!(monday[0].proctors[0].is_star);

        let hours = schedule.hours_by_proctor();
        assert!((hours["Alice"] - 2.5).abs() < 1e-10);
        assert!((hours["Bob"] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_short_session_skipped() {
        let proctors =
            vec![ProctorRecord::star("Alice").with_availability(Weekday::Monday, iv("09:00-12:00"))];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Monday, &["09:00-11:00"]))
            .unwrap();

        assert!(schedule.is_empty());
        assert!(schedule.days.contains_key(&Weekday::Monday));
    }

    #[test]
    fn test_overlap_longer_than_max_shift_rejected() {
        let proctors =
            vec![ProctorRecord::new("Dana").with_availability(Weekday::Tuesday, iv("08:00-13:00"))];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Tuesday, &["08:00-13:00"]))
            .unwrap();

        assert!(schedule.sessions_on(Weekday::Tuesday).is_empty());
    }

    #[test]
    fn test_long_session_covered_by_partial_window() {
        // 5h session, window covers 3h of it: overlap is within bounds.
        let proctors =
            vec![ProctorRecord::new("Dana").with_availability(Weekday::Tuesday, iv("10:00-13:00"))];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Tuesday, &["08:00-13:00"]))
            .unwrap();

        let tuesday = schedule.sessions_on(Weekday::Tuesday);
        assert_eq!(tuesday.len(), 1);
        assert_eq!(tuesday[0].lab_time, iv("08:00-13:00"));
        assert_eq!(tuesday[0].proctors[0].assigned_time, iv("10:00-13:00"));
    }

    #[test]
    fn test_weekly_ceiling_rejects_regardless_of_star() {
        let config = SchedulerConfig::new().with_max_weekly_hours(3.0);
        let proctors = vec![ProctorRecord::star("Alice")
            .with_availability(Weekday::Monday, iv("08:00-18:00"))];
        let schedule = SessionGenerator::with_config(config)
            .generate(
                &proctors,
                &sessions(Weekday::Monday, &["13:00-15:30", "09:00-11:30"]),
            )
            .unwrap();

        let monday = schedule.sessions_on(Weekday::Monday);
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].lab_time, iv("09:00-11:30"));
        assert!((schedule.hours_by_proctor()["Alice"] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_at_most_two_distinct_proctors() {
        let proctors = vec![
            ProctorRecord::star("Alice")
                .with_availability(Weekday::Monday, iv("09:00-12:00"))
                .with_availability(Weekday::Monday, iv("08:30-11:45")),
            ProctorRecord::new("Bob").with_availability(Weekday::Monday, iv("09:00-12:00")),
            ProctorRecord::new("Carol").with_availability(Weekday::Monday, iv("09:00-12:00")),
        ];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Monday, &["09:00-12:00"]))
            .unwrap();

        let coverage = &schedule.sessions_on(Weekday::Monday)[0];
        assert_eq!(coverage.proctors.len(), 2);
        assert_eq!(names(coverage), vec!["Alice", "Bob"]);
        // Alice's two windows tie on score; the first window wins.
        assert_eq!(coverage.proctors[0].assigned_time, iv("09:00-12:00"));
    }

    #[test]
    fn test_hour_balancing_prefers_fresher_proctor() {
        let proctors = vec![
            ProctorRecord::new("Bob").with_availability(Weekday::Monday, iv("08:00-18:00")),
            ProctorRecord::new("Carol").with_availability(Weekday::Monday, iv("08:00-18:00")),
            ProctorRecord::new("Dan").with_availability(Weekday::Monday, iv("13:00-16:00")),
        ];
        let schedule = SessionGenerator::new()
            .generate(
                &proctors,
                &sessions(Weekday::Monday, &["09:00-11:30", "13:00-16:00"]),
            )
            .unwrap();

        let monday = schedule.sessions_on(Weekday::Monday);
        assert_eq!(names(&monday[0]), vec!["Bob", "Carol"]);
        // Dan has no hours yet and outranks both.
        assert_eq!(names(&monday[1])[0], "Dan");
    }

    #[test]
    fn test_availability_count_breaks_hour_ties() {
        let proctors = vec![
            ProctorRecord::new("Bob").with_availability(Weekday::Monday, iv("09:00-12:00")),
            ProctorRecord::new("Carol")
                .with_availability(Weekday::Monday, iv("09:00-12:00"))
                .with_availability(Weekday::Friday, iv("09:00-12:00")),
            ProctorRecord::new("Eve")
                .with_availability(Weekday::Monday, iv("09:00-12:00"))
                .with_availability(Weekday::Wednesday, iv("09:00-12:00"))
                .with_availability(Weekday::Friday, iv("13:00-15:00")),
        ];
        let schedule = SessionGenerator::new()
            .generate(&proctors, &sessions(Weekday::Monday, &["09:00-12:00"]))
            .unwrap();

        assert_eq!(
            names(&schedule.sessions_on(Weekday::Monday)[0]),
            vec!["Eve", "Carol"]
        );
    }

    #[test]
    fn test_sessions_processed_in_start_order() {
        let proctors =
            vec![ProctorRecord::new("Bob").with_availability(Weekday::Monday, iv("08:00-20:00"))];
        let schedule = SessionGenerator::new()
            .generate(
                &proctors,
                &sessions(Weekday::Monday, &["15:00-18:00", "08:00-11:00", "11:30-14:30"]),
            )
            .unwrap();

        let starts: Vec<String> = schedule
            .sessions_on(Weekday::Monday)
            .iter()
            .map(|s| s.lab_time.to_string())
            .collect();
        assert_eq!(starts, vec!["08:00-11:00", "11:30-14:30", "15:00-18:00"]);
    }

    #[test]
    fn test_days_visited_in_calendar_order() {
        let config = SchedulerConfig::new().with_max_weekly_hours(3.0);
        let proctors = vec![ProctorRecord::new("Bob")
            .with_availability(Weekday::Monday, iv("09:00-12:00"))
            .with_availability(Weekday::Friday, iv("09:00-12:00"))];
        let list = vec![
            LabSession::new(Weekday::Friday, iv("09:00-11:30")),
            LabSession::new(Weekday::Monday, iv("09:00-11:30")),
        ];
        let schedule = SessionGenerator::with_config(config)
            .generate_sessions(&proctors, &list)
            .unwrap();

        assert_eq!(schedule.sessions_on(Weekday::Monday).len(), 1);
        assert!(schedule.sessions_on(Weekday::Friday).is_empty());
    }

    #[test]
    fn test_duplicate_proctor_is_fatal() {
        let proctors = vec![ProctorRecord::new("Bob"), ProctorRecord::new("Bob")];
        let err = SessionGenerator::new()
            .generate(&proctors, &BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateProctor(name) if name == "Bob"));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = SchedulerConfig::new().with_min_shift_hours(6.0);
        let err = SessionGenerator::with_config(config)
            .generate(&[], &BTreeMap::new())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_generate_sessions_groups_by_day() {
        let proctors = vec![ProctorRecord::new("Bob")
            .with_availability(Weekday::Monday, iv("09:00-12:00"))
            .with_availability(Weekday::Thursday, iv("09:00-12:00"))];
        let list = vec![
            LabSession::new(Weekday::Thursday, iv("09:00-12:00")),
            LabSession::new(Weekday::Monday, iv("09:00-12:00")),
        ];
        let schedule = SessionGenerator::new()
            .generate_sessions(&proctors, &list)
            .unwrap();
        assert_eq!(schedule.session_count(), 2);
    }
}
