//! Schedule refinement pass.
//!
//! Re-derives a schedule from a previously generated one, using only what
//! that schedule records. Proctor records are never consulted.
//!
//! # Algorithm
//!
//! 1. Build per-proctor statistics from the input: each assignment adds one
//!    to the proctor's availability score and records its star flag.
//!    Cumulative hours start at zero.
//! 2. Order all sessions of the week by `(day, start)`, with days in
//!    calendar order (Monday first), never alphabetically by day name.
//! 3. Drop sessions whose own length falls outside the shift bounds.
//! 4. Re-rank the session's existing proctors by
//!    `1000·star + (max_weekly − cumulative) + 10·availability_score`,
//!    rejecting any whose cumulative hours plus the session length would
//!    exceed the weekly ceiling.
//! 5. Keep up to two, charge each the session length, and carry their
//!    recorded assignments into the output unchanged.
//!
//! The pass can reorder, exclude, or drop; it cannot add a proctor that was
//! not already assigned to the session. Because cumulative hours reset on
//! every call, feeding the output back in is not guaranteed to be a fixed
//! point.
//!
//! Cumulative hours carry across days, so the day order decides which
//! proctor reaches the weekly ceiling first: an early-week session is always
//! charged before a later one.

use std::collections::HashMap;

use tracing::{debug, info};

use super::candidate::CandidateQueue;
use crate::config::SchedulerConfig;
use crate::models::{Assignment, Schedule, SessionCoverage, Weekday, MAX_PROCTORS_PER_SESSION};

const STAR_WEIGHT: f64 = 1000.0;
const AVAILABILITY_WEIGHT: f64 = 10.0;

/// Per-proctor statistics for one refinement run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProctorStats {
    /// Hours charged so far in this run.
    pub cumulative_hours: f64,
    /// Star flag as first recorded in the input schedule.
    pub is_star: bool,
    /// Number of input sessions the proctor appears in.
    pub availability_score: f64,
}

/// Refines a generated schedule with a second greedy pass.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptimizer {
    config: SchedulerConfig,
}

impl ScheduleOptimizer {
    /// Creates an optimizer with default bounds (15h weekly, 2.5–4h shifts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given bounds.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The bounds this optimizer applies.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Produces a refined schedule. The input is left untouched.
    pub fn optimize(&self, schedule: &Schedule) -> Schedule {
        let mut stats = collect_stats(schedule);
        let mut optimized = Schedule::new();
        for &day in schedule.days.keys() {
            optimized.ensure_day(day);
        }

        let mut sessions: Vec<(Weekday, &SessionCoverage)> = schedule.sessions().collect();
        sessions.sort_by_key(|(day, s)| (*day, s.lab_time.start()));

        for (day, session) in sessions {
            let session_hours = session.lab_time.duration_hours();
            if !self.config.shift_in_bounds(session_hours) {
                debug!(%day, session = %session.lab_time, "Session length out of bounds, dropped");
                continue;
            }

            let mut queue = CandidateQueue::new();
            for assignment in &session.proctors {
                let Some(st) = stats.get(assignment.proctor_name.as_str()) else {
                    continue;
                };
                if st.cumulative_hours + session_hours > self.config.max_weekly_hours {
                    continue;
                }
                queue.push(self.priority_score(st), assignment);
            }

            let selected: Vec<&Assignment> = queue
                .select_distinct(MAX_PROCTORS_PER_SESSION, |a| a.proctor_name.as_str());
            if selected.is_empty() {
                debug!(%day, session = %session.lab_time, "No proctor left under the weekly ceiling");
                continue;
            }

            for a in &selected {
                if let Some(st) = stats.get_mut(a.proctor_name.as_str()) {
                    st.cumulative_hours += session_hours;
                }
            }
            optimized.add_session(
                day,
                SessionCoverage {
                    lab_time: session.lab_time,
                    proctors: selected.into_iter().cloned().collect(),
                },
            );
        }

        info!(
            input_sessions = schedule.session_count(),
            covered = optimized.session_count(),
            assignments = optimized.assignment_count(),
            "Refined schedule"
        );
        optimized
    }

    fn priority_score(&self, stats: &ProctorStats) -> f64 {
        let star = if stats.is_star { STAR_WEIGHT } else { 0.0 };
        let remaining = self.config.max_weekly_hours - stats.cumulative_hours;
        star + remaining + stats.availability_score * AVAILABILITY_WEIGHT
    }
}

/// Scans a schedule and counts appearances per proctor.
pub fn collect_stats(schedule: &Schedule) -> HashMap<&str, ProctorStats> {
    let mut stats: HashMap<&str, ProctorStats> = HashMap::new();
    for (_, session) in schedule.sessions() {
        for a in &session.proctors {
            let entry = stats
                .entry(a.proctor_name.as_str())
                .or_insert_with(|| ProctorStats {
                    is_star: a.is_star,
                    ..ProctorStats::default()
                });
            entry.availability_score += 1.0;
        }
    }
    stats
}
