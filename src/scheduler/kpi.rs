//! Schedule quality metrics (KPIs).
//!
//! Summarizes a finished schedule for review: how many sessions are
//! staffed, how the hours spread across proctors, and how often star
//! proctors were used.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Covered sessions | Sessions with at least one proctor |
//! | Fully staffed | Sessions with the maximum number of proctors |
//! | Understaffed | Covered sessions below the maximum |
//! | Star assignments | Assignments held by star proctors |
//! | Hours by proctor | Sum of assigned-time lengths |
//! | Hour spread | Max minus min hours among assigned proctors |

use std::collections::HashMap;

use serde::Serialize;

use crate::config::SchedulerConfig;
use crate::models::{ProctorRecord, Schedule};

/// Schedule performance indicators.
///
/// All hour values are fractional hours.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Sessions with coverage.
    pub covered_sessions: usize,
    /// Total assignments.
    pub assignment_count: usize,
    /// Sessions at the per-session proctor cap.
    pub fully_staffed_sessions: usize,
    /// Covered sessions below the cap.
    pub understaffed_sessions: usize,
    /// Assignments held by star proctors.
    pub star_assignments: usize,
    /// Proctors with any assignment, in first-appearance order.
    pub assigned_proctors: Vec<String>,
    /// Assigned hours per proctor.
    pub hours_by_proctor: HashMap<String, f64>,
    /// Mean assigned hours over proctors with any assignment.
    pub avg_hours: f64,
    /// Max minus min assigned hours over proctors with any assignment.
    pub hour_spread: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut fully_staffed = 0;
        let mut understaffed = 0;
        let mut star_assignments = 0;

        for (_, session) in schedule.sessions() {
            if session.is_fully_staffed() {
                fully_staffed += 1;
            } else if !session.proctors.is_empty() {
                understaffed += 1;
            }
            star_assignments += session.proctors.iter().filter(|a| a.is_star).count();
        }

        let hours_by_proctor = schedule.hours_by_proctor();
        let (avg_hours, hour_spread) = if hours_by_proctor.is_empty() {
            (0.0, 0.0)
        } else {
            let sum: f64 = hours_by_proctor.values().sum();
            let max = hours_by_proctor.values().copied().fold(f64::MIN, f64::max);
            let min = hours_by_proctor.values().copied().fold(f64::MAX, f64::min);
            (sum / hours_by_proctor.len() as f64, max - min)
        };

        Self {
            covered_sessions: schedule.session_count(),
            assignment_count: schedule.assignment_count(),
            fully_staffed_sessions: fully_staffed,
            understaffed_sessions: understaffed,
            star_assignments,
            assigned_proctors: schedule
                .proctor_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            hours_by_proctor,
            avg_hours,
            hour_spread,
        }
    }

    /// Fraction of requested sessions that received coverage (0.0..1.0).
    ///
    /// Returns 1.0 when nothing was requested.
    pub fn coverage_rate(&self, requested_sessions: usize) -> f64 {
        if requested_sessions == 0 {
            return 1.0;
        }
        self.covered_sessions as f64 / requested_sessions as f64
    }

    /// Hours assigned to a proctor (0.0 if none).
    pub fn hours_for(&self, name: &str) -> f64 {
        self.hours_by_proctor.get(name).copied().unwrap_or(0.0)
    }

    /// Proctors that received no assignment, in input order.
    pub fn unassigned<'a>(&self, proctors: &'a [ProctorRecord]) -> Vec<&'a str> {
        proctors
            .iter()
            .filter(|p| !self.assigned_proctors.contains(&p.name))
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// Proctors whose declared weekly hours fit within a single shift.
pub fn single_shift_proctors<'a>(
    proctors: &'a [ProctorRecord],
    config: &SchedulerConfig,
) -> Vec<&'a ProctorRecord> {
    proctors
        .iter()
        .filter(|p| p.max_weekly_hours <= config.max_shift_hours)
        .collect()
}
