//! Plain-text schedule rendering.
//!
//! ```text
//!
//! Monday:
//!   09:00 - 11:30:
//!     - Alice (Star)
//!     - Bob (Regular)
//! ```
//!
//! Days appear Monday first, each preceded by a blank line. A day without
//! coverage prints only its header.

use crate::models::{Schedule, SessionCoverage, Weekday};
use crate::scheduler::ScheduleKpi;

/// Renders schedules and KPI summaries as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulePresenter;

impl SchedulePresenter {
    /// Creates a presenter.
    pub fn new() -> Self {
        Self
    }

    /// Formats a schedule as readable text.
    pub fn format_schedule(&self, schedule: &Schedule) -> String {
        let mut lines: Vec<String> = Vec::new();
        for (day, sessions) in &schedule.days {
            self.push_day(&mut lines, *day, sessions);
        }
        lines.join("\n")
    }

    fn push_day(&self, lines: &mut Vec<String>, day: Weekday, sessions: &[SessionCoverage]) {
        lines.push(format!("\n{day}:"));
        for session in sessions {
            lines.push(format!(
                "  {} - {}:",
                session.lab_time.start().format("%H:%M"),
                session.lab_time.end().format("%H:%M")
            ));
            for a in &session.proctors {
                let tier = if a.is_star { "Star" } else { "Regular" };
                lines.push(format!("    - {} ({tier})", a.proctor_name));
            }
        }
    }

    /// Formats a KPI summary, one line per metric.
    pub fn format_summary(&self, kpi: &ScheduleKpi, requested_sessions: usize) -> String {
        let mut lines = vec![
            "Summary:".to_string(),
            format!(
                "  Sessions covered: {}/{} ({:.0}%)",
                kpi.covered_sessions,
                requested_sessions,
                kpi.coverage_rate(requested_sessions) * 100.0
            ),
            format!(
                "  Fully staffed: {}, understaffed: {}",
                kpi.fully_staffed_sessions, kpi.understaffed_sessions
            ),
            format!(
                "  Star assignments: {}/{}",
                kpi.star_assignments, kpi.assignment_count
            ),
        ];

        let mut hours: Vec<(&String, &f64)> = kpi.hours_by_proctor.iter().collect();
        hours.sort_by(|a, b| a.0.cmp(b.0));
        if !hours.is_empty() {
            lines.push("  Hours by proctor:".to_string());
            for (name, h) in hours {
                lines.push(format!("    {name}: {h:.2}"));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
