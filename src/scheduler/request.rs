//! End-to-end scheduling run: validate, generate, refine.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ScheduleOptimizer, SessionGenerator};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::models::{LabSession, ProctorRecord, Schedule};
use crate::validation::validate_input;

/// Input container for one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Proctors available this week.
    pub proctors: Vec<ProctorRecord>,
    /// Lab sessions requiring coverage.
    pub sessions: Vec<LabSession>,
    /// Bounds applied by both passes.
    pub config: SchedulerConfig,
}

/// The two schedules produced by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Generator output.
    pub draft: Schedule,
    /// Optimizer output; the final schedule.
    pub refined: Schedule,
}

impl ScheduleRequest {
    /// Creates a request with default bounds.
    pub fn new(proctors: Vec<ProctorRecord>, sessions: Vec<LabSession>) -> Self {
        Self {
            proctors,
            sessions,
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the bounds.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs validation, the generator, and the optimizer.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidConfig`](crate::ScheduleError::InvalidConfig)
    /// - [`ScheduleError::ValidationFailed`](crate::ScheduleError::ValidationFailed)
    ///   with every input problem found.
    pub fn run(&self) -> Result<ScheduleOutcome> {
        self.config.validate()?;
        validate_input(&self.proctors)?;

        let draft = SessionGenerator::with_config(self.config)
            .generate_sessions(&self.proctors, &self.sessions)?;
        let refined = ScheduleOptimizer::with_config(self.config).optimize(&draft);

        let uncovered = self.sessions.len().saturating_sub(refined.session_count());
        if uncovered > 0 {
            warn!(
                uncovered,
                requested = self.sessions.len(),
                "Some lab sessions have no proctor"
            );
        }
        Ok(ScheduleOutcome { draft, refined })
    }
}
