//! Scheduler configuration.
//!
//! Bounds shared by both scheduling passes: the weekly hour ceiling applied
//! to every proctor, and the admissible shift length range.
//!
//! Loaded from the optional `[scheduler]` table of the input document;
//! missing keys take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Default weekly hour ceiling per proctor.
pub const DEFAULT_MAX_WEEKLY_HOURS: f64 = 15.0;
/// Default minimum shift length (hours).
pub const DEFAULT_MIN_SHIFT_HOURS: f64 = 2.5;
/// Default maximum shift length (hours).
pub const DEFAULT_MAX_SHIFT_HOURS: f64 = 4.0;

/// Bounds for one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Ceiling on cumulative assigned hours per proctor.
    pub max_weekly_hours: f64,
    /// Shortest admissible shift (hours).
    pub min_shift_hours: f64,
    /// Longest admissible shift (hours).
    pub max_shift_hours: f64,
}

impl SchedulerConfig {
    /// Creates a configuration with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekly ceiling.
    pub fn with_max_weekly_hours(mut self, hours: f64) -> Self {
        self.max_weekly_hours = hours;
        self
    }

    /// Sets the minimum shift length.
    pub fn with_min_shift_hours(mut self, hours: f64) -> Self {
        self.min_shift_hours = hours;
        self
    }

    /// Sets the maximum shift length.
    pub fn with_max_shift_hours(mut self, hours: f64) -> Self {
        self.max_shift_hours = hours;
        self
    }

    /// Whether a shift length lies within `[min_shift_hours, max_shift_hours]`.
    #[inline]
    pub fn shift_in_bounds(&self, hours: f64) -> bool {
        hours >= self.min_shift_hours && hours <= self.max_shift_hours
    }

    /// Checks that the bounds are usable.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`] for non-finite or non-positive values,
    /// or when the minimum shift exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_weekly_hours", self.max_weekly_hours),
            ("min_shift_hours", self.min_shift_hours),
            ("max_shift_hours", self.max_shift_hours),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScheduleError::config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.min_shift_hours > self.max_shift_hours {
            return Err(ScheduleError::config(format!(
                "min_shift_hours ({}) exceeds max_shift_hours ({})",
                self.min_shift_hours, self.max_shift_hours
            )));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
            min_shift_hours: DEFAULT_MIN_SHIFT_HOURS,
            max_shift_hours: DEFAULT_MAX_SHIFT_HOURS,
        }
    }
}
