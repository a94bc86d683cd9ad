//! Error types for the scheduling engine.
//!
//! Malformed input (bad intervals, unknown weekdays, rejected rows) surfaces
//! as a descriptive error before any assignment work starts. A session that
//! cannot be staffed is not an error: it simply receives no coverage.

use chrono::NaiveTime;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the scheduling engine and its input layer.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    #[error("Invalid time format '{value}': expected {expected}")]
    InvalidTimeFormat {
        value: String,
        expected: &'static str,
    },

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Duplicate proctor name: {0}")]
    DuplicateProctor(String),

    #[error("Invalid scheduler configuration: {0}")]
    InvalidConfig(String),

    #[error("Input validation failed with {} error(s)", errors.len())]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Failed to read input file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ScheduleError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub(crate) fn time_format(value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidTimeFormat {
            value: value.into(),
            expected,
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::ValidationFailed { errors }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
