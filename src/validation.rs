//! Input validation for proctor scheduling.
//!
//! Checks structural integrity of the proctor list before
//! scheduling. Detects:
//! - Duplicate or empty proctor names
//! - Weekly hour ceilings outside the accepted range
//!
//! Lab sessions are not checked here. A session too short to staff,
//! including a zero-length one, is skipped by the generator and left
//! uncovered.
//!
//! Row-level problems found while reading an input document (bad time
//! tokens, unknown weekdays, star flags other than 0/1) use the same error
//! type, so a caller sees every problem in one report.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::ProctorRecord;

/// Lowest accepted declared weekly ceiling.
pub const MIN_DECLARED_HOURS: f64 = 1.0;
/// Highest accepted declared weekly ceiling.
pub const MAX_DECLARED_HOURS: f64 = 40.0;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two proctors share the same name.
    DuplicateName,
    /// A proctor has a blank name.
    EmptyName,
    /// Declared weekly hours outside `[1, 40]`.
    MaxHoursOutOfRange,
    /// Star flag other than 0 or 1.
    InvalidStarFlag,
    /// Unparseable or inverted time value.
    InvalidTime,
    /// Day name that is not a weekday.
    UnknownWeekday,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the proctor list for a scheduling run.
///
/// Checks:
/// 1. No duplicate proctor names
/// 2. No empty proctor names
/// 3. Declared weekly hours within `[1, 40]`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(proctors: &[ProctorRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for p in proctors {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Proctor name cannot be empty",
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate proctor name: {}", p.name),
            ));
        }

        if !(MIN_DECLARED_HOURS..=MAX_DECLARED_HOURS).contains(&p.max_weekly_hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MaxHoursOutOfRange,
                format!(
                    "Proctor '{}': max hours {} must be between {} and {}",
                    p.name, p.max_weekly_hours, MIN_DECLARED_HOURS, MAX_DECLARED_HOURS
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns the first name that appears more than once, if any.
pub(crate) fn first_duplicate_name(proctors: &[ProctorRecord]) -> Option<&str> {
    let mut seen = HashSet::new();
    proctors
        .iter()
        .map(|p| p.name.as_str())
        .find(|name| !seen.insert(*name))
}
