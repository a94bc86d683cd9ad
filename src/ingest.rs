//! Input document loading.
//!
//! A scheduling run is described by one TOML document:
//!
//! ```toml
//! [scheduler]            # optional; missing keys take defaults
//! max_weekly_hours = 15
//!
//! [[proctors]]
//! name = "Alice"
//! star = 1               # 0 or 1
//! max_hours = 12         # 1..=40
//! monday = "09:00-12:00; 13:00-17:00"
//! thursday = "10:00-14:00"
//!
//! [[labs]]
//! day = "Monday"
//! start = "09:00"
//! end = "11:30"
//! ```
//!
//! Availability fields hold `;`-separated `HH:MM-HH:MM` windows. A missing
//! or blank field means no availability that day. Every row problem is
//! collected and reported together.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{parse_clock, LabSession, ProctorRecord, TimeInterval, Weekday};
use crate::scheduler::ScheduleRequest;
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Raw input document as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub proctors: Vec<RawProctor>,
    #[serde(default)]
    pub labs: Vec<RawLab>,
}

/// One proctor row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProctor {
    pub name: String,
    #[serde(default)]
    pub star: i64,
    pub max_hours: f64,
    #[serde(default)]
    pub monday: Option<String>,
    #[serde(default)]
    pub tuesday: Option<String>,
    #[serde(default)]
    pub wednesday: Option<String>,
    #[serde(default)]
    pub thursday: Option<String>,
    #[serde(default)]
    pub friday: Option<String>,
    #[serde(default)]
    pub saturday: Option<String>,
    #[serde(default)]
    pub sunday: Option<String>,
}

/// One lab session row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLab {
    pub day: String,
    pub start: String,
    pub end: String,
}

impl RawProctor {
    fn day_field(&self, day: Weekday) -> Option<&str> {
        match day {
            Weekday::Monday => self.monday.as_deref(),
            Weekday::Tuesday => self.tuesday.as_deref(),
            Weekday::Wednesday => self.wednesday.as_deref(),
            Weekday::Thursday => self.thursday.as_deref(),
            Weekday::Friday => self.friday.as_deref(),
            Weekday::Saturday => self.saturday.as_deref(),
            Weekday::Sunday => self.sunday.as_deref(),
        }
    }

    fn into_record(self, errors: &mut Vec<ValidationError>) -> ProctorRecord {
        let is_star = match self.star {
            0 => false,
            1 => true,
            other => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidStarFlag,
                    format!("Proctor '{}': star must be 0 or 1, got {other}", self.name),
                ));
                false
            }
        };

        let mut record = ProctorRecord::new(self.name.clone())
            .with_star(is_star)
            .with_max_hours(self.max_hours);

        for day in Weekday::ALL {
            let Some(field) = self.day_field(day) else {
                continue;
            };
            match parse_availability(field) {
                Ok(windows) => {
                    if !windows.is_empty() {
                        record.availability.insert(day, windows);
                    }
                }
                Err(e) => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTime,
                    format!("Proctor '{}', {day}: {e}", self.name),
                )),
            }
        }
        record
    }
}

impl RawLab {
    fn into_session(self, index: usize) -> std::result::Result<LabSession, ValidationError> {
        let day: Weekday = self.day.parse().map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::UnknownWeekday,
                format!("Lab #{}: unknown day '{}'", index + 1, self.day),
            )
        })?;
        let slot = parse_clock(&self.start)
            .and_then(|start| TimeInterval::new(start, parse_clock(&self.end)?))
            .map_err(|e| {
                ValidationError::new(
                    ValidationErrorKind::InvalidTime,
                    format!("Lab #{} ({day}): {e}", index + 1),
                )
            })?;
        Ok(LabSession::new(day, slot))
    }
}

/// Parses a `;`-separated list of `HH:MM-HH:MM` windows.
///
/// A blank string yields no windows.
pub fn parse_availability(field: &str) -> Result<Vec<TimeInterval>> {
    if field.trim().is_empty() {
        return Ok(Vec::new());
    }
    field.split(';').map(|token| token.trim().parse()).collect()
}

/// Loads and validates a scheduling request from a TOML file.
pub fn load_request(path: impl AsRef<Path>) -> Result<ScheduleRequest> {
    let content = std::fs::read_to_string(path)?;
    parse_request(&content)
}

/// Parses and validates a scheduling request from a TOML string.
///
/// # Errors
/// - [`ScheduleError::Parse`] for malformed TOML or missing required fields.
/// - [`ScheduleError::InvalidConfig`] for unusable `[scheduler]` bounds.
/// - [`ScheduleError::ValidationFailed`] listing every row problem.
pub fn parse_request(content: &str) -> Result<ScheduleRequest> {
    let raw: RawDocument = toml::from_str(content)?;
    raw.scheduler.validate()?;

    let mut errors = Vec::new();
    let proctors: Vec<ProctorRecord> = raw
        .proctors
        .into_iter()
        .map(|p| p.into_record(&mut errors))
        .collect();

    let mut sessions = Vec::with_capacity(raw.labs.len());
    for (index, lab) in raw.labs.into_iter().enumerate() {
        match lab.into_session(index) {
            Ok(session) => sessions.push(session),
            Err(e) => errors.push(e),
        }
    }

    if let Err(found) = validate_input(&proctors) {
        errors.extend(found);
    }
    if !errors.is_empty() {
        return Err(ScheduleError::ValidationFailed { errors });
    }

    debug!(
        proctors = proctors.len(),
        sessions = sessions.len(),
        "Loaded scheduling request"
    );
    Ok(ScheduleRequest {
        proctors,
        sessions,
        config: raw.scheduler,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [scheduler]
        max_weekly_hours = 12

        [[proctors]]
        name = "Alice"
        star = 1
        max_hours = 10
        monday = "09:00-12:00; 13:00-17:00"
        thursday = "10:00-14:00"

        [[proctors]]
        name = "Bob"
        max_hours = 4
        monday = ""

        [[labs]]
        day = "Monday"
        start = "09:00"
        end = "11:30"

        [[labs]]
        day = "thu"
        start = "10:00"
        end = "13:00"
    "#;

    #[test]
    fn test_parse_sample() {
        let request = parse_request(SAMPLE).unwrap();
        assert!((request.config.max_weekly_hours - 12.0).abs() < 1e-10);
        assert!((request.config.min_shift_hours - 2.5).abs() < 1e-10);

        assert_eq!(request.proctors.len(), 2);
        let alice = &request.proctors[0];
        assert!(alice.is_star);
        assert_eq!(alice.availability_on(Weekday::Monday).len(), 2);
        assert_eq!(alice.availability_slot_count(), 3);

        let bob = &request.proctors[1];
        assert!(!bob.is_star);
        assert_eq!(bob.availability_slot_count(), 0);

        assert_eq!(request.sessions.len(), 2);
        assert_eq!(request.sessions[1].day, Weekday::Thursday);
    }

    #[test]
    fn test_parse_availability() {
        let windows = parse_availability(" 09:00-10:00 ;14:00-16:30").unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].to_string(), "14:00-16:30");
        assert!(parse_availability("   ").unwrap().is_empty());
        assert!(parse_availability("09:00-10:00;").is_err());
        assert!(parse_availability("9am-10am").is_err());
    }

    #[test]
    fn test_row_errors_are_collected() {
        let doc = r#"
            [[proctors]]
            name = "Alice"
            star = 2
            max_hours = 50
            tuesday = "12:00-09:00"

            [[labs]]
            day = "Someday"
            start = "09:00"
            end = "11:00"

            [[labs]]
            day = "Friday"
            start = "14:00"
            end = "25:00"
        "#;

        match parse_request(doc) {
            Err(ScheduleError::ValidationFailed { errors }) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
                assert!(kinds.contains(&ValidationErrorKind::InvalidStarFlag));
                assert!(kinds.contains(&ValidationErrorKind::MaxHoursOutOfRange));
                assert!(kinds.contains(&ValidationErrorKind::UnknownWeekday));
                assert_eq!(
                    kinds
                        .iter()
                        .filter(|k| **k == ValidationErrorKind::InvalidTime)
                        .count(),
                    2
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let doc = r#"
            [[proctors]]
            name = "Alice"
        "#;
        assert!(matches!(parse_request(doc), Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn test_bad_scheduler_table() {
        let doc = r#"
            [scheduler]
            min_shift_hours = 5
            max_shift_hours = 4
        "#;
        assert!(matches!(parse_request(doc), Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_request_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.proctors.len(), 2);

        let missing = load_request(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ScheduleError::Read(_))));
    }
}
