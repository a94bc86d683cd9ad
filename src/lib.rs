//! Proctor scheduling for timed lab sessions.
//!
//! Assigns proctors to lab sessions across a work week, respecting
//! per-proctor availability windows, a weekly hour ceiling, shift-length
//! bounds, and a preference for designated star proctors.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeInterval`, `Weekday`, `ProctorRecord`,
//!   `LabSession`, `Assignment`, `SessionCoverage`, `Schedule`
//! - **`scheduler`**: The two greedy passes (`SessionGenerator`,
//!   `ScheduleOptimizer`), the end-to-end `ScheduleRequest`, and KPIs
//! - **`config`**: Weekly ceiling and shift bounds
//! - **`validation`**: Input integrity checks (duplicate names, hour ranges)
//! - **`ingest`**: TOML input documents
//! - **`presenter`**: Plain-text rendering
//!
//! # Architecture
//!
//! ```text
//! input → SessionGenerator → draft Schedule → ScheduleOptimizer → final Schedule → presenter
//! ```
//!
//! The engine is a deterministic greedy heuristic. It does not backtrack,
//! and it does not guarantee that every session is covered or that hours are
//! optimally balanced. All run state is local to a call, so independent runs
//! may execute concurrently.
//!
//! # Example
//!
//! ```
//! use proctor_schedule::models::{LabSession, ProctorRecord, Weekday};
//! use proctor_schedule::scheduler::ScheduleRequest;
//!
//! let proctors = vec![
//!     ProctorRecord::star("Alice").with_availability(Weekday::Monday, "09:00-12:00".parse().unwrap()),
//!     ProctorRecord::new("Bob").with_availability(Weekday::Monday, "09:00-12:00".parse().unwrap()),
//! ];
//! let sessions = vec![LabSession::new(Weekday::Monday, "09:00-11:30".parse().unwrap())];
//!
//! let outcome = ScheduleRequest::new(proctors, sessions).run().unwrap();
//! assert_eq!(outcome.refined.assignment_count(), 2);
//! ```
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models", EJOR 153(1)

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod presenter;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{Result, ScheduleError};
