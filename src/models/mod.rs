//! Proctor scheduling domain models.
//!
//! Provides the data types for describing who can work when (proctors and
//! their availability), what needs staffing (lab sessions), and the result
//! of a scheduling run (a weekly schedule of session coverage).
//!
//! # Domain Mappings
//!
//! | proctor-schedule | Generic scheduling |
//! |------------------|--------------------|
//! | ProctorRecord | Human resource with calendar |
//! | LabSession | Fixed-time activity |
//! | Assignment | Resource-time assignment |
//! | Schedule | Roster |

mod interval;
mod proctor;
mod schedule;
mod session;
mod weekday;

pub use interval::{parse_clock, TimeInterval};
pub use proctor::ProctorRecord;
pub use schedule::{Assignment, Schedule, SessionCoverage, MAX_PROCTORS_PER_SESSION};
pub use session::LabSession;
pub use weekday::Weekday;
