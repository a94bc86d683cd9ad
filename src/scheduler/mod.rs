//! Greedy proctor assignment and KPI evaluation.
//!
//! Two decoupled greedy passes with different weightings and statistic
//! sources:
//!
//! - [`SessionGenerator`] builds a draft schedule from raw availability.
//! - [`ScheduleOptimizer`] re-ranks each session's already-assigned
//!   proctors using statistics derived from the draft alone.
//!
//! Neither pass backtracks; neither guarantees every session is covered.
//! Both are deterministic for a given input ordering.
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarizes coverage and hour distribution.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod candidate;
mod generator;
mod kpi;
mod optimizer;
mod request;

pub use generator::SessionGenerator;
pub use kpi::{single_shift_proctors, ScheduleKpi};
pub use optimizer::{collect_stats, ProctorStats, ScheduleOptimizer};
pub use request::{ScheduleOutcome, ScheduleRequest};
