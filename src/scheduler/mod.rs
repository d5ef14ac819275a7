//! Weekly scheduling facade and KPI evaluation.
//!
//! `WeeklyScheduler` is the crate's entry point: one call turns a
//! read-only snapshot (employees, tasks, grid, preferences, rules)
//! into a conflict-free weekly schedule plus the list of tasks that
//! could not be placed.
//!
//! # Pipeline
//!
//! 1. Validate the snapshot (fail fast on malformed input).
//! 2. Build the gated 0/1 assignment model (`cp::ModelBuilder`).
//! 3. Run the branch-and-bound search (`cp::solve`).
//! 4. Extract entries in canonical day/shift/employee/task order.
//!
//! # KPI
//!
//! `ScheduleKpi` computes dashboard metrics: placement counts and
//! rate, per-employee load, and leave coverage.

mod kpi;
mod weekly;

pub use kpi::ScheduleKpi;
pub use weekly::{ScheduleRequest, WeeklyScheduler};
