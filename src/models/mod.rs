//! Shift-planning domain models.
//!
//! Core data types for the weekly assignment problem: who can work
//! (`Employee`), what needs doing (`Task`), when work happens
//! (`WeekGrid`), learned planner preferences (`PreferenceMatrix`),
//! business rules (`RuleSet`), and the solved output (`Schedule`).
//!
//! All types are plain serde-serializable values. Nothing here is
//! mutated during a solving run — the snapshot handed to the scheduler
//! is read-only; the only mutation in the crate is
//! [`PreferenceMatrix::learn`], which the hosting application calls
//! outside solving runs.

mod employee;
mod grid;
mod preference;
mod rules;
mod schedule;
mod task;

pub use employee::Employee;
pub use grid::{Day, Shift, WeekGrid};
pub use preference::PreferenceMatrix;
pub use rules::RuleSet;
pub use schedule::{Schedule, ScheduleEntry};
pub use task::Task;

/// Employee identifier (the hosting application's record id).
pub type EmployeeId = u32;

/// Task identifier (the hosting application's record id).
pub type TaskId = u32;
