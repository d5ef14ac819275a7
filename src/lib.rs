//! Weekly shift assignment engine.
//!
//! Assigns a finite set of employees to a finite set of tasks across a
//! fixed weekly day/shift grid, subject to hard eligibility constraints
//! (skills, availability, shift caps) and a priority-plus-learned-
//! preference objective. The solver is self-contained: a complete
//! branch-and-bound with gate propagation, no external optimization
//! library.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Task`, `WeekGrid`,
//!   `PreferenceMatrix`, `RuleSet`, `Schedule`
//! - **`validation`**: Snapshot integrity checks (duplicate IDs,
//!   missing skills, bad priorities)
//! - **`cp`**: The 0/1 assignment model and branch-and-bound search
//! - **`scheduler`**: The `WeeklyScheduler` facade and KPI metrics
//!
//! # Example
//!
//! ```
//! use shiftplan::models::{Day, Employee, PreferenceMatrix, RuleSet, Task};
//! use shiftplan::scheduler::{ScheduleRequest, WeeklyScheduler};
//!
//! let employees = vec![
//!     Employee::new(1, "Alice").with_skill("welding"),
//!     Employee::new(2, "Bob").with_skill("driving").with_unavailable(Day::Sun),
//! ];
//! let tasks = vec![
//!     Task::new(1, "Weld frame").with_required_skill("welding").with_priority(3),
//!     Task::new(2, "Depot run").with_required_skill("driving"),
//! ];
//! let request = ScheduleRequest::new(employees, tasks)
//!     .with_preferences(PreferenceMatrix::new().with_score(2, 2, 1))
//!     .with_rules(RuleSet::new().with_max_shifts_per_week(5));
//!
//! let schedule = WeeklyScheduler::new().schedule(&request).unwrap();
//! assert!(schedule.is_fully_scheduled());
//! ```
//!
//! # Concurrency
//!
//! A scheduling run is one synchronous computation over a read-only
//! snapshot; runs share no state, so snapshots may be solved from
//! multiple threads with one scheduler instance each.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"
//! - Wolsey (1998), "Integer Programming"

pub mod cp;
pub mod models;
pub mod scheduler;
pub mod validation;
