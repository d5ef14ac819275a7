//! Task model.
//!
//! A task is one unit of work competing for a slot in the weekly
//! schedule. It names exactly one required skill and carries an integer
//! priority weight that feeds the solver objective.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::TaskId;

/// A task to be placed on the weekly grid.
///
/// Tasks are indivisible: a task is either placed on exactly one
/// (employee, day, shift) or left unscheduled — never split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Human-readable name.
    pub name: String,
    /// The single skill an employee must hold to take this task.
    pub required_skill: String,
    /// Priority weight (>= 1, higher = more important).
    pub priority: i32,
}

impl Task {
    /// Creates a new task with priority 1.
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            required_skill: String::new(),
            priority: 1,
        }
    }

    /// Sets the required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skill = skill.into();
        self
    }

    /// Sets the priority weight.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
