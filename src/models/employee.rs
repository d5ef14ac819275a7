//! Employee model.
//!
//! Employees are the resources that take shifts: each has a skill tag
//! set and a set of days on which they cannot be scheduled. Both sets
//! may be empty.
//!
//! # Reference
//! Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"

use serde::{Deserialize, Serialize};

use super::{Day, EmployeeId};

/// An employee available for shift assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Human-readable name.
    pub name: String,
    /// Skill tags this employee holds.
    pub skills: Vec<String>,
    /// Days on which this employee must not be scheduled.
    pub unavailable_days: Vec<Day>,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            skills: Vec::new(),
            unavailable_days: Vec::new(),
        }
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Replaces the skill set.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Marks a day as unavailable.
    pub fn with_unavailable(mut self, day: Day) -> Self {
        self.unavailable_days.push(day);
        self
    }

    /// Replaces the unavailable-day set.
    pub fn with_unavailable_days(mut self, days: Vec<Day>) -> Self {
        self.unavailable_days = days;
        self
    }

    /// Whether this employee holds a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Whether this employee can work on a given day.
    pub fn is_available_on(&self, day: Day) -> bool {
        !self.unavailable_days.contains(&day)
    }

    /// Whether this employee has any blackout days.
    pub fn has_blackouts(&self) -> bool {
        !self.unavailable_days.is_empty()
    }
}
