//! Input validation for scheduling snapshots.
//!
//! Checks structural integrity of employees and tasks before any model
//! is built. Detects:
//! - Duplicate IDs
//! - Tasks with no required skill
//! - Priorities below 1
//!
//! Malformed input is a caller contract violation, so the model builder
//! rejects it up front instead of silently degrading the model. Stale
//! preference entries are deliberately *not* checked: a score pair
//! referencing a deleted employee or task is simply never looked up.

use std::error::Error;
use std::fmt;

use crate::models::{Employee, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task has an empty required skill.
    MissingRequiredSkill,
    /// A task priority is below 1.
    InvalidPriority,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

/// Validates a scheduling snapshot.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No duplicate task IDs
/// 3. Every task names a non-empty required skill
/// 4. Every task priority is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(employees: &[Employee], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = std::collections::HashSet::new();
    for emp in employees {
        if !employee_ids.insert(emp.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", emp.id),
            ));
        }
    }

    let mut task_ids = std::collections::HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.required_skill.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRequiredSkill,
                format!("Task '{}' has no required skill", task.name),
            ));
        }

        if task.priority < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!(
                    "Task '{}' has priority {} (must be >= 1)",
                    task.name, task.priority
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
