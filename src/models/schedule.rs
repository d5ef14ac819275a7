//! Schedule (solution) model.
//!
//! A schedule is the output of one solving run: an ordered list of
//! placements plus the tasks that could not be placed. Together the two
//! lists partition the input task set.
//!
//! # Entry Order
//! Entries follow the canonical extraction order — day-major, then
//! shift, then employee input order, then task input order. Callers
//! rely on this order when rendering the weekly view.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Day, EmployeeId, Shift, Task, TaskId};

/// One placed task: who works what, when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of the placement.
    pub day: Day,
    /// Shift of the placement.
    pub shift: Shift,
    /// Assigned employee.
    pub employee_id: EmployeeId,
    /// Assigned employee's name (denormalized for display).
    pub employee_name: String,
    /// Placed task.
    pub task_id: TaskId,
    /// Placed task's name (denormalized for display).
    pub task_name: String,
}

/// A complete weekly schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Placements in canonical order.
    pub entries: Vec<ScheduleEntry>,
    /// Tasks without a placement, in input order.
    pub unscheduled: Vec<Task>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placement.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of placements.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether every input task received a placement.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// The placement for a task, if any.
    ///
    /// A task appears at most once; the first match is the only match.
    pub fn entry_for_task(&self, task_id: TaskId) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    /// All placements for an employee.
    pub fn entries_for_employee(&self, employee_id: EmployeeId) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .collect()
    }

    /// All placements on a day.
    pub fn entries_on(&self, day: Day) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Shifts worked by an employee this week.
    pub fn shift_count(&self, employee_id: EmployeeId) -> usize {
        self.entries
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .count()
    }

    /// Ids of all placed tasks.
    pub fn placed_task_ids(&self) -> HashSet<TaskId> {
        self.entries.iter().map(|e| e.task_id).collect()
    }

    /// Shift counts per employee, for employees that appear in entries.
    pub fn shift_counts(&self) -> HashMap<EmployeeId, usize> {
        let mut counts: HashMap<EmployeeId, usize> = HashMap::new();
        for e in &self.entries {
            *counts.entry(e.employee_id).or_insert(0) += 1;
        }
        counts
    }
}
