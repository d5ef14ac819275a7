//! Schedule quality metrics (KPIs).
//!
//! Computes the dashboard-facing indicators for a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled / Unscheduled | Placement counts |
//! | Placement Rate | scheduled / total tasks |
//! | Shifts by Employee | Weekly load per employee, zero-filled |
//! | Avg Shifts | Mean load across all employees |
//! | Employees on Leave | Employees with any blackout days |

use std::collections::HashMap;

use crate::models::{Employee, EmployeeId, Schedule};

/// Schedule performance indicators for one weekly run.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of placed tasks.
    pub scheduled_count: usize,
    /// Number of tasks left unscheduled.
    pub unscheduled_count: usize,
    /// Fraction of tasks placed (1.0 when there were no tasks).
    pub placement_rate: f64,
    /// Shifts worked per employee. Every employee appears, idle ones at 0.
    pub shifts_by_employee: HashMap<EmployeeId, usize>,
    /// Mean shifts per employee (0.0 when there are no employees).
    pub avg_shifts_per_employee: f64,
    /// Employees with at least one unavailable day.
    pub employees_on_leave: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the employee snapshot.
    ///
    /// # Arguments
    /// * `schedule` - The completed schedule (entries + unscheduled).
    /// * `employees` - The input employees (for zero-filling and leave counts).
    pub fn calculate(schedule: &Schedule, employees: &[Employee]) -> Self {
        let scheduled_count = schedule.entry_count();
        let unscheduled_count = schedule.unscheduled.len();
        let total = scheduled_count + unscheduled_count;

        let mut shifts_by_employee = schedule.shift_counts();
        for emp in employees {
            shifts_by_employee.entry(emp.id).or_insert(0);
        }

        let placement_rate = if total == 0 {
            1.0
        } else {
            scheduled_count as f64 / total as f64
        };

        let avg_shifts_per_employee = if employees.is_empty() {
            0.0
        } else {
            scheduled_count as f64 / employees.len() as f64
        };

        let employees_on_leave = employees.iter().filter(|e| e.has_blackouts()).count();

        Self {
            scheduled_count,
            unscheduled_count,
            placement_rate,
            shifts_by_employee,
            avg_shifts_per_employee,
            employees_on_leave,
        }
    }
}
