//! 0/1 assignment model.
//!
//! Translates a scheduling snapshot into the decision-variable space
//! the search engine explores. The full space is one boolean indicator
//! per (employee, day, shift, task) quadruple; skill and availability
//! gates are applied eagerly while building, so gated variables are
//! never materialized. What remains is a candidate list plus the
//! constraint structure:
//!
//! - at most one placement per task,
//! - at most one task per (employee, day, shift),
//! - at most `max_shifts` placements per employee per week.
//!
//! Each candidate carries its objective weight,
//! `task.priority + preference_score(employee, task)` — priority and
//! learned preference share one linear objective.

use log::debug;

use crate::models::{Employee, PreferenceMatrix, RuleSet, Task, WeekGrid};
use crate::validation::{validate_snapshot, ValidationError};

/// One surviving decision variable: "this employee takes this task on
/// this slot". All fields are indices into the snapshot's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Employee index.
    pub employee: usize,
    /// Day index into the grid's day sequence.
    pub day: usize,
    /// Shift index into the grid's shift sequence.
    pub shift: usize,
    /// Task index.
    pub task: usize,
    /// Objective contribution if selected.
    pub weight: i64,
}

/// The built model: surviving candidates plus constraint structure.
///
/// Borrows the snapshot; a model is built per run and discarded after
/// extraction.
#[derive(Debug)]
pub struct AssignmentModel<'a> {
    pub(crate) employees: &'a [Employee],
    pub(crate) tasks: &'a [Task],
    pub(crate) grid: &'a WeekGrid,
    pub(crate) candidates: Vec<Candidate>,
    /// Candidate indexes grouped per task, in (employee, day, shift) order.
    pub(crate) by_task: Vec<Vec<usize>>,
    /// Effective weekly cap per employee.
    pub(crate) max_shifts: u32,
}

impl<'a> AssignmentModel<'a> {
    /// Number of surviving (ungated) decision variables.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Size of the full, ungated variable space.
    pub fn variable_space(&self) -> usize {
        self.employees.len() * self.grid.slot_count() * self.tasks.len()
    }

    /// Highest candidate weight for a task; 0 when fully gated.
    pub(crate) fn best_weight(&self, task: usize) -> i64 {
        self.by_task[task]
            .iter()
            .map(|&c| self.candidates[c].weight)
            .max()
            .unwrap_or(0)
    }
}

/// Builds an [`AssignmentModel`] from a scheduling snapshot.
///
/// # Example
/// ```
/// use shiftplan::cp::ModelBuilder;
/// use shiftplan::models::{Employee, Task, WeekGrid};
///
/// let employees = vec![Employee::new(1, "Alice").with_skill("welding")];
/// let tasks = vec![Task::new(1, "Weld frame").with_required_skill("welding")];
/// let grid = WeekGrid::standard();
///
/// let model = ModelBuilder::new(&employees, &tasks, &grid).build().unwrap();
/// assert_eq!(model.candidate_count(), 14); // 7 days x 2 shifts
/// ```
pub struct ModelBuilder<'a> {
    employees: &'a [Employee],
    tasks: &'a [Task],
    grid: &'a WeekGrid,
    preferences: Option<&'a PreferenceMatrix>,
    rules: Option<&'a RuleSet>,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder over a snapshot.
    pub fn new(employees: &'a [Employee], tasks: &'a [Task], grid: &'a WeekGrid) -> Self {
        Self {
            employees,
            tasks,
            grid,
            preferences: None,
            rules: None,
        }
    }

    /// Attaches learned preference scores.
    pub fn with_preferences(mut self, preferences: &'a PreferenceMatrix) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Attaches the rule set.
    pub fn with_rules(mut self, rules: &'a RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Validates the snapshot and builds the model.
    ///
    /// Fails fast with every detected validation error before any
    /// variable is created. Gates (skill mismatch, unavailable day)
    /// are applied here as a propagation pre-pass: a gated quadruple
    /// produces no candidate at all.
    pub fn build(&self) -> Result<AssignmentModel<'a>, Vec<ValidationError>> {
        validate_snapshot(self.employees, self.tasks)?;

        let max_shifts = self
            .rules
            .map(|r| r.effective_max_shifts(self.grid))
            .unwrap_or(self.grid.slot_count() as u32);

        let mut candidates = Vec::new();
        let mut by_task = vec![Vec::new(); self.tasks.len()];

        for (ti, task) in self.tasks.iter().enumerate() {
            for (ei, emp) in self.employees.iter().enumerate() {
                // Skill gate
                if !emp.has_skill(&task.required_skill) {
                    continue;
                }
                let preference = self
                    .preferences
                    .map(|p| p.score(emp.id, task.id))
                    .unwrap_or(0);
                let weight = i64::from(task.priority) + i64::from(preference);

                for (di, &day) in self.grid.days.iter().enumerate() {
                    // Availability gate
                    if !emp.is_available_on(day) {
                        continue;
                    }
                    for si in 0..self.grid.shifts.len() {
                        by_task[ti].push(candidates.len());
                        candidates.push(Candidate {
                            employee: ei,
                            day: di,
                            shift: si,
                            task: ti,
                            weight,
                        });
                    }
                }
            }
        }

        let model = AssignmentModel {
            employees: self.employees,
            tasks: self.tasks,
            grid: self.grid,
            candidates,
            by_task,
            max_shifts,
        };

        debug!(
            "model built: {} candidates of {} quadruples, weekly cap {}",
            model.candidate_count(),
            model.variable_space(),
            model.max_shifts
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;
    use crate::validation::ValidationErrorKind;

    fn sample_snapshot() -> (Vec<Employee>, Vec<Task>) {
        let employees = vec![
            Employee::new(1, "Alice").with_skill("welding"),
            Employee::new(2, "Bob")
                .with_skill("forklift")
                .with_unavailable(Day::Sun),
        ];
        let tasks = vec![
            Task::new(1, "Weld frame")
                .with_required_skill("welding")
                .with_priority(2),
            Task::new(2, "Move pallets").with_required_skill("forklift"),
        ];
        (employees, tasks)
    }

    #[test]
    fn test_skill_gate_prunes_variables() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        let model = ModelBuilder::new(&employees, &tasks, &grid).build().unwrap();

        // Task 1 only matches Alice (14 slots); task 2 only Bob, who
        // loses Sunday (12 slots).
        assert_eq!(model.by_task[0].len(), 14);
        assert_eq!(model.by_task[1].len(), 12);
        assert_eq!(model.candidate_count(), 26);
        assert_eq!(model.variable_space(), 2 * 14 * 2);
    }

    #[test]
    fn test_availability_gate() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        let model = ModelBuilder::new(&employees, &tasks, &grid).build().unwrap();

        let sunday = grid.days.iter().position(|&d| d == Day::Sun).unwrap();
        assert!(model
            .candidates
            .iter()
            .all(|c| !(c.employee == 1 && c.day == sunday)));
    }

    #[test]
    fn test_weights_combine_priority_and_preference() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        let prefs = PreferenceMatrix::new().with_score(1, 1, 5);
        let model = ModelBuilder::new(&employees, &tasks, &grid)
            .with_preferences(&prefs)
            .build()
            .unwrap();

        // Alice (id 1) on task id 1: priority 2 + preference 5
        for &c in &model.by_task[0] {
            assert_eq!(model.candidates[c].weight, 7);
        }
        // Bob on task id 2: priority 1, no preference
        for &c in &model.by_task[1] {
            assert_eq!(model.candidates[c].weight, 1);
        }
    }

    #[test]
    fn test_stale_preferences_ignored() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        // Pair references ids that exist in no snapshot list
        let prefs = PreferenceMatrix::new().with_score(99, 99, 1000);
        let model = ModelBuilder::new(&employees, &tasks, &grid)
            .with_preferences(&prefs)
            .build()
            .unwrap();
        assert!(model.candidates.iter().all(|c| c.weight <= 2));
    }

    #[test]
    fn test_default_cap_is_slot_count() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        let model = ModelBuilder::new(&employees, &tasks, &grid).build().unwrap();
        assert_eq!(model.max_shifts, 14);
    }

    #[test]
    fn test_rules_cap_applied() {
        let (employees, tasks) = sample_snapshot();
        let grid = WeekGrid::standard();
        let rules = RuleSet::new().with_max_shifts_per_week(3);
        let model = ModelBuilder::new(&employees, &tasks, &grid)
            .with_rules(&rules)
            .build()
            .unwrap();
        assert_eq!(model.max_shifts, 3);
    }

    #[test]
    fn test_malformed_input_rejected() {
        let employees = vec![Employee::new(1, "Alice")];
        let tasks = vec![Task::new(1, "No skill").with_priority(0)];
        let grid = WeekGrid::standard();
        let errors = ModelBuilder::new(&employees, &tasks, &grid)
            .build()
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingRequiredSkill));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPriority));
    }

    #[test]
    fn test_fully_gated_model_is_empty() {
        let employees = vec![Employee::new(1, "Alice").with_skill("welding")];
        let tasks = vec![Task::new(1, "Drive").with_required_skill("driving")];
        let grid = WeekGrid::standard();
        let model = ModelBuilder::new(&employees, &tasks, &grid).build().unwrap();
        assert_eq!(model.candidate_count(), 0);
        assert_eq!(model.best_weight(0), 0);
    }
}
