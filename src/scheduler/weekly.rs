//! Weekly scheduling facade.
//!
//! Ties the pipeline together: validate the snapshot, build the
//! assignment model, run the branch-and-bound, and extract the winning
//! assignment into a [`Schedule`].
//!
//! A scheduling run is one synchronous computation over a read-only
//! snapshot. Runs share nothing; concurrent runs each build their own
//! model and solver state, so snapshots may be shared freely across
//! threads.

use log::debug;

use crate::cp::{solve, AssignmentModel, Candidate, ModelBuilder, Solution, SolverConfig};
use crate::models::{
    Employee, PreferenceMatrix, RuleSet, Schedule, ScheduleEntry, Task, WeekGrid,
};
use crate::validation::ValidationError;

/// Input container for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Employees available for assignment.
    pub employees: Vec<Employee>,
    /// Tasks to place.
    pub tasks: Vec<Task>,
    /// The day/shift grid.
    pub grid: WeekGrid,
    /// Learned preference scores.
    pub preferences: PreferenceMatrix,
    /// Business rules.
    pub rules: RuleSet,
}

impl ScheduleRequest {
    /// Creates a request over the standard weekly grid.
    pub fn new(employees: Vec<Employee>, tasks: Vec<Task>) -> Self {
        Self {
            employees,
            tasks,
            grid: WeekGrid::standard(),
            preferences: PreferenceMatrix::new(),
            rules: RuleSet::new(),
        }
    }

    /// Replaces the grid.
    pub fn with_grid(mut self, grid: WeekGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the preference scores.
    pub fn with_preferences(mut self, preferences: PreferenceMatrix) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }
}

/// The weekly shift scheduler.
///
/// # Example
///
/// ```
/// use shiftplan::scheduler::{ScheduleRequest, WeeklyScheduler};
/// use shiftplan::models::{Employee, RuleSet, Task};
///
/// let employees = vec![Employee::new(1, "Alice").with_skill("welding")];
/// let tasks = vec![Task::new(1, "Weld frame").with_required_skill("welding")];
/// let request = ScheduleRequest::new(employees, tasks)
///     .with_rules(RuleSet::new().with_max_shifts_per_week(5));
///
/// let schedule = WeeklyScheduler::new().schedule(&request).unwrap();
/// assert_eq!(schedule.entry_count(), 1);
/// assert!(schedule.is_fully_scheduled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduler {
    config: SolverConfig,
}

impl WeeklyScheduler {
    /// Creates a scheduler with the default solver configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the solver configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs one scheduling computation.
    ///
    /// Fails fast with all validation errors on malformed input.
    /// Otherwise always produces a schedule: when the gates leave no
    /// task placeable (or the effort bound fires before anything is
    /// placed), the result is the empty schedule with every task in
    /// the unscheduled list.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<Schedule, Vec<ValidationError>> {
        let model = ModelBuilder::new(&request.employees, &request.tasks, &request.grid)
            .with_preferences(&request.preferences)
            .with_rules(&request.rules)
            .build()?;

        let solution = solve(&model, &self.config);
        let schedule = extract(request, &model, &solution);

        debug!(
            "run complete: {} placed, {} unscheduled, objective {}",
            schedule.entry_count(),
            schedule.unscheduled.len(),
            solution.objective
        );
        Ok(schedule)
    }
}

/// Converts the winning assignment into caller-facing structures.
///
/// Entries are emitted day-major, then shift, then employee input
/// order, then task input order — the canonical output order. The
/// unscheduled list preserves the input task order. An empty selection
/// (nothing placeable, or effort exhausted before any placement)
/// degrades to the all-or-nothing fallback: no entries, every task
/// unscheduled.
fn extract(
    request: &ScheduleRequest,
    model: &AssignmentModel<'_>,
    solution: &Solution,
) -> Schedule {
    let mut selected: Vec<Candidate> = solution
        .selected
        .iter()
        .map(|&ci| model.candidates[ci])
        .collect();
    selected.sort_by_key(|c| (c.day, c.shift, c.employee, c.task));

    let mut schedule = Schedule::new();
    for c in selected {
        let employee = &request.employees[c.employee];
        let task = &request.tasks[c.task];
        schedule.add_entry(ScheduleEntry {
            day: request.grid.days[c.day],
            shift: request.grid.shifts[c.shift],
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            task_id: task.id,
            task_name: task.name.clone(),
        });
    }

    let placed = schedule.placed_task_ids();
    schedule.unscheduled = request
        .tasks
        .iter()
        .filter(|t| !placed.contains(&t.id))
        .cloned()
        .collect();

    schedule
}
