//! Branch-and-bound search over the assignment model.
//!
//! # Algorithm
//!
//! Depth-first search branching one task per level: each node either
//! places the task on one of its surviving candidates or leaves it
//! unscheduled. The empty assignment satisfies every constraint, so it
//! seeds the incumbent and the search is a pure maximization over
//! feasible completions.
//!
//! Pruning uses an admissible bound: the suffix sum of each remaining
//! task's best candidate weight, ignoring slot and cap contention. A
//! subtree is cut when `current + bound <= incumbent`.
//!
//! # Determinism
//!
//! Branch orders are fixed: tasks best-weight-first (index ascending on
//! ties), candidates weight-descending then grid order. The incumbent
//! is replaced only on strict improvement, so the first optimum found
//! under this order is the one returned — stable across runs.
//!
//! # Effort Bound
//!
//! `SolverConfig::node_limit` caps explored nodes. On exhaustion the
//! best incumbent so far is returned with a diagnostic status; callers
//! treat it identically to a proven optimum.
//!
//! # Reference
//! Wolsey (1998), "Integer Programming", Ch. 7: Branch and Bound

use log::{debug, trace};

use super::model::AssignmentModel;

/// Search effort configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum search nodes to explore before returning the incumbent.
    pub node_limit: u64,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node limit.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_limit: 1_000_000,
        }
    }
}

/// How the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search space was exhausted; the solution is optimal.
    Optimal,
    /// The node limit was hit; the solution is the best incumbent.
    NodeLimitReached,
}

/// The winning assignment.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Termination condition (diagnostic; both variants carry a valid
    /// constraint-satisfying assignment).
    pub status: SolveStatus,
    /// Achieved objective value.
    pub objective: i64,
    /// Selected candidate indexes, at most one per task.
    pub selected: Vec<usize>,
}

impl Solution {
    /// Whether optimality was proven.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Finds the maximum-objective feasible assignment.
pub fn solve(model: &AssignmentModel<'_>, config: &SolverConfig) -> Solution {
    // Branch only on tasks with at least one surviving candidate;
    // fully gated tasks can only be unscheduled.
    let mut branch_order: Vec<usize> = (0..model.tasks.len())
        .filter(|&t| !model.by_task[t].is_empty())
        .collect();
    branch_order.sort_by(|&a, &b| {
        model
            .best_weight(b)
            .cmp(&model.best_weight(a))
            .then(a.cmp(&b))
    });

    // Candidates per task: weight descending, then grid order.
    let ordered: Vec<Vec<usize>> = (0..model.tasks.len())
        .map(|t| {
            let mut cs = model.by_task[t].clone();
            cs.sort_by(|&a, &b| {
                let (ca, cb) = (&model.candidates[a], &model.candidates[b]);
                cb.weight
                    .cmp(&ca.weight)
                    .then(ca.day.cmp(&cb.day))
                    .then(ca.shift.cmp(&cb.shift))
                    .then(ca.employee.cmp(&cb.employee))
            });
            cs
        })
        .collect();

    // suffix_bound[i] = best conceivable gain from tasks i.. onwards.
    let mut suffix_bound = vec![0i64; branch_order.len() + 1];
    for i in (0..branch_order.len()).rev() {
        suffix_bound[i] = suffix_bound[i + 1] + model.best_weight(branch_order[i]);
    }

    let mut search = Search {
        model,
        branch_order,
        ordered,
        suffix_bound,
        slot_used: vec![false; model.employees.len() * model.grid.slot_count()],
        shifts_used: vec![0u32; model.employees.len()],
        chosen: Vec::new(),
        objective: 0,
        nodes: 0,
        node_limit: config.node_limit,
        limit_hit: false,
        best_objective: 0,
        best_selected: Vec::new(),
    };
    search.dfs(0);

    let status = if search.limit_hit {
        SolveStatus::NodeLimitReached
    } else {
        SolveStatus::Optimal
    };
    debug!(
        "search finished: status={:?} nodes={} objective={} placed={}",
        status,
        search.nodes,
        search.best_objective,
        search.best_selected.len()
    );

    Solution {
        status,
        objective: search.best_objective,
        selected: search.best_selected,
    }
}

struct Search<'m, 'a> {
    model: &'m AssignmentModel<'a>,
    branch_order: Vec<usize>,
    ordered: Vec<Vec<usize>>,
    suffix_bound: Vec<i64>,
    /// Occupancy per (employee, slot), flat-indexed.
    slot_used: Vec<bool>,
    shifts_used: Vec<u32>,
    chosen: Vec<usize>,
    objective: i64,
    nodes: u64,
    node_limit: u64,
    limit_hit: bool,
    best_objective: i64,
    best_selected: Vec<usize>,
}

impl Search<'_, '_> {
    fn dfs(&mut self, depth: usize) {
        self.nodes += 1;
        if self.nodes > self.node_limit {
            self.limit_hit = true;
            return;
        }

        if depth == self.branch_order.len() {
            if self.objective > self.best_objective {
                self.best_objective = self.objective;
                self.best_selected = self.chosen.clone();
                trace!(
                    "incumbent improved: objective={} placed={}",
                    self.best_objective,
                    self.best_selected.len()
                );
            }
            return;
        }

        // No completion of this prefix can beat the incumbent.
        if self.objective + self.suffix_bound[depth] <= self.best_objective {
            return;
        }

        let task = self.branch_order[depth];
        let slots_per_employee = self.model.grid.slot_count();

        for i in 0..self.ordered[task].len() {
            let ci = self.ordered[task][i];
            let c = self.model.candidates[ci];
            let slot = c.employee * slots_per_employee + self.model.grid.slot_index(c.day, c.shift);

            if self.slot_used[slot] || self.shifts_used[c.employee] >= self.model.max_shifts {
                continue;
            }

            self.slot_used[slot] = true;
            self.shifts_used[c.employee] += 1;
            self.objective += c.weight;
            self.chosen.push(ci);

            self.dfs(depth + 1);

            self.chosen.pop();
            self.objective -= c.weight;
            self.shifts_used[c.employee] -= 1;
            self.slot_used[slot] = false;

            if self.limit_hit {
                return;
            }
        }

        // Leave the task unscheduled.
        self.dfs(depth + 1);
    }
}
