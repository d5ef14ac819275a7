//! Learned preference scores.
//!
//! The preference matrix records how often a planner has manually
//! reassigned a task to a given employee. Each reassignment bumps the
//! pair's score by one; the solver adds the score to that pairing's
//! objective weight, nudging future runs toward it.
//!
//! Absent pairs implicitly score 0. Entries referencing employees or
//! tasks that no longer exist are harmless — the model builder only
//! looks up pairs that are present in the current snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{EmployeeId, TaskId};

/// Sparse (employee, task) → score matrix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceMatrix {
    scores: HashMap<(EmployeeId, TaskId), u32>,
}

impl PreferenceMatrix {
    /// Creates an empty matrix (all pairs score 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a pair with an explicit score.
    pub fn with_score(mut self, employee: EmployeeId, task: TaskId, score: u32) -> Self {
        self.scores.insert((employee, task), score);
        self
    }

    /// Score for a pair; 0 when absent.
    pub fn score(&self, employee: EmployeeId, task: TaskId) -> u32 {
        self.scores.get(&(employee, task)).copied().unwrap_or(0)
    }

    /// Records one manual reassignment of `task` to `employee`.
    ///
    /// Increments the pair's score by 1, creating it at 1 if absent.
    /// Returns the new score.
    pub fn learn(&mut self, employee: EmployeeId, task: TaskId) -> u32 {
        let score = self.scores.entry((employee, task)).or_insert(0);
        *score += 1;
        *score
    }

    /// Number of pairs with a recorded score.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no scores have been recorded.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_pair_scores_zero() {
        let prefs = PreferenceMatrix::new();
        assert_eq!(prefs.score(1, 1), 0);
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_learn_creates_at_one() {
        let mut prefs = PreferenceMatrix::new();
        assert_eq!(prefs.learn(1, 5), 1);
        assert_eq!(prefs.score(1, 5), 1);
        assert_eq!(prefs.len(), 1);
    }

    #[test]
    fn test_learn_increments() {
        let mut prefs = PreferenceMatrix::new();
        prefs.learn(1, 5);
        prefs.learn(1, 5);
        assert_eq!(prefs.learn(1, 5), 3);
        assert_eq!(prefs.score(1, 5), 3);
        // Other pairs untouched
        assert_eq!(prefs.score(1, 6), 0);
        assert_eq!(prefs.score(2, 5), 0);
    }

    #[test]
    fn test_with_score_seed() {
        let prefs = PreferenceMatrix::new().with_score(3, 9, 4);
        assert_eq!(prefs.score(3, 9), 4);
    }
}
