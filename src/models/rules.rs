//! Business rule set.
//!
//! Rules are read-only configuration passed into each scheduling run —
//! never process-global state, so concurrent runs cannot observe each
//! other's rule changes mid-computation.
//!
//! Currently one rule exists: the weekly shift cap per employee.

use serde::{Deserialize, Serialize};

use super::WeekGrid;

/// Per-run scheduling rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Maximum shifts one employee may work per week.
    ///
    /// `None` means uncapped, which resolves to the grid's slot count.
    /// A cap of 0 is legal and yields an empty schedule.
    pub max_shifts_per_week: Option<u32>,
}

impl RuleSet {
    /// Creates an unconstrained rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts_per_week(mut self, max: u32) -> Self {
        self.max_shifts_per_week = Some(max);
        self
    }

    /// Resolves the effective weekly cap against a grid.
    ///
    /// Unset caps default to the grid's slot count (one task per slot
    /// is already the tightest structural bound).
    pub fn effective_max_shifts(&self, grid: &WeekGrid) -> u32 {
        self.max_shifts_per_week
            .unwrap_or(grid.slot_count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap_is_slot_count() {
        let rules = RuleSet::new();
        let grid = WeekGrid::standard();
        assert_eq!(rules.effective_max_shifts(&grid), 14);
    }

    #[test]
    fn test_explicit_cap() {
        let rules = RuleSet::new().with_max_shifts_per_week(5);
        let grid = WeekGrid::standard();
        assert_eq!(rules.effective_max_shifts(&grid), 5);
    }

    #[test]
    fn test_zero_cap_allowed() {
        let rules = RuleSet::new().with_max_shifts_per_week(0);
        let grid = WeekGrid::standard();
        assert_eq!(rules.effective_max_shifts(&grid), 0);
    }
}
