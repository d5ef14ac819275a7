//! Weekly day/shift grid.
//!
//! The planning horizon is a fixed lattice of 7 day codes × 2 shift
//! codes — 14 slots, identical across runs. Days and shifts are closed
//! enums; the grid only fixes their order.
//!
//! # Slot Order
//! Grid iteration is day-major, then shift: (Mon, Morning),
//! (Mon, Evening), (Tue, Morning), … This order is canonical — schedule
//! output and solver variable layout both follow it.

use serde::{Deserialize, Serialize};

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Canonical three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Parses a canonical code ("Mon".."Sun").
    ///
    /// Returns `None` for anything else — unknown codes in external
    /// data are skipped, not errors.
    pub fn from_code(code: &str) -> Option<Day> {
        Day::ALL.iter().copied().find(|d| d.code() == code)
    }
}

/// A shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    /// All shifts in within-day order.
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Evening];

    /// Canonical code.
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
        }
    }
}

/// The ordered day × shift grid for one week.
///
/// Holds the day and shift sequences in their fixed order. The standard
/// grid is the full week with both shifts; narrower grids are accepted
/// for testing and partial-week planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    /// Days in planning order.
    pub days: Vec<Day>,
    /// Shifts in within-day order.
    pub shifts: Vec<Shift>,
}

impl WeekGrid {
    /// Creates a grid from explicit day and shift sequences.
    pub fn new(days: Vec<Day>, shifts: Vec<Shift>) -> Self {
        Self { days, shifts }
    }

    /// The canonical 7-day, 2-shift grid.
    pub fn standard() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            shifts: Shift::ALL.to_vec(),
        }
    }

    /// Number of slots (days × shifts).
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.shifts.len()
    }

    /// Iterates slots day-major, then shift.
    pub fn slots(&self) -> impl Iterator<Item = (Day, Shift)> + '_ {
        self.days
            .iter()
            .flat_map(move |&day| self.shifts.iter().map(move |&shift| (day, shift)))
    }

    /// Flat slot index for (day position, shift position).
    #[inline]
    pub fn slot_index(&self, day_idx: usize, shift_idx: usize) -> usize {
        day_idx * self.shifts.len() + shift_idx
    }
}

impl Default for WeekGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_codes_roundtrip() {
        for day in Day::ALL {
            assert_eq!(Day::from_code(day.code()), Some(day));
        }
        assert_eq!(Day::from_code("Funday"), None);
        assert_eq!(Day::from_code(""), None);
    }

    #[test]
    fn test_standard_grid() {
        let grid = WeekGrid::standard();
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.shifts.len(), 2);
        assert_eq!(grid.slot_count(), 14);
    }

    #[test]
    fn test_slot_order_day_major() {
        let grid = WeekGrid::standard();
        let slots: Vec<(Day, Shift)> = grid.slots().collect();
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0], (Day::Mon, Shift::Morning));
        assert_eq!(slots[1], (Day::Mon, Shift::Evening));
        assert_eq!(slots[2], (Day::Tue, Shift::Morning));
        assert_eq!(slots[13], (Day::Sun, Shift::Evening));
    }

    #[test]
    fn test_slot_index() {
        let grid = WeekGrid::standard();
        assert_eq!(grid.slot_index(0, 0), 0);
        assert_eq!(grid.slot_index(0, 1), 1);
        assert_eq!(grid.slot_index(1, 0), 2);
        assert_eq!(grid.slot_index(6, 1), 13);
    }

    #[test]
    fn test_custom_grid() {
        let grid = WeekGrid::new(vec![Day::Mon, Day::Tue], vec![Shift::Morning]);
        assert_eq!(grid.slot_count(), 2);
        let slots: Vec<(Day, Shift)> = grid.slots().collect();
        assert_eq!(slots, vec![(Day::Mon, Shift::Morning), (Day::Tue, Shift::Morning)]);
    }
}
