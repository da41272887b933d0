//! Mutable resource indices for one generation call.
//!
//! Tracks faculty workload, faculty and room slot-occupancy, and
//! per-section subject totals. Occupancy is keyed by `(day_idx, slot_idx)`
//! index pairs for O(1) lookups. All indices are created fresh per call
//! and updated only through [`ResourceTrackers::commit`], in lock-step
//! with the grid write.

use std::collections::{HashMap, HashSet};

/// Per-call occupancy and workload indices.
#[derive(Debug, Clone, Default)]
pub struct ResourceTrackers {
    /// faculty id → day idx → assigned periods that day.
    faculty_daily: HashMap<String, HashMap<usize, usize>>,
    /// faculty id → assigned periods this week.
    faculty_weekly: HashMap<String, usize>,
    /// faculty id → occupied (day idx, slot idx) cells across all sections.
    faculty_busy: HashMap<String, HashSet<(usize, usize)>>,
    /// room id → occupied (day idx, slot idx) cells.
    room_busy: HashMap<String, HashSet<(usize, usize)>>,
    /// (section key, subject code) → periods placed.
    section_subject: HashMap<(String, String), usize>,
}

impl ResourceTrackers {
    /// Creates empty trackers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Periods assigned to a faculty on a day.
    pub fn daily_load(&self, faculty_id: &str, day_idx: usize) -> usize {
        self.faculty_daily
            .get(faculty_id)
            .and_then(|days| days.get(&day_idx))
            .copied()
            .unwrap_or(0)
    }

    /// Periods assigned to a faculty this week.
    pub fn weekly_load(&self, faculty_id: &str) -> usize {
        self.faculty_weekly.get(faculty_id).copied().unwrap_or(0)
    }

    /// Whether a faculty already teaches somewhere at a cell.
    pub fn faculty_busy_at(&self, faculty_id: &str, day_idx: usize, slot_idx: usize) -> bool {
        self.faculty_busy
            .get(faculty_id)
            .is_some_and(|cells| cells.contains(&(day_idx, slot_idx)))
    }

    /// Whether a room is occupied at a cell.
    pub fn room_busy_at(&self, room_id: &str, day_idx: usize, slot_idx: usize) -> bool {
        self.room_busy
            .get(room_id)
            .is_some_and(|cells| cells.contains(&(day_idx, slot_idx)))
    }

    /// Periods placed so far for a subject in a section.
    pub fn placed_periods(&self, section_key: &str, subject_code: &str) -> usize {
        self.section_subject
            .get(&(section_key.to_string(), subject_code.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Registers a committed placement covering `window` slots on a day.
    ///
    /// Increments faculty daily/weekly counters by the window length and
    /// marks the faculty and room occupied at every window cell.
    pub fn commit(
        &mut self,
        faculty_id: &str,
        room_id: &str,
        section_key: &str,
        subject_code: &str,
        day_idx: usize,
        window: &[usize],
    ) {
        let faculty_cells = self.faculty_busy.entry(faculty_id.to_string()).or_default();
        let room_cells = self.room_busy.entry(room_id.to_string()).or_default();
        for &slot_idx in window {
            faculty_cells.insert((day_idx, slot_idx));
            room_cells.insert((day_idx, slot_idx));
        }

        *self
            .faculty_daily
            .entry(faculty_id.to_string())
            .or_default()
            .entry(day_idx)
            .or_insert(0) += window.len();
        *self.faculty_weekly.entry(faculty_id.to_string()).or_insert(0) += window.len();
        *self
            .section_subject
            .entry((section_key.to_string(), subject_code.to_string()))
            .or_insert(0) += window.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trackers() {
        let t = ResourceTrackers::new();
        assert_eq!(t.daily_load("F001", 0), 0);
        assert_eq!(t.weekly_load("F001"), 0);
        assert!(!t.faculty_busy_at("F001", 0, 0));
        assert!(!t.room_busy_at("LH-1", 0, 0));
        assert_eq!(t.placed_periods("CSE-A", "CS301"), 0);
    }

    #[test]
    fn test_commit_updates_all_indices() {
        let mut t = ResourceTrackers::new();
        t.commit("F001", "LAB-1", "CSE-A", "CS301L", 0, &[1, 2]);

        assert_eq!(t.daily_load("F001", 0), 2);
        assert_eq!(t.daily_load("F001", 1), 0);
        assert_eq!(t.weekly_load("F001"), 2);
        assert!(t.faculty_busy_at("F001", 0, 1));
        assert!(t.faculty_busy_at("F001", 0, 2));
        assert!(!t.faculty_busy_at("F001", 0, 3));
        assert!(t.room_busy_at("LAB-1", 0, 1));
        assert!(!t.room_busy_at("LAB-1", 1, 1));
        assert_eq!(t.placed_periods("CSE-A", "CS301L"), 2);
    }

    #[test]
    fn test_commits_accumulate() {
        let mut t = ResourceTrackers::new();
        t.commit("F001", "LH-1", "CSE-A", "CS301", 0, &[0]);
        t.commit("F001", "LH-2", "CSE-B", "CS302", 1, &[0]);
        t.commit("F001", "LH-1", "CSE-A", "CS301", 0, &[4]);

        assert_eq!(t.daily_load("F001", 0), 2);
        assert_eq!(t.daily_load("F001", 1), 1);
        assert_eq!(t.weekly_load("F001"), 3);
        assert_eq!(t.placed_periods("CSE-A", "CS301"), 2);
        assert_eq!(t.placed_periods("CSE-B", "CS302"), 1);
    }
}
