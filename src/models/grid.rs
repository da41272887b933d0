//! Time grid and assignment models.
//!
//! The grid is the draft timetable: a day × slot matrix where each cell
//! maps `"branch-section"` keys to placed assignments. Cells are addressed
//! by `(day_idx, slot_idx)` index pairs internally; `draft()` exports the
//! nested `day → slot_start → section → assignment` map consumed by the
//! persistence layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{SlotConfig, TimetableConfig};

/// A placed session occupying one grid cell.
///
/// Multi-period sessions write one assignment per covered slot, numbered
/// by `position_in_block` (1-based) out of `block_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Subject taught in this cell.
    pub subject_code: String,
    /// Faculty teaching it.
    pub faculty_id: String,
    /// Room hosting it.
    pub room_id: String,
    /// 1-based position within the consecutive block.
    pub position_in_block: usize,
    /// Total periods in the block (1 for a plain lecture).
    pub block_size: usize,
}

/// The draft timetable grid.
///
/// Built empty from a [`TimetableConfig`]; the scheduler fills cells as
/// placements commit. Absent cell entries are empty cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeGrid {
    days: Vec<String>,
    slots: Vec<SlotConfig>,
    sections: Vec<String>,
    /// Day-major: cell `(day, slot)` lives at `day * slots.len() + slot`.
    cells: Vec<HashMap<String, Assignment>>,
}

impl TimeGrid {
    /// Builds an empty grid from a configuration.
    ///
    /// Every `(day, slot, section)` cell starts empty. A configuration
    /// with no non-break slots builds fine — it just has no placeable
    /// cells, and generation against it exhausts every retry.
    pub fn build(config: &TimetableConfig) -> Self {
        let cell_count = config.days.len() * config.slots.len();
        Self {
            days: config.days.clone(),
            slots: config.slots.clone(),
            sections: config.section_keys(),
            cells: vec![HashMap::new(); cell_count],
        }
    }

    /// Day names, in week order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Slot configs, in day order.
    pub fn slots(&self) -> &[SlotConfig] {
        &self.slots
    }

    /// All `"branch-section"` keys.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    #[inline]
    fn cell_index(&self, day_idx: usize, slot_idx: usize) -> usize {
        day_idx * self.slots.len() + slot_idx
    }

    /// The assignment in a cell, if any.
    pub fn get(&self, day_idx: usize, slot_idx: usize, section_key: &str) -> Option<&Assignment> {
        self.cells[self.cell_index(day_idx, slot_idx)].get(section_key)
    }

    /// Whether a cell is empty.
    pub fn is_free(&self, day_idx: usize, slot_idx: usize, section_key: &str) -> bool {
        self.get(day_idx, slot_idx, section_key).is_none()
    }

    /// Writes an assignment into a cell, replacing any previous content.
    pub fn place(
        &mut self,
        day_idx: usize,
        slot_idx: usize,
        section_key: &str,
        assignment: Assignment,
    ) {
        let idx = self.cell_index(day_idx, slot_idx);
        self.cells[idx].insert(section_key.to_string(), assignment);
    }

    /// Assignments in one `(day, slot)` cell, as `(section_key, assignment)`.
    pub fn assignments_at(
        &self,
        day_idx: usize,
        slot_idx: usize,
    ) -> impl Iterator<Item = (&str, &Assignment)> + '_ {
        self.cells[self.cell_index(day_idx, slot_idx)]
            .iter()
            .map(|(section, a)| (section.as_str(), a))
    }

    /// Total assignments across all cells.
    pub fn assignment_count(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }

    /// Iterates all assignments as `(day_idx, slot_idx, section_key, assignment)`.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, usize, &str, &Assignment)> + '_ {
        let per_day = self.slots.len();
        self.cells.iter().enumerate().flat_map(move |(i, cell)| {
            cell.iter()
                .map(move |(section, a)| (i / per_day, i % per_day, section.as_str(), a))
        })
    }

    /// Exports the nested `day → slot_start → section → assignment` map.
    ///
    /// Empty cells appear explicitly as `None` (`null` in JSON), so the
    /// consumer sees the full grid shape, not just the filled cells.
    pub fn draft(&self) -> BTreeMap<String, BTreeMap<String, BTreeMap<String, Option<Assignment>>>> {
        let mut out = BTreeMap::new();
        for (day_idx, day) in self.days.iter().enumerate() {
            let mut day_map = BTreeMap::new();
            for (slot_idx, slot) in self.slots.iter().enumerate() {
                let mut slot_map = BTreeMap::new();
                for section in &self.sections {
                    slot_map.insert(
                        section.clone(),
                        self.get(day_idx, slot_idx, section).cloned(),
                    );
                }
                day_map.insert(slot.start.clone(), slot_map);
            }
            out.insert(day.clone(), day_map);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotConfig;

    fn sample_config() -> TimetableConfig {
        TimetableConfig::new()
            .with_days(vec!["Monday".into(), "Tuesday".into()])
            .with_slot(SlotConfig::lecture("09:00", "10:00"))
            .with_slot(SlotConfig::break_period("10:00", "10:30"))
            .with_slot(SlotConfig::lecture("10:30", "11:30"))
            .with_branch("CSE", vec!["A".into(), "B".into()])
    }

    fn sample_assignment() -> Assignment {
        Assignment {
            subject_code: "CS301".into(),
            faculty_id: "F001".into(),
            room_id: "LH-1".into(),
            position_in_block: 1,
            block_size: 1,
        }
    }

    #[test]
    fn test_build_empty() {
        let grid = TimeGrid::build(&sample_config());
        assert_eq!(grid.days().len(), 2);
        assert_eq!(grid.slots().len(), 3);
        assert_eq!(grid.sections(), ["CSE-A", "CSE-B"]);
        assert_eq!(grid.assignment_count(), 0);
        assert!(grid.is_free(0, 0, "CSE-A"));
    }

    #[test]
    fn test_place_and_get() {
        let mut grid = TimeGrid::build(&sample_config());
        grid.place(1, 2, "CSE-B", sample_assignment());

        assert!(grid.is_free(1, 2, "CSE-A"));
        assert!(!grid.is_free(1, 2, "CSE-B"));
        let a = grid.get(1, 2, "CSE-B").unwrap();
        assert_eq!(a.subject_code, "CS301");
        assert_eq!(grid.assignment_count(), 1);
    }

    #[test]
    fn test_assignments_iterator() {
        let mut grid = TimeGrid::build(&sample_config());
        grid.place(0, 0, "CSE-A", sample_assignment());
        grid.place(1, 2, "CSE-B", sample_assignment());

        let mut placed: Vec<(usize, usize, String)> = grid
            .assignments()
            .map(|(d, s, sec, _)| (d, s, sec.to_string()))
            .collect();
        placed.sort();
        assert_eq!(placed, vec![(0, 0, "CSE-A".into()), (1, 2, "CSE-B".into())]);
    }

    #[test]
    fn test_assignments_at_cell() {
        let mut grid = TimeGrid::build(&sample_config());
        grid.place(0, 0, "CSE-A", sample_assignment());

        let hit = grid
            .assignments_at(0, 0)
            .find(|(_, a)| a.faculty_id == "F001");
        assert_eq!(hit.map(|(section, _)| section), Some("CSE-A"));
        assert_eq!(grid.assignments_at(0, 2).count(), 0);
    }

    #[test]
    fn test_draft_shape() {
        let mut grid = TimeGrid::build(&sample_config());
        grid.place(0, 0, "CSE-A", sample_assignment());

        let draft = grid.draft();
        assert_eq!(draft.len(), 2);
        let monday = &draft["Monday"];
        assert_eq!(monday.len(), 3);
        assert!(monday["09:00"]["CSE-A"].is_some());
        assert!(monday["09:00"]["CSE-B"].is_none());
        assert!(monday["10:30"]["CSE-A"].is_none());
    }

    #[test]
    fn test_draft_serializes_empty_as_null() {
        let grid = TimeGrid::build(&sample_config());
        let json = serde_json::to_value(grid.draft()).unwrap();
        assert!(json["Monday"]["09:00"]["CSE-A"].is_null());
    }
}
