//! Timetable configuration model.
//!
//! Describes the weekly grid shape: teaching days, ordered period slots
//! (lectures and breaks), and the branch → section layout. Slot times are
//! plain `"HH:MM"` strings; the engine never parses them — slots are
//! identified positionally, and the `"start-end"` range string is matched
//! literally against faculty availability.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Standard academic teaching days.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Slot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// A teachable period.
    Lecture,
    /// A break; nothing may be placed here, and no session may span it.
    Break,
}

/// One period slot within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Slot start, e.g. `"09:00"`.
    pub start: String,
    /// Slot end, e.g. `"10:00"`.
    pub end: String,
    /// Lecture or break.
    pub kind: SlotKind,
}

impl SlotConfig {
    /// Creates a lecture slot.
    pub fn lecture(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: SlotKind::Lecture,
        }
    }

    /// Creates a break slot.
    pub fn break_period(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: SlotKind::Break,
        }
    }

    /// Whether this slot is a break.
    #[inline]
    pub fn is_break(&self) -> bool {
        self.kind == SlotKind::Break
    }

    /// The `"start-end"` range string used for availability matching.
    pub fn range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Weekly grid configuration.
///
/// Days default to Monday through Friday. Sections are keyed per branch;
/// the grid addresses them as combined `"branch-section"` keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableConfig {
    /// Teaching days, in week order.
    pub days: Vec<String>,
    /// Ordered period slots shared by every day.
    pub slots: Vec<SlotConfig>,
    /// Branch identifiers, e.g. `"CSE"`.
    pub branches: Vec<String>,
    /// Sections per branch, e.g. `"CSE" → ["A", "B"]`.
    pub sections_per_branch: HashMap<String, Vec<String>>,
}

impl TimetableConfig {
    /// Creates a configuration with the standard academic week and no slots.
    pub fn new() -> Self {
        Self {
            days: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            slots: Vec::new(),
            branches: Vec::new(),
            sections_per_branch: HashMap::new(),
        }
    }

    /// Replaces the day list.
    pub fn with_days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    /// Appends a slot.
    pub fn with_slot(mut self, slot: SlotConfig) -> Self {
        self.slots.push(slot);
        self
    }

    /// Adds a branch with its sections.
    pub fn with_branch(mut self, branch: impl Into<String>, sections: Vec<String>) -> Self {
        let branch = branch.into();
        self.branches.push(branch.clone());
        self.sections_per_branch.insert(branch, sections);
        self
    }

    /// All `"branch-section"` keys, in branch order.
    pub fn section_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for branch in &self.branches {
            if let Some(sections) = self.sections_per_branch.get(branch) {
                for section in sections {
                    keys.push(format!("{branch}-{section}"));
                }
            }
        }
        keys
    }

    /// Indices of non-break slots, in day order.
    pub fn lecture_slot_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_break())
            .map(|(i, _)| i)
            .collect()
    }

    /// Rejects structurally unusable configurations.
    ///
    /// An empty day or slot list can never host a placement and is the one
    /// hard failure of generation. A grid whose slots are all breaks is
    /// accepted — every allocation will simply exhaust its retries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days.is_empty() {
            return Err(ConfigError::NoDays);
        }
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        Ok(())
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Malformed configuration, rejected before the generation loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The day list is empty.
    NoDays,
    /// The slot list is empty.
    NoSlots,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoDays => write!(f, "configuration has no days"),
            ConfigError::NoSlots => write!(f, "configuration has no slots"),
        }
    }
}

impl std::error::Error for ConfigError {}
