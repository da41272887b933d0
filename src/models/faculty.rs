//! Faculty model.
//!
//! Availability is a day → list of exact `"HH:MM-HH:MM"` range strings,
//! matched literally against slot ranges — not interval containment. A
//! range that does not textually equal a slot's `"start-end"` string makes
//! that slot unavailable, so availability data must be entered against the
//! same grid the timetable is generated for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier, e.g. an employee id.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Day → exact slot-range strings the faculty can teach in.
    /// A missing or empty day means unavailable all that day.
    pub availability: HashMap<String, Vec<String>>,
    /// Maximum periods assignable on any single day.
    pub max_daily_periods: usize,
    /// Maximum periods assignable across the week.
    pub max_weekly_workload: usize,
}

impl Faculty {
    /// Creates a faculty member with no availability and uncapped workload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: HashMap::new(),
            max_daily_periods: usize::MAX,
            max_weekly_workload: usize::MAX,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declares availability on a day, as exact slot-range strings.
    pub fn with_availability(mut self, day: impl Into<String>, ranges: Vec<String>) -> Self {
        self.availability.insert(day.into(), ranges);
        self
    }

    /// Sets the daily period cap.
    pub fn with_daily_cap(mut self, periods: usize) -> Self {
        self.max_daily_periods = periods;
        self
    }

    /// Sets the weekly workload cap.
    pub fn with_weekly_cap(mut self, periods: usize) -> Self {
        self.max_weekly_workload = periods;
        self
    }

    /// Availability ranges for a day; `None` or empty means unavailable.
    pub fn availability_on(&self, day: &str) -> Option<&Vec<String>> {
        self.availability.get(day)
    }

    /// Whether a specific slot-range string is available on a day.
    pub fn is_available(&self, day: &str, range: &str) -> bool {
        self.availability
            .get(day)
            .is_some_and(|ranges| ranges.iter().any(|r| r == range))
    }

    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
