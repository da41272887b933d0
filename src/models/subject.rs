//! Subject model.

use serde::{Deserialize, Serialize};

/// A subject taught to sections.
///
/// Lab subjects demand a block of consecutive periods per session
/// (`lab_periods`, typically 2); lectures demand `lecture_periods`
/// (typically 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject code, e.g. `"CS301"`.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Whether sessions must be hosted in a lab room.
    pub is_lab: bool,
    /// Consecutive periods per lecture session.
    pub lecture_periods: usize,
    /// Consecutive periods per lab session.
    pub lab_periods: usize,
    /// Minimum distinct sessions per week; 0 disables the starvation check.
    pub required_frequency_per_week: usize,
}

impl Subject {
    /// Creates a lecture subject (1 period per session).
    pub fn lecture(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            is_lab: false,
            lecture_periods: 1,
            lab_periods: 2,
            required_frequency_per_week: 0,
        }
    }

    /// Creates a lab subject (2 consecutive periods per session).
    pub fn lab(code: impl Into<String>) -> Self {
        Self {
            is_lab: true,
            ..Self::lecture(code)
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets periods per lecture session.
    pub fn with_lecture_periods(mut self, periods: usize) -> Self {
        self.lecture_periods = periods;
        self
    }

    /// Sets consecutive periods per lab session.
    pub fn with_lab_periods(mut self, periods: usize) -> Self {
        self.lab_periods = periods;
        self
    }

    /// Sets the required weekly frequency.
    pub fn with_frequency(mut self, per_week: usize) -> Self {
        self.required_frequency_per_week = per_week;
        self
    }

    /// Consecutive periods one session of this subject occupies.
    #[inline]
    pub fn consecutive_periods(&self) -> usize {
        if self.is_lab {
            self.lab_periods
        } else {
            self.lecture_periods
        }
    }

    /// Display name, falling back to the code.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}
