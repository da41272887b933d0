//! Allocation request model.

use serde::{Deserialize, Serialize};

/// One unit of weekly demand: a subject taught to a section by a faculty
/// member for a number of periods per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Subject code to place.
    pub subject_code: String,
    /// Faculty who teaches it.
    pub faculty_id: String,
    /// Target branch, e.g. `"CSE"`.
    pub branch: String,
    /// Target section within the branch, e.g. `"A"`.
    pub section: String,
    /// Total periods demanded per week.
    ///
    /// Divided by the subject's consecutive-period requirement to obtain
    /// the session count; the division truncates, so a remainder silently
    /// drops periods (legacy behavior, preserved).
    pub periods_per_week: usize,
}

impl AllocationRequest {
    /// Creates an allocation request.
    pub fn new(
        subject_code: impl Into<String>,
        faculty_id: impl Into<String>,
        branch: impl Into<String>,
        section: impl Into<String>,
        periods_per_week: usize,
    ) -> Self {
        Self {
            subject_code: subject_code.into(),
            faculty_id: faculty_id.into(),
            branch: branch.into(),
            section: section.into(),
            periods_per_week,
        }
    }

    /// The combined `"branch-section"` grid key this request targets.
    pub fn section_key(&self) -> String {
        format!("{}-{}", self.branch, self.section)
    }
}
