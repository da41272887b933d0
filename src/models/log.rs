//! Decision log models.
//!
//! Every accept and reject decision made during generation produces one
//! structured entry, forming an ordered audit trail the caller stores and
//! displays alongside the draft. Entries carry the legacy rule-name
//! strings (`Faculty_Clash_Detection`, …) so downstream consumers keep
//! working unchanged.

use serde::{Deserialize, Serialize};

use super::AllocationRequest;

/// Decision classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    /// A committed placement.
    Choice,
    /// A resource conflict or unmet requirement.
    Conflict,
    /// A candidate rejected by a hard constraint.
    Rejection,
}

/// The rule a decision entry traces back to.
///
/// Serializes to the exact legacy rule-name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "Slot_Assignment_Success")]
    SlotAssignmentSuccess,
    #[serde(rename = "Subject_NotFound")]
    SubjectNotFound,
    #[serde(rename = "Faculty_NotFound")]
    FacultyNotFound,
    #[serde(rename = "No_Lab_In_Last_Period")]
    NoLabInLastPeriod,
    #[serde(rename = "Break_Disruption")]
    BreakDisruption,
    #[serde(rename = "Section_Already_Occupied_Consecutive")]
    SectionAlreadyOccupiedConsecutive,
    #[serde(rename = "Faculty_Clash_Detection")]
    FacultyClashDetection,
    #[serde(rename = "Faculty_Availability_Validation")]
    FacultyAvailabilityValidation,
    #[serde(rename = "Max_Periods_Per_Faculty_Per_Day")]
    MaxPeriodsPerFacultyPerDay,
    #[serde(rename = "Max_Workload_Per_Faculty_Per_Week")]
    MaxWorkloadPerFacultyPerWeek,
    #[serde(rename = "Room_Allocation_Constraints")]
    RoomAllocationConstraints,
    #[serde(rename = "No_Available_Slot_Found")]
    NoAvailableSlotFound,
    #[serde(rename = "Subject_Frequency_Per_Week")]
    SubjectFrequencyPerWeek,
}

impl Rule {
    /// Entry priority: 1 success and faculty clash, 2 occupancy/availability,
    /// 3 break and daily-cap, 4 workload and room, 5 fatal.
    ///
    /// Clash conflicts report at priority 1, matching the legacy log
    /// output downstream consumers were built against.
    pub fn priority(&self) -> u8 {
        match self {
            Rule::SlotAssignmentSuccess | Rule::FacultyClashDetection => 1,
            Rule::SectionAlreadyOccupiedConsecutive
            | Rule::FacultyAvailabilityValidation
            | Rule::SubjectFrequencyPerWeek => 2,
            Rule::NoLabInLastPeriod | Rule::BreakDisruption | Rule::MaxPeriodsPerFacultyPerDay => 3,
            Rule::MaxWorkloadPerFacultyPerWeek | Rule::RoomAllocationConstraints => 4,
            Rule::SubjectNotFound | Rule::FacultyNotFound | Rule::NoAvailableSlotFound => 5,
        }
    }

    /// The log type this rule reports under.
    pub fn log_type(&self) -> LogType {
        match self {
            Rule::SlotAssignmentSuccess => LogType::Choice,
            Rule::FacultyClashDetection | Rule::SubjectFrequencyPerWeek => LogType::Conflict,
            _ => LogType::Rejection,
        }
    }

    /// The legacy rule-name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::SlotAssignmentSuccess => "Slot_Assignment_Success",
            Rule::SubjectNotFound => "Subject_NotFound",
            Rule::FacultyNotFound => "Faculty_NotFound",
            Rule::NoLabInLastPeriod => "No_Lab_In_Last_Period",
            Rule::BreakDisruption => "Break_Disruption",
            Rule::SectionAlreadyOccupiedConsecutive => "Section_Already_Occupied_Consecutive",
            Rule::FacultyClashDetection => "Faculty_Clash_Detection",
            Rule::FacultyAvailabilityValidation => "Faculty_Availability_Validation",
            Rule::MaxPeriodsPerFacultyPerDay => "Max_Periods_Per_Faculty_Per_Day",
            Rule::MaxWorkloadPerFacultyPerWeek => "Max_Workload_Per_Faculty_Per_Week",
            Rule::RoomAllocationConstraints => "Room_Allocation_Constraints",
            Rule::NoAvailableSlotFound => "No_Available_Slot_Found",
            Rule::SubjectFrequencyPerWeek => "Subject_Frequency_Per_Week",
        }
    }
}

/// The placement a decision was about.
///
/// Day, slot, and room are filled in as far as the decision got; a fatal
/// lookup failure has none of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDetails {
    /// Day under consideration, if one was chosen.
    pub day: Option<String>,
    /// Candidate start slot, if one was chosen.
    pub slot_start: Option<String>,
    /// Target branch.
    pub branch: String,
    /// Target section.
    pub section: String,
    /// Subject code of the request.
    pub subject_code: String,
    /// Faculty id of the request.
    pub faculty_id: String,
    /// Chosen room, on success.
    pub room_id: Option<String>,
    /// Start time of the slot the section was already occupying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_at: Option<String>,
    /// Section key hosting the clashing assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_slot: Option<String>,
    /// Start time of the clashing assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_time: Option<String>,
    /// Subject code of the clashing assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_subject: Option<String>,
    /// Time range the faculty marked unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_time: Option<String>,
}

/// Extra context a rejection can attach to its [`SlotDetails`].
///
/// Occupancy, clash, and availability decisions carry the specific
/// resource that blocked the candidate; other rules leave this empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotContext {
    /// Start time of the slot the section was already occupying.
    pub occupied_at: Option<String>,
    /// Section key hosting the clashing assignment.
    pub conflicting_slot: Option<String>,
    /// Start time of the clashing assignment.
    pub conflicting_time: Option<String>,
    /// Subject code of the clashing assignment.
    pub conflicting_subject: Option<String>,
    /// Time range the faculty marked unavailable.
    pub unavailable_time: Option<String>,
}

impl SlotContext {
    /// Merges this context into a details record.
    pub fn apply(self, mut details: SlotDetails) -> SlotDetails {
        details.occupied_at = self.occupied_at;
        details.conflicting_slot = self.conflicting_slot;
        details.conflicting_time = self.conflicting_time;
        details.conflicting_subject = self.conflicting_subject;
        details.unavailable_time = self.unavailable_time;
        details
    }
}

impl SlotDetails {
    /// Details for a request before any day/slot was chosen.
    pub fn for_request(request: &AllocationRequest) -> Self {
        Self {
            day: None,
            slot_start: None,
            branch: request.branch.clone(),
            section: request.section.clone(),
            subject_code: request.subject_code.clone(),
            faculty_id: request.faculty_id.clone(),
            room_id: None,
            occupied_at: None,
            conflicting_slot: None,
            conflicting_time: None,
            conflicting_subject: None,
            unavailable_time: None,
        }
    }

    /// Pins the details to a candidate day and start slot.
    pub fn at(mut self, day: impl Into<String>, slot_start: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self.slot_start = Some(slot_start.into());
        self
    }

    /// Records the chosen room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }
}

/// One entry in the decision trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    /// Choice, conflict, or rejection.
    pub log_type: LogType,
    /// The rule that produced this entry.
    #[serde(rename = "rule_name")]
    pub rule: Rule,
    /// The placement the decision was about.
    pub slot_details: SlotDetails,
    /// Human-readable explanation.
    pub explanation: String,
    /// 1 (routine) to 5 (fatal).
    pub priority: u8,
}

impl DecisionLogEntry {
    /// Creates an entry; log type and priority derive from the rule.
    pub fn new(rule: Rule, slot_details: SlotDetails, explanation: impl Into<String>) -> Self {
        Self {
            log_type: rule.log_type(),
            rule,
            slot_details,
            explanation: explanation.into(),
            priority: rule.priority(),
        }
    }
}

/// Ordered decision trail for one generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionLog {
    entries: Vec<DecisionLogEntry>,
}

impl DecisionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: DecisionLogEntry) {
        self.entries.push(entry);
    }

    /// All entries, in decision order.
    pub fn entries(&self) -> &[DecisionLogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries produced by a specific rule.
    pub fn entries_for_rule(&self, rule: Rule) -> Vec<&DecisionLogEntry> {
        self.entries.iter().filter(|e| e.rule == rule).collect()
    }

    /// Number of entries produced by a specific rule.
    pub fn count_for_rule(&self, rule: Rule) -> usize {
        self.entries.iter().filter(|e| e.rule == rule).count()
    }

    /// Committed placements.
    pub fn choices(&self) -> Vec<&DecisionLogEntry> {
        self.by_type(LogType::Choice)
    }

    /// Conflicts (faculty clashes, unmet frequency).
    pub fn conflicts(&self) -> Vec<&DecisionLogEntry> {
        self.by_type(LogType::Conflict)
    }

    /// Constraint rejections.
    pub fn rejections(&self) -> Vec<&DecisionLogEntry> {
        self.by_type(LogType::Rejection)
    }

    fn by_type(&self, log_type: LogType) -> Vec<&DecisionLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.log_type == log_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> SlotDetails {
        let request = AllocationRequest::new("CS301", "F001", "CSE", "A", 3);
        SlotDetails::for_request(&request)
    }

    #[test]
    fn test_entry_derives_type_and_priority() {
        let e = DecisionLogEntry::new(Rule::SlotAssignmentSuccess, sample_details(), "placed");
        assert_eq!(e.log_type, LogType::Choice);
        assert_eq!(e.priority, 1);

        let e = DecisionLogEntry::new(Rule::FacultyClashDetection, sample_details(), "clash");
        assert_eq!(e.log_type, LogType::Conflict);
        assert_eq!(e.priority, 1);

        let e = DecisionLogEntry::new(Rule::SubjectNotFound, sample_details(), "missing");
        assert_eq!(e.log_type, LogType::Rejection);
        assert_eq!(e.priority, 5);
    }

    #[test]
    fn test_slot_details_builder() {
        let d = sample_details().at("Monday", "09:00").with_room("LH-1");
        assert_eq!(d.day.as_deref(), Some("Monday"));
        assert_eq!(d.slot_start.as_deref(), Some("09:00"));
        assert_eq!(d.room_id.as_deref(), Some("LH-1"));
        assert_eq!(d.branch, "CSE");
    }

    #[test]
    fn test_log_queries() {
        let mut log = DecisionLog::new();
        log.push(DecisionLogEntry::new(
            Rule::BreakDisruption,
            sample_details(),
            "break",
        ));
        log.push(DecisionLogEntry::new(
            Rule::SlotAssignmentSuccess,
            sample_details(),
            "placed",
        ));
        log.push(DecisionLogEntry::new(
            Rule::FacultyClashDetection,
            sample_details(),
            "clash",
        ));

        assert_eq!(log.len(), 3);
        assert_eq!(log.choices().len(), 1);
        assert_eq!(log.conflicts().len(), 1);
        assert_eq!(log.rejections().len(), 1);
        assert_eq!(log.count_for_rule(Rule::BreakDisruption), 1);
        assert!(log.entries_for_rule(Rule::RoomAllocationConstraints).is_empty());
    }

    #[test]
    fn test_rule_name_serialization() {
        let e = DecisionLogEntry::new(Rule::FacultyClashDetection, sample_details(), "clash");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["rule_name"], "Faculty_Clash_Detection");
        assert_eq!(json["log_type"], "conflict");
        assert_eq!(json["priority"], 1);
    }

    #[test]
    fn test_clash_priority_matches_legacy_logs() {
        let e = DecisionLogEntry::new(Rule::FacultyClashDetection, sample_details(), "clash");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["priority"], 1);
        assert_eq!(Rule::FacultyClashDetection.priority(), 1);
    }

    #[test]
    fn test_context_fields_serialize_only_when_set() {
        let plain = serde_json::to_value(sample_details()).unwrap();
        assert!(plain.get("occupied_at").is_none());
        assert!(plain.get("conflicting_slot").is_none());
        assert!(plain.get("unavailable_time").is_none());

        let context = SlotContext {
            conflicting_slot: Some("CSE-B".to_string()),
            conflicting_time: Some("09:00".to_string()),
            conflicting_subject: Some("MA201".to_string()),
            ..Default::default()
        };
        let enriched = serde_json::to_value(context.apply(sample_details())).unwrap();
        assert_eq!(enriched["conflicting_slot"], "CSE-B");
        assert_eq!(enriched["conflicting_time"], "09:00");
        assert_eq!(enriched["conflicting_subject"], "MA201");
        assert!(enriched.get("occupied_at").is_none());
    }

    #[test]
    fn test_rule_as_str_matches_serde() {
        for rule in [
            Rule::SlotAssignmentSuccess,
            Rule::SubjectNotFound,
            Rule::NoAvailableSlotFound,
            Rule::SubjectFrequencyPerWeek,
        ] {
            let json = serde_json::to_value(rule).unwrap();
            assert_eq!(json, rule.as_str());
        }
    }
}
