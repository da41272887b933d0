//! Pre-flight validation for generation requests.
//!
//! Checks structural integrity of the configuration, catalogs, and
//! demand before generation. Detects:
//! - Empty configuration (no days, no slots)
//! - Duplicate faculty/subject/room ids
//! - Branches without a section list
//! - Allocation requests referencing unknown catalog entries
//!
//! Validation is optional fail-fast for callers: the engine itself
//! tolerates unknown references (it logs them as per-request fatal
//! rejections and continues) and only hard-fails on an empty
//! configuration.

use std::collections::HashSet;

use crate::scheduler::GenerationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The day or slot list is empty.
    EmptyConfiguration,
    /// Two catalog entries share the same id.
    DuplicateId,
    /// A branch has no entry in `sections_per_branch`.
    MissingSections,
    /// An allocation references an unknown subject or faculty.
    UnknownReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request.
///
/// Collects every detected issue rather than stopping at the first.
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.config.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyConfiguration,
            "Configuration has no days",
        ));
    }
    if request.config.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyConfiguration,
            "Configuration has no slots",
        ));
    }

    for branch in &request.config.branches {
        if !request.config.sections_per_branch.contains_key(branch) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSections,
                format!("Branch '{branch}' has no section list"),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in &request.faculties {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty id: {}", f.id),
            ));
        }
    }

    let mut subject_codes = HashSet::new();
    for s in &request.subjects {
        if !subject_codes.insert(s.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject code: {}", s.code),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &request.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room id: {}", r.id),
            ));
        }
    }

    for alloc in &request.allocations {
        if !subject_codes.contains(alloc.subject_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Allocation for {} references unknown subject '{}'",
                    alloc.section_key(),
                    alloc.subject_code
                ),
            ));
        }
        if !faculty_ids.contains(alloc.faculty_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!(
                    "Allocation for {} references unknown faculty '{}'",
                    alloc.section_key(),
                    alloc.faculty_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllocationRequest, Faculty, Room, SlotConfig, Subject, TimetableConfig};

    fn valid_request() -> GenerationRequest {
        let config = TimetableConfig::new()
            .with_slot(SlotConfig::lecture("09:00", "10:00"))
            .with_branch("CSE", vec!["A".into()]);

        GenerationRequest::new(config)
            .with_subject(Subject::lecture("CS101"))
            .with_faculty(Faculty::new("F001"))
            .with_room(Room::lecture_hall("LH-1"))
            .with_allocation(AllocationRequest::new("CS101", "F001", "CSE", "A", 2))
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_empty_configuration() {
        let request = GenerationRequest::new(TimetableConfig::new().with_days(vec![]));
        let errors = validate_request(&request).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyConfiguration)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_ids() {
        let mut request = valid_request();
        request.faculties.push(Faculty::new("F001"));
        request.subjects.push(Subject::lecture("CS101"));
        request.rooms.push(Room::lab("LH-1"));

        let errors = validate_request(&request).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
                .count(),
            3
        );
    }

    #[test]
    fn test_missing_sections() {
        let mut request = valid_request();
        request.config.branches.push("ECE".into());

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingSections));
    }

    #[test]
    fn test_unknown_references() {
        let request =
            valid_request().with_allocation(AllocationRequest::new("GHOST", "NOBODY", "CSE", "A", 1));

        let errors = validate_request(&request).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::UnknownReference)
                .count(),
            2
        );
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut request = valid_request();
        request.faculties.push(Faculty::new("F001"));
        request.config.branches.push("ECE".into());

        let errors = validate_request(&request).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
