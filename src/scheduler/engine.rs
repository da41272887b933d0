//! Randomized allocation engine.
//!
//! Walks the allocation queue, attempting randomized placements within a
//! bounded retry budget and committing the first feasible candidate per
//! session. Every decision — accepted or rejected — lands in the decision
//! log, so a draft is always explainable after the fact.
//!
//! # Algorithm
//!
//! For each allocation request:
//! 1. Resolve subject and faculty; an unknown code is a fatal, priority-5
//!    rejection for that request, and processing moves on.
//! 2. Split the weekly demand into sessions: `periods_per_week` divided by
//!    the subject's consecutive-period requirement. The division
//!    truncates; a remainder silently drops periods (legacy behavior,
//!    preserved deliberately).
//! 3. For each session, draw a random day and a shuffled list of non-break
//!    start slots, committing the first candidate the feasibility check
//!    accepts. A shared budget of `max_attempts_per_period × sessions`
//!    bounds the whole request; exhausting it logs
//!    `No_Available_Slot_Found` and abandons the remaining sessions
//!    without rolling back committed ones.
//!
//! After the queue, a post-generation sweep flags every required subject
//! that received no periods at all (total starvation only — partial
//! shortfall is deliberately not detected).

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    AllocationRequest, Assignment, ConfigError, DecisionLog, DecisionLogEntry, Faculty, Room, Rule,
    SlotDetails, Subject, TimeGrid, TimetableConfig,
};

use super::{check_placement, Feasibility, ResourceTrackers};

/// Default cap on placement attempts per requested session.
pub const DEFAULT_MAX_ATTEMPTS_PER_PERIOD: usize = 50;

/// Input container for one generation call.
///
/// Owns the grid configuration, the weekly demand, and the fully
/// materialized catalogs. The engine reads catalogs as passed — it
/// performs no lookups outside this container.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Grid configuration.
    pub config: TimetableConfig,
    /// Weekly demand, processed in order.
    pub allocations: Vec<AllocationRequest>,
    /// Faculty catalog.
    pub faculties: Vec<Faculty>,
    /// Subject catalog.
    pub subjects: Vec<Subject>,
    /// Room catalog.
    pub rooms: Vec<Room>,
}

impl GenerationRequest {
    /// Creates a request for a configuration.
    pub fn new(config: TimetableConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Appends an allocation request.
    pub fn with_allocation(mut self, allocation: AllocationRequest) -> Self {
        self.allocations.push(allocation);
        self
    }

    /// Appends a faculty catalog entry.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculties.push(faculty);
        self
    }

    /// Appends a subject catalog entry.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Appends a room catalog entry.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }
}

/// A generated draft: the filled grid plus its decision trail.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The draft timetable.
    pub grid: TimeGrid,
    /// Ordered decisions made while producing it.
    pub log: DecisionLog,
}

impl GenerationResult {
    /// Total periods placed into the grid.
    pub fn placed_periods(&self) -> usize {
        self.grid.assignment_count()
    }

    /// Sessions committed (one success entry each).
    pub fn session_count(&self) -> usize {
        self.log.count_for_rule(Rule::SlotAssignmentSuccess)
    }

    /// Constraint rejections recorded along the way.
    pub fn rejection_count(&self) -> usize {
        self.log.rejections().len()
    }

    /// Starvation conflicts: required subjects that got nothing.
    pub fn starved(&self) -> Vec<&DecisionLogEntry> {
        self.log.entries_for_rule(Rule::SubjectFrequencyPerWeek)
    }
}

/// Randomized timetable generator.
///
/// Stateless between calls: grid, trackers, and log are built fresh inside
/// [`generate`](TimetableGenerator::generate) and returned to the caller.
/// Randomness comes from the caller-supplied `Rng`, so a seeded generator
/// replays a draft exactly.
///
/// # Example
///
/// ```
/// use u_timetable::models::{AllocationRequest, Faculty, Room, SlotConfig, Subject, TimetableConfig};
/// use u_timetable::scheduler::{GenerationRequest, TimetableGenerator};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let config = TimetableConfig::new()
///     .with_slot(SlotConfig::lecture("09:00", "10:00"))
///     .with_branch("CSE", vec!["A".into()]);
///
/// let mut faculty = Faculty::new("F001");
/// for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
///     faculty = faculty.with_availability(day, vec!["09:00-10:00".into()]);
/// }
///
/// let request = GenerationRequest::new(config)
///     .with_subject(Subject::lecture("CS101"))
///     .with_faculty(faculty)
///     .with_room(Room::lecture_hall("LH-1"))
///     .with_allocation(AllocationRequest::new("CS101", "F001", "CSE", "A", 1));
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let result = TimetableGenerator::new().generate(&request, &mut rng).unwrap();
/// assert_eq!(result.placed_periods(), 1);
/// assert_eq!(result.session_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    max_attempts_per_period: usize,
}

impl TimetableGenerator {
    /// Creates a generator with the default retry bound.
    pub fn new() -> Self {
        Self {
            max_attempts_per_period: DEFAULT_MAX_ATTEMPTS_PER_PERIOD,
        }
    }

    /// Overrides the per-session attempt cap.
    pub fn with_max_attempts(mut self, max_attempts_per_period: usize) -> Self {
        self.max_attempts_per_period = max_attempts_per_period;
        self
    }

    /// Generates a draft grid and decision log.
    ///
    /// The only hard failure is a structurally unusable configuration
    /// (no days or no slots); every in-loop problem is a log entry, never
    /// an `Err`.
    pub fn generate<R: Rng>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GenerationResult, ConfigError> {
        request.config.validate()?;

        let mut grid = TimeGrid::build(&request.config);
        let mut trackers = ResourceTrackers::new();
        let mut log = DecisionLog::new();

        let subject_map: HashMap<&str, &Subject> = request
            .subjects
            .iter()
            .map(|s| (s.code.as_str(), s))
            .collect();
        let faculty_map: HashMap<&str, &Faculty> = request
            .faculties
            .iter()
            .map(|f| (f.id.as_str(), f))
            .collect();
        let lecture_slots = request.config.lecture_slot_indices();
        let day_count = grid.days().len();

        for alloc in &request.allocations {
            let details = SlotDetails::for_request(alloc);

            let Some(subject) = subject_map.get(alloc.subject_code.as_str()).copied() else {
                log.push(DecisionLogEntry::new(
                    Rule::SubjectNotFound,
                    details,
                    format!(
                        "Subject with code '{}' not found. Cannot allocate.",
                        alloc.subject_code
                    ),
                ));
                continue;
            };
            let Some(faculty) = faculty_map.get(alloc.faculty_id.as_str()).copied() else {
                log.push(DecisionLogEntry::new(
                    Rule::FacultyNotFound,
                    details,
                    format!(
                        "Faculty with ID '{}' not found. Cannot allocate.",
                        alloc.faculty_id
                    ),
                ));
                continue;
            };

            let section_key = alloc.section_key();
            let consecutive = subject.consecutive_periods();
            // Truncating division: a remainder silently drops periods.
            let sessions = if consecutive == 0 {
                0
            } else {
                alloc.periods_per_week / consecutive
            };
            if sessions == 0 {
                continue; // The starvation sweep still flags required subjects.
            }

            let budget = self.max_attempts_per_period * sessions;
            let mut attempts = 0;

            'sessions: for _ in 0..sessions {
                loop {
                    if attempts >= budget {
                        log.push(DecisionLogEntry::new(
                            Rule::NoAvailableSlotFound,
                            details.clone(),
                            format!(
                                "Could not find a suitable slot for {} for {section_key} \
                                 after {attempts} attempts.",
                                alloc.subject_code
                            ),
                        ));
                        break 'sessions;
                    }
                    attempts += 1;

                    let day_idx = rng.random_range(0..day_count);
                    let day = grid.days()[day_idx].clone();
                    let mut starts = lecture_slots.clone();
                    starts.shuffle(rng);

                    let mut placed = false;
                    for &start in &starts {
                        let start_label = grid.slots()[start].start.clone();
                        match check_placement(
                            &grid,
                            &trackers,
                            &request.rooms,
                            subject,
                            faculty,
                            &section_key,
                            day_idx,
                            start,
                            consecutive,
                            rng,
                        ) {
                            Feasibility::Accepted { room_id, window } => {
                                for (i, &slot_idx) in window.iter().enumerate() {
                                    grid.place(
                                        day_idx,
                                        slot_idx,
                                        &section_key,
                                        Assignment {
                                            subject_code: subject.code.clone(),
                                            faculty_id: faculty.id.clone(),
                                            room_id: room_id.clone(),
                                            position_in_block: i + 1,
                                            block_size: consecutive,
                                        },
                                    );
                                }
                                trackers.commit(
                                    &faculty.id,
                                    &room_id,
                                    &section_key,
                                    &subject.code,
                                    day_idx,
                                    &window,
                                );
                                log.push(DecisionLogEntry::new(
                                    Rule::SlotAssignmentSuccess,
                                    details.clone().at(&day, &start_label).with_room(&room_id),
                                    format!(
                                        "Assigned {} to {section_key} with {} in {room_id} \
                                         starting at {day} {start_label} for {consecutive} periods.",
                                        subject.code,
                                        faculty.label()
                                    ),
                                ));
                                placed = true;
                                break;
                            }
                            Feasibility::Rejected {
                                rule,
                                explanation,
                                context,
                            } => {
                                log.push(DecisionLogEntry::new(
                                    rule,
                                    context.apply(details.clone().at(&day, &start_label)),
                                    explanation,
                                ));
                            }
                        }
                    }

                    if placed {
                        continue 'sessions;
                    }
                }
            }
        }

        // Post-generation sweep: required subjects that got nothing at all.
        for alloc in &request.allocations {
            let Some(subject) = subject_map.get(alloc.subject_code.as_str()).copied() else {
                continue; // Already logged as a lookup failure.
            };
            let section_key = alloc.section_key();
            if subject.required_frequency_per_week > 0
                && trackers.placed_periods(&section_key, &subject.code) == 0
            {
                log.push(DecisionLogEntry::new(
                    Rule::SubjectFrequencyPerWeek,
                    SlotDetails::for_request(alloc),
                    format!(
                        "Subject '{}' ({}) for {section_key} was not assigned any periods, \
                         but requires {} times per week.",
                        subject.label(),
                        subject.code,
                        subject.required_frequency_per_week
                    ),
                ));
            }
        }

        Ok(GenerationResult { grid, log })
    }
}

impl Default for TimetableGenerator {
    fn default() -> Self {
        Self::new()
    }
}
