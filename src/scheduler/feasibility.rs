//! Feasibility check for one candidate placement.
//!
//! A single flat function evaluates every hard constraint for a candidate
//! `(day, start slot, section)` and returns a tagged result: accepted with
//! a room and the covered slot window, or rejected with the first rule
//! that failed. Checks short-circuit in a fixed order, so each rejection
//! names exactly one rule.
//!
//! # Check order
//!
//! 1. Window validity (stays within the day, spans no break)
//! 2. Section occupancy across the window
//! 3. Faculty clash across all sections
//! 4. Faculty availability (literal `"start-end"` string match per slot)
//! 5. Daily then weekly workload caps
//! 6. Room selection (matching lab flag, free at every window slot)

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Faculty, Room, Rule, SlotContext, Subject, TimeGrid};

use super::ResourceTrackers;

/// Outcome of a feasibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// All constraints pass; commit into `window` using `room_id`.
    Accepted {
        /// Room chosen uniformly at random among the free suitable rooms.
        room_id: String,
        /// Slot indices the session will occupy, in order.
        window: Vec<usize>,
    },
    /// The first constraint that failed.
    Rejected {
        /// The violated rule.
        rule: Rule,
        /// Explanation for the decision log.
        explanation: String,
        /// Blocking resource, for rules that can name one.
        context: SlotContext,
    },
}

impl Feasibility {
    fn reject(rule: Rule, explanation: String) -> Self {
        Feasibility::Rejected {
            rule,
            explanation,
            context: SlotContext::default(),
        }
    }

    fn reject_with(rule: Rule, explanation: String, context: SlotContext) -> Self {
        Feasibility::Rejected {
            rule,
            explanation,
            context,
        }
    }
}

/// Evaluates one candidate placement against all hard constraints.
///
/// `window_len` is the subject's consecutive-period requirement. The room
/// is drawn from `rng` so equally suitable rooms are used evenly across
/// a draft.
#[allow(clippy::too_many_arguments)]
pub fn check_placement<R: Rng>(
    grid: &TimeGrid,
    trackers: &ResourceTrackers,
    rooms: &[Room],
    subject: &Subject,
    faculty: &Faculty,
    section_key: &str,
    day_idx: usize,
    start_slot: usize,
    window_len: usize,
    rng: &mut R,
) -> Feasibility {
    let slots = grid.slots();
    let day = &grid.days()[day_idx];
    let start = &slots[start_slot].start;

    // 1. Window validity: must fit within the day...
    if start_slot + window_len > slots.len() {
        return Feasibility::reject(
            Rule::NoLabInLastPeriod,
            format!(
                "Cannot schedule {} starting at {start} on {day} because it would extend \
                 into or beyond the last period.",
                subject.code
            ),
        );
    }
    let window: Vec<usize> = (start_slot..start_slot + window_len).collect();

    // ...and must not span a break.
    for &idx in &window {
        if slots[idx].is_break() {
            return Feasibility::reject(
                Rule::BreakDisruption,
                format!(
                    "Cannot schedule {} starting at {start} on {day} because it would be \
                     interrupted by a break at {}.",
                    subject.code, slots[idx].start
                ),
            );
        }
    }

    // 2. Section occupancy across the whole window.
    for &idx in &window {
        if !grid.is_free(day_idx, idx, section_key) {
            return Feasibility::reject_with(
                Rule::SectionAlreadyOccupiedConsecutive,
                format!(
                    "Section {section_key} is already occupied at {} on {day}.",
                    slots[idx].start
                ),
                SlotContext {
                    occupied_at: Some(slots[idx].start.clone()),
                    ..SlotContext::default()
                },
            );
        }
    }

    // 3. Faculty clash: busy anywhere (any section) at a window slot.
    for &idx in &window {
        if trackers.faculty_busy_at(&faculty.id, day_idx, idx) {
            let mut context = SlotContext {
                conflicting_time: Some(slots[idx].start.clone()),
                ..SlotContext::default()
            };
            // Name the clashing assignment; grid and trackers commit in
            // lock-step, so the scan finds it whenever one was placed.
            if let Some((section, hit)) = grid
                .assignments_at(day_idx, idx)
                .find(|(_, a)| a.faculty_id == faculty.id)
            {
                context.conflicting_slot = Some(section.to_string());
                context.conflicting_subject = Some(hit.subject_code.clone());
            }
            return Feasibility::reject_with(
                Rule::FacultyClashDetection,
                format!(
                    "Faculty '{}' is already assigned to another class at {day} {}.",
                    faculty.label(),
                    slots[idx].start
                ),
                context,
            );
        }
    }

    // 4. Availability: the exact range string of every window slot must be
    // listed for the day. Literal match, not interval containment.
    match faculty.availability_on(day) {
        None => {
            return Feasibility::reject(
                Rule::FacultyAvailabilityValidation,
                format!(
                    "Faculty '{}' is marked as unavailable on {day}.",
                    faculty.label()
                ),
            );
        }
        Some(ranges) if ranges.is_empty() => {
            return Feasibility::reject(
                Rule::FacultyAvailabilityValidation,
                format!(
                    "Faculty '{}' is marked as unavailable on {day}.",
                    faculty.label()
                ),
            );
        }
        Some(ranges) => {
            for &idx in &window {
                let range = slots[idx].range();
                if !ranges.iter().any(|r| *r == range) {
                    return Feasibility::reject_with(
                        Rule::FacultyAvailabilityValidation,
                        format!(
                            "Faculty '{}' is not available during {range} on {day}.",
                            faculty.label()
                        ),
                        SlotContext {
                            unavailable_time: Some(range),
                            ..SlotContext::default()
                        },
                    );
                }
            }
        }
    }

    // 5. Workload caps, daily before weekly.
    let daily = trackers.daily_load(&faculty.id, day_idx);
    if daily + window_len > faculty.max_daily_periods {
        return Feasibility::reject(
            Rule::MaxPeriodsPerFacultyPerDay,
            format!(
                "Faculty '{}' would exceed their maximum daily periods ({}) on {day}.",
                faculty.label(),
                faculty.max_daily_periods
            ),
        );
    }
    let weekly = trackers.weekly_load(&faculty.id);
    if weekly + window_len > faculty.max_weekly_workload {
        return Feasibility::reject(
            Rule::MaxWorkloadPerFacultyPerWeek,
            format!(
                "Faculty '{}' would exceed their maximum weekly workload ({}).",
                faculty.label(),
                faculty.max_weekly_workload
            ),
        );
    }

    // 6. Room: matching lab flag, free at every window slot.
    let suitable: Vec<&Room> = rooms
        .iter()
        .filter(|r| {
            r.is_lab == subject.is_lab
                && window
                    .iter()
                    .all(|&idx| !trackers.room_busy_at(&r.id, day_idx, idx))
        })
        .collect();

    match suitable.choose(rng) {
        Some(room) => Feasibility::Accepted {
            room_id: room.id.clone(),
            window,
        },
        None => Feasibility::reject(
            Rule::RoomAllocationConstraints,
            format!(
                "No suitable {} room available for {} at {day} {start}.",
                if subject.is_lab { "lab" } else { "lecture" },
                subject.code
            ),
        ),
    }
}
