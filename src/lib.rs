//! Academic timetabling engine.
//!
//! Assigns weekly class sessions (subject × faculty × section) to a fixed
//! day × slot grid under hard resource constraints — faculty clashes and
//! availability, room type and occupancy, lab continuity, workload caps —
//! and produces a structured decision log explaining every accepted and
//! rejected placement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimetableConfig`, `TimeGrid`,
//!   `Subject`, `Faculty`, `Room`, `AllocationRequest`, `DecisionLog`
//! - **`scheduler`**: Randomized placement engine — `TimetableGenerator`,
//!   feasibility checking, resource trackers
//! - **`validation`**: Optional fail-fast integrity checks on requests
//!
//! # Design
//!
//! Generation is synchronous and single-threaded; all mutable state is
//! built per call and returned, so concurrent callers are independent by
//! construction. Randomness comes from a caller-supplied `rand::Rng`,
//! making drafts replayable from a seed. The engine never returns an
//! error for scheduling failures — those are decision-log entries — and
//! hard-fails only on a structurally empty configuration.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
