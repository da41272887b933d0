//! Randomized placement engine with explainable decisions.
//!
//! One generation call flows through three parts: [`ResourceTrackers`]
//! hold the per-call occupancy and workload indices, [`check_placement`]
//! evaluates a single candidate against every hard constraint, and
//! [`TimetableGenerator`] drives the allocation queue with bounded
//! randomized retries, committing accepted placements and logging every
//! decision.
//!
//! The search is greedy and stochastic: it neither backtracks nor
//! optimizes globally, so an awkward early commitment can starve a later
//! request. The bounded attempt budget is the sole guard against
//! unbounded search; the decision log shows what was tried and why it
//! failed.

mod engine;
mod feasibility;
mod trackers;

pub use engine::{
    GenerationRequest, GenerationResult, TimetableGenerator, DEFAULT_MAX_ATTEMPTS_PER_PERIOD,
};
pub use feasibility::{check_placement, Feasibility};
pub use trackers::ResourceTrackers;
