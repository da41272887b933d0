//! Timetabling domain models.
//!
//! Core data types for one generation call: the grid configuration and
//! its built [`TimeGrid`], the catalog entities ([`Subject`], [`Faculty`],
//! [`Room`]), demand ([`AllocationRequest`]), and the explainability
//! output ([`DecisionLog`]). All types serialize with serde so drafts and
//! logs can be stored as opaque structured data by the caller.

mod allocation;
mod config;
mod faculty;
mod grid;
mod log;
mod room;
mod subject;

pub use allocation::AllocationRequest;
pub use config::{ConfigError, SlotConfig, SlotKind, TimetableConfig, WEEKDAYS};
pub use faculty::Faculty;
pub use grid::{Assignment, TimeGrid};
pub use log::{DecisionLog, DecisionLogEntry, LogType, Rule, SlotContext, SlotDetails};
pub use room::Room;
pub use subject::Subject;
