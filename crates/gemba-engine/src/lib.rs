//! # gemba-engine
//!
//! The audit scoring and corrective-action lifecycle engine.
//!
//! Every operation here is synchronous and storage-agnostic: it takes plain
//! entity values from `gemba-core` and returns new values (or projections).
//! Hosts such as `gemba-store` own persistence and per-action serialization.
//!
//! - [`scoring`]: answers + catalog → per-category and overall score
//! - [`generator`]: draft validation and finalization into an audit record
//!   plus one corrective action per partial answer
//! - [`lifecycle`]: execution / approval / rejection of corrective actions
//! - [`stats`]: trend series, department ranking, per-category averages,
//!   KPIs, and the action board
//! - [`agenda`]: upcoming audits and action deadlines
//! - [`goals`]: per-category target attainment

pub mod agenda;
pub mod generator;
pub mod goals;
pub mod lifecycle;
pub mod scoring;
pub mod stats;

pub use generator::{finalize, validate_draft};
pub use lifecycle::{decide, submit_execution};
pub use scoring::compute_score;
pub use stats::HistoryFilter;
