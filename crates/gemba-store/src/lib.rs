//! # gemba-store
//!
//! In-memory host for the Gemba engine.
//!
//! [`AuditService`] keeps audit history, corrective actions, schedules, and
//! goals in memory, records every mutation to a per-day JSONL trail through
//! [`TrailWriter`], and serializes lifecycle operations per action id.
//! [`TrailReplayer`] rebuilds the state from the trail.

pub mod error;
pub mod service;
pub mod trail;

pub use error::StoreError;
pub use service::AuditService;
pub use trail::replayer::TrailReplayer;
pub use trail::writer::TrailWriter;
