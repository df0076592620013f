//! Entity structs for all Gemba domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so that
//! hosts can round-trip them through any storage format without losing fields.

mod action;
mod answer;
mod audit;
mod goal;
mod question;
mod schedule;

pub use action::{CorrectiveAction, LogEntry};
pub use answer::{Answer, AuditDraft, FULL_SCORE, MAX_PARTIAL_SCORE, Signatures};
pub use audit::AuditRecord;
pub use goal::Goal;
pub use question::{Applicability, Category, Question};
pub use schedule::Schedule;
