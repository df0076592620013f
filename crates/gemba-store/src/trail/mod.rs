//! JSONL trail writer and replayer.
//!
//! The trail is the source of truth for all mutations. Per-day JSONL files
//! live in `.gemba/trail/` and the in-memory state is rebuildable from them.

pub mod replayer;
pub mod writer;
