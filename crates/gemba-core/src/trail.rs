//! JSONL trail operation envelope.
//!
//! Every mutation a host performs is recorded as a `TrailOperation` in
//! per-day `.gemba/trail/{YYYY-MM-DD}.jsonl` files. In-memory state is
//! rebuildable from these trail files.
//!
//! The `v` field supports schema versioning: old trail files without a `v`
//! field deserialize with `v == 1` via `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, TrailOp};

/// Default trail version for backward compatibility with old JSONL files.
const fn default_trail_version() -> u32 {
    1
}

/// A single operation recorded in the JSONL trail.
///
/// `data` holds the full entity state for `Create` and `Transition` ops and
/// `null` for `Delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 for old trails without this field.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// RFC 3339 timestamp of the operation.
    pub ts: String,

    /// Who performed the operation, when known.
    #[serde(default)]
    pub actor: Option<String>,

    /// What kind of mutation this represents.
    pub op: TrailOp,

    /// Which entity type was affected.
    pub entity: EntityType,

    /// ID of the affected entity.
    pub id: String,

    /// Operation payload. Schema depends on `op` and `entity`.
    pub data: serde_json::Value,
}

impl TrailOperation {
    /// The trail file stem (`YYYY-MM-DD`) this operation belongs to.
    #[must_use]
    pub fn day(&self) -> &str {
        self.ts.get(..10).unwrap_or("undated")
    }
}
