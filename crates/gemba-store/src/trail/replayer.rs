//! Rebuild in-memory state from the JSONL trail.

use std::path::{Path, PathBuf};
use std::time::Instant;

use gemba_core::enums::{EntityType, TrailOp};
use gemba_core::responses::RebuildResponse;
use gemba_core::trail::TrailOperation;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::service::AuditService;

pub struct TrailReplayer;

impl TrailReplayer {
    /// Replace `service`'s state with the result of replaying every
    /// `*.jsonl` file under `trail_dir`.
    ///
    /// Files are read in name order and each file line by line, which is the
    /// order the writer appended them in. Timestamps are not consulted. A
    /// missing directory yields an empty state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` for an unsupported trail version or
    /// a payload that does not match its entity, and `StoreError::Other` for
    /// I/O and parse failures.
    pub fn rebuild(service: &mut AuditService, trail_dir: &Path) -> Result<RebuildResponse, StoreError> {
        let start = Instant::now();
        service.clear()?;

        let was_enabled = service.trail().is_enabled();
        service.trail_mut().set_enabled(false);
        let result = Self::replay_dir(service, trail_dir);
        service.trail_mut().set_enabled(was_enabled);
        let (trail_files, operations_replayed, entities_created) = result?;

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(trail_files, operations_replayed, duration_ms, "trail replayed");

        Ok(RebuildResponse {
            rebuilt: true,
            trail_files,
            operations_replayed,
            entities_created,
            duration_ms,
        })
    }

    fn trail_files(trail_dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        if !trail_dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        let entries = std::fs::read_dir(trail_dir).map_err(|e| StoreError::Other(e.into()))?;
        for entry in entries {
            let path = entry.map_err(|e| StoreError::Other(e.into()))?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn replay_dir(service: &mut AuditService, trail_dir: &Path) -> Result<(u32, u32, u32), StoreError> {
        let files = Self::trail_files(trail_dir)?;

        let mut all_ops: Vec<TrailOperation> = Vec::new();
        for path in &files {
            let ops: Vec<TrailOperation> = serde_jsonlines::json_lines(path)
                .map_err(|e| StoreError::Other(e.into()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| StoreError::Other(e.into()))?;
            all_ops.extend(ops);
        }

        let mut operations_replayed = 0u32;
        let mut entities_created = 0u32;
        for op in &all_ops {
            if op.v != 1 {
                return Err(StoreError::InvalidState(format!(
                    "Unsupported trail version {} for op {}",
                    op.v, op.id
                )));
            }
            replay_operation(service, op)?;
            operations_replayed += 1;
            if op.op == TrailOp::Create {
                entities_created += 1;
            }
        }

        let trail_files = u32::try_from(files.len()).unwrap_or(u32::MAX);
        Ok((trail_files, operations_replayed, entities_created))
    }
}

fn payload<T: DeserializeOwned>(op: &TrailOperation) -> Result<T, StoreError> {
    serde_json::from_value(op.data.clone()).map_err(|e| {
        StoreError::InvalidState(format!("bad {} payload for {} {}: {e}", op.op, op.entity, op.id))
    })
}

fn replay_operation(service: &mut AuditService, op: &TrailOperation) -> Result<(), StoreError> {
    match (op.op, op.entity) {
        (TrailOp::Create, EntityType::Audit) => service.restore_audit(payload(op)?),
        (TrailOp::Create | TrailOp::Transition, EntityType::Action) => {
            service.restore_action(payload(op)?)
        }
        (TrailOp::Create, EntityType::Schedule) => service.restore_schedule(payload(op)?),
        (TrailOp::Create, EntityType::Goal) => service.restore_goal(payload(op)?),
        (TrailOp::Delete, EntityType::Schedule) => {
            if !service.forget_schedule(&op.id)? {
                tracing::warn!(id = %op.id, "trail deletes an unknown schedule");
            }
            Ok(())
        }
        (TrailOp::Delete, EntityType::Goal) => {
            if !service.forget_goal(&op.id)? {
                tracing::warn!(id = %op.id, "trail deletes an unknown goal");
            }
            Ok(())
        }
        (kind, entity) => {
            tracing::warn!(op = %kind, %entity, id = %op.id, "skipping unsupported trail operation");
            Ok(())
        }
    }
}
