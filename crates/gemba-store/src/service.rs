//! Service layer orchestrating engine operations with the JSONL trail.
//!
//! `AuditService` owns the in-memory state (audit history, corrective
//! actions, schedules, goals) plus the `TrailWriter`. Every mutation follows
//! this protocol:
//! 1. Run the pure engine operation on a snapshot
//! 2. Append the resulting trail operations in one write (file I/O)
//! 3. Commit the new value to memory
//!
//! Corrective actions each sit behind their own `Mutex`, so concurrent
//! `submit_execution` / `decide` calls on one action are applied one at a
//! time in lock order while different actions proceed independently.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use gemba_core::catalog::Catalog;
use gemba_core::entities::{AuditDraft, AuditRecord, CorrectiveAction, Goal, Schedule};
use gemba_core::enums::{CategoryId, Decision, EntityType, TrailOp};
use gemba_core::errors::CoreError;
use gemba_core::ids::{self, PREFIX_GOAL, PREFIX_SCHEDULE};
use gemba_core::policy::AuditPolicy;
use gemba_core::responses::FinalizedAudit;
use gemba_core::trail::TrailOperation;
use gemba_engine::stats::{self, HistoryFilter};
use gemba_engine::{generator, goals, lifecycle};
use serde::Serialize;

use crate::error::StoreError;
use crate::trail::writer::TrailWriter;

type ActionSlot = Arc<Mutex<CorrectiveAction>>;

const MAX_ID_ATTEMPTS: u32 = 4;

/// Whether a freshly generated audit reuses an id already held in memory.
fn collides(
    candidate: &FinalizedAudit,
    audits: &[AuditRecord],
    actions: &BTreeMap<String, ActionSlot>,
) -> bool {
    audits.iter().any(|a| a.id == candidate.record.id)
        || candidate.actions.iter().any(|a| actions.contains_key(&a.id))
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn trail_op<T: Serialize>(
    at: DateTime<Utc>,
    actor: Option<&str>,
    op: TrailOp,
    entity: EntityType,
    id: &str,
    data: Option<&T>,
) -> Result<TrailOperation, StoreError> {
    let data = match data {
        Some(value) => serde_json::to_value(value).map_err(|e| StoreError::Other(e.into()))?,
        None => serde_json::Value::Null,
    };
    Ok(TrailOperation {
        v: 1,
        ts: timestamp(at),
        actor: actor.map(String::from),
        op,
        entity,
        id: id.to_string(),
        data,
    })
}

/// In-memory audit host backed by the JSONL trail.
pub struct AuditService {
    catalog: Catalog,
    policy: AuditPolicy,
    trail: TrailWriter,
    audits: RwLock<Vec<AuditRecord>>,
    actions: RwLock<BTreeMap<String, ActionSlot>>,
    schedules: RwLock<Vec<Schedule>>,
    goals: RwLock<Vec<Goal>>,
}

impl AuditService {
    #[must_use]
    pub fn new(catalog: Catalog, policy: AuditPolicy, trail: TrailWriter) -> Self {
        Self {
            catalog,
            policy,
            trail,
            audits: RwLock::new(Vec::new()),
            actions: RwLock::new(BTreeMap::new()),
            schedules: RwLock::new(Vec::new()),
            goals: RwLock::new(Vec::new()),
        }
    }

    /// A service that never touches the filesystem.
    #[must_use]
    pub fn in_memory(catalog: Catalog, policy: AuditPolicy) -> Self {
        Self::new(catalog, policy, TrailWriter::disabled())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn policy(&self) -> &AuditPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Access the trail writer mutably (e.g., to disable during rebuild).
    pub const fn trail_mut(&mut self) -> &mut TrailWriter {
        &mut self.trail
    }

    // -----------------------------------------------------------------------
    // Audits
    // -----------------------------------------------------------------------

    /// Finalize a draft, store the record and its corrective actions, and
    /// retire the schedule it fulfilled.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` with a validation error if the draft is
    /// incomplete, `StoreError::InvalidState` if no unused audit id can be
    /// generated, or `StoreError::Other` if the trail cannot be written.
    pub fn finalize_audit(
        &self,
        draft: AuditDraft,
        actor: &str,
        today: NaiveDate,
    ) -> Result<FinalizedAudit, StoreError> {
        let mut audits = self.audits.write().map_err(|_| StoreError::Poisoned("audits"))?;
        let mut actions = self.actions.write().map_err(|_| StoreError::Poisoned("actions"))?;
        let mut schedules = self
            .schedules
            .write()
            .map_err(|_| StoreError::Poisoned("schedules"))?;

        let mut attempts = 0;
        let finalized = loop {
            let candidate = generator::finalize(draft.clone(), &self.catalog, &self.policy, today)?;
            if !collides(&candidate, &audits, &actions) {
                break candidate;
            }
            attempts += 1;
            tracing::warn!(audit_id = %candidate.record.id, attempts, "generated audit id already in use");
            if attempts >= MAX_ID_ATTEMPTS {
                return Err(StoreError::InvalidState(format!(
                    "no free audit id after {attempts} attempts"
                )));
            }
        };

        let now = Utc::now();
        let record = &finalized.record;
        let mut ops = Vec::with_capacity(finalized.actions.len() + 2);
        ops.push(trail_op(
            now,
            Some(actor),
            TrailOp::Create,
            EntityType::Audit,
            &record.id,
            Some(record),
        )?);
        for action in &finalized.actions {
            ops.push(trail_op(
                now,
                Some(actor),
                TrailOp::Create,
                EntityType::Action,
                &action.id,
                Some(action),
            )?);
        }
        let retired = match finalized.retire_schedule.as_deref() {
            Some(id) => match schedules.iter().position(|s| s.id == id) {
                Some(index) => {
                    ops.push(trail_op::<()>(
                        now,
                        Some(actor),
                        TrailOp::Delete,
                        EntityType::Schedule,
                        id,
                        None,
                    )?);
                    Some(index)
                }
                None => {
                    tracing::warn!(schedule_id = id, "audit references an unknown schedule");
                    None
                }
            },
            None => None,
        };
        self.trail.append_all(&ops)?;

        audits.push(finalized.record.clone());
        for action in &finalized.actions {
            actions.insert(action.id.clone(), Arc::new(Mutex::new(action.clone())));
        }
        if let Some(index) = retired {
            schedules.remove(index);
        }

        tracing::info!(
            audit_id = %finalized.record.id,
            department = %finalized.record.department,
            actions = finalized.actions.len(),
            "audit stored"
        );
        Ok(finalized)
    }

    /// Snapshot of the audit history in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn history(&self) -> Result<Vec<AuditRecord>, StoreError> {
        Ok(self
            .audits
            .read()
            .map_err(|_| StoreError::Poisoned("audits"))?
            .clone())
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn get_audit(&self, id: &str) -> Result<AuditRecord, StoreError> {
        self.audits
            .read()
            .map_err(|_| StoreError::Poisoned("audits"))?
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Audit, id))
    }

    // -----------------------------------------------------------------------
    // Corrective actions
    // -----------------------------------------------------------------------

    fn action_slot(&self, id: &str) -> Result<ActionSlot, StoreError> {
        self.actions
            .read()
            .map_err(|_| StoreError::Poisoned("actions"))?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Action, id))
    }

    /// Run one lifecycle step under the action's lock and record it.
    fn transition<F>(&self, id: &str, actor: &str, step: F) -> Result<CorrectiveAction, StoreError>
    where
        F: FnOnce(&CorrectiveAction, DateTime<Utc>) -> Result<CorrectiveAction, CoreError>,
    {
        let slot = self.action_slot(id)?;
        let mut action = slot.lock().map_err(|_| StoreError::Poisoned("action"))?;
        let now = Utc::now();
        let next = step(&action, now)?;
        self.trail.append(&trail_op(
            now,
            Some(actor),
            TrailOp::Transition,
            EntityType::Action,
            &next.id,
            Some(&next),
        )?)?;
        *action = next.clone();
        Ok(next)
    }

    /// # Errors
    ///
    /// Not found, validation, or invalid transition; see
    /// [`lifecycle::submit_execution`].
    pub fn submit_execution(
        &self,
        id: &str,
        text: &str,
        evidence_ref: &str,
        actor: &str,
    ) -> Result<CorrectiveAction, StoreError> {
        self.transition(id, actor, |action, at| {
            lifecycle::submit_execution(action, text, evidence_ref, actor, at)
        })
    }

    /// # Errors
    ///
    /// Not found, validation, or invalid transition; see [`lifecycle::decide`].
    pub fn decide(
        &self,
        id: &str,
        decision: Decision,
        note: &str,
        actor: &str,
    ) -> Result<CorrectiveAction, StoreError> {
        self.transition(id, actor, |action, at| {
            lifecycle::decide(action, decision, note, actor, at)
        })
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn get_action(&self, id: &str) -> Result<CorrectiveAction, StoreError> {
        let slot = self.action_slot(id)?;
        let action = slot.lock().map_err(|_| StoreError::Poisoned("action"))?;
        Ok(action.clone())
    }

    /// Snapshot of every action, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn actions(&self) -> Result<Vec<CorrectiveAction>, StoreError> {
        let slots: Vec<ActionSlot> = self
            .actions
            .read()
            .map_err(|_| StoreError::Poisoned("actions"))?
            .values()
            .cloned()
            .collect();
        slots
            .iter()
            .map(|slot| {
                slot.lock()
                    .map(|a| a.clone())
                    .map_err(|_| StoreError::Poisoned("action"))
            })
            .collect()
    }

    /// Actions in board order (pending first, then newest first).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn list_actions(&self, filter: &HistoryFilter) -> Result<Vec<CorrectiveAction>, StoreError> {
        let all = self.actions()?;
        Ok(stats::action_board(&all, filter).into_iter().cloned().collect())
    }

    // -----------------------------------------------------------------------
    // Schedules
    // -----------------------------------------------------------------------

    /// Plan a future audit.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank department or auditor.
    pub fn add_schedule(
        &self,
        department: &str,
        auditor_name: &str,
        date: NaiveDate,
    ) -> Result<Schedule, StoreError> {
        if department.trim().is_empty() {
            return Err(CoreError::Validation("schedule department is required".into()).into());
        }
        if auditor_name.trim().is_empty() {
            return Err(CoreError::Validation("schedule auditor is required".into()).into());
        }

        let schedule = Schedule {
            id: ids::generate_id(PREFIX_SCHEDULE)?,
            department: department.trim().to_string(),
            auditor_name: auditor_name.trim().to_string(),
            date,
        };
        let mut schedules = self
            .schedules
            .write()
            .map_err(|_| StoreError::Poisoned("schedules"))?;
        self.trail.append(&trail_op(
            Utc::now(),
            Some(auditor_name),
            TrailOp::Create,
            EntityType::Schedule,
            &schedule.id,
            Some(&schedule),
        )?)?;
        schedules.push(schedule.clone());
        Ok(schedule)
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn remove_schedule(&self, id: &str, actor: &str) -> Result<Schedule, StoreError> {
        let mut schedules = self
            .schedules
            .write()
            .map_err(|_| StoreError::Poisoned("schedules"))?;
        let index = schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(EntityType::Schedule, id))?;
        self.trail.append(&trail_op::<()>(
            Utc::now(),
            Some(actor),
            TrailOp::Delete,
            EntityType::Schedule,
            id,
            None,
        )?)?;
        Ok(schedules.remove(index))
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn get_schedule(&self, id: &str) -> Result<Schedule, StoreError> {
        self.schedules
            .read()
            .map_err(|_| StoreError::Poisoned("schedules"))?
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(EntityType::Schedule, id))
    }

    /// Planned audits ordered by date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn schedules(&self) -> Result<Vec<Schedule>, StoreError> {
        let mut schedules = self
            .schedules
            .read()
            .map_err(|_| StoreError::Poisoned("schedules"))?
            .clone();
        schedules.sort_by_key(|s| s.date);
        Ok(schedules)
    }

    // -----------------------------------------------------------------------
    // Goals
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns a validation error if the goal is malformed.
    pub fn add_goal(
        &self,
        department: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        targets: BTreeMap<CategoryId, f64>,
        actor: &str,
    ) -> Result<Goal, StoreError> {
        let goal = Goal {
            id: ids::generate_id(PREFIX_GOAL)?,
            department: department.trim().to_string(),
            start_date,
            end_date,
            targets,
        };
        goals::validate_goal(&goal)?;

        let mut all = self.goals.write().map_err(|_| StoreError::Poisoned("goals"))?;
        self.trail.append(&trail_op(
            Utc::now(),
            Some(actor),
            TrailOp::Create,
            EntityType::Goal,
            &goal.id,
            Some(&goal),
        )?)?;
        all.push(goal.clone());
        Ok(goal)
    }

    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub fn remove_goal(&self, id: &str, actor: &str) -> Result<Goal, StoreError> {
        let mut all = self.goals.write().map_err(|_| StoreError::Poisoned("goals"))?;
        let index = all
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| StoreError::not_found(EntityType::Goal, id))?;
        self.trail.append(&trail_op::<()>(
            Utc::now(),
            Some(actor),
            TrailOp::Delete,
            EntityType::Goal,
            id,
            None,
        )?)?;
        Ok(all.remove(index))
    }

    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn goals(&self) -> Result<Vec<Goal>, StoreError> {
        Ok(self
            .goals
            .read()
            .map_err(|_| StoreError::Poisoned("goals"))?
            .clone())
    }

    // -----------------------------------------------------------------------
    // Replay support
    // -----------------------------------------------------------------------

    /// Drop all in-memory state before a rebuild.
    pub(crate) fn clear(&mut self) -> Result<(), StoreError> {
        self.audits.get_mut().map_err(|_| StoreError::Poisoned("audits"))?.clear();
        self.actions.get_mut().map_err(|_| StoreError::Poisoned("actions"))?.clear();
        self.schedules
            .get_mut()
            .map_err(|_| StoreError::Poisoned("schedules"))?
            .clear();
        self.goals.get_mut().map_err(|_| StoreError::Poisoned("goals"))?.clear();
        Ok(())
    }

    pub(crate) fn restore_audit(&mut self, record: AuditRecord) -> Result<(), StoreError> {
        let audits = self.audits.get_mut().map_err(|_| StoreError::Poisoned("audits"))?;
        match audits.iter_mut().find(|a| a.id == record.id) {
            Some(existing) => *existing = record,
            None => audits.push(record),
        }
        Ok(())
    }

    pub(crate) fn restore_action(&mut self, action: CorrectiveAction) -> Result<(), StoreError> {
        self.actions
            .get_mut()
            .map_err(|_| StoreError::Poisoned("actions"))?
            .insert(action.id.clone(), Arc::new(Mutex::new(action)));
        Ok(())
    }

    pub(crate) fn restore_schedule(&mut self, schedule: Schedule) -> Result<(), StoreError> {
        let schedules = self
            .schedules
            .get_mut()
            .map_err(|_| StoreError::Poisoned("schedules"))?;
        schedules.retain(|s| s.id != schedule.id);
        schedules.push(schedule);
        Ok(())
    }

    pub(crate) fn forget_schedule(&mut self, id: &str) -> Result<bool, StoreError> {
        let schedules = self
            .schedules
            .get_mut()
            .map_err(|_| StoreError::Poisoned("schedules"))?;
        let before = schedules.len();
        schedules.retain(|s| s.id != id);
        Ok(schedules.len() < before)
    }

    pub(crate) fn restore_goal(&mut self, goal: Goal) -> Result<(), StoreError> {
        let goals = self.goals.get_mut().map_err(|_| StoreError::Poisoned("goals"))?;
        goals.retain(|g| g.id != goal.id);
        goals.push(goal);
        Ok(())
    }

    pub(crate) fn forget_goal(&mut self, id: &str) -> Result<bool, StoreError> {
        let goals = self.goals.get_mut().map_err(|_| StoreError::Poisoned("goals"))?;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        Ok(goals.len() < before)
    }
}
