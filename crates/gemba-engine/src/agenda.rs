//! Calendar view of upcoming work.

use chrono::NaiveDate;
use gemba_core::entities::{CorrectiveAction, Schedule};
use gemba_core::responses::{AgendaEntry, AgendaItem};

use crate::stats::HistoryFilter;

/// Planned audits and open action deadlines, ordered by date.
///
/// Only pending and rejected actions appear; executed ones wait on a
/// reviewer, not on the department. Same-day rows keep schedules first.
#[must_use]
pub fn agenda(
    schedules: &[Schedule],
    actions: &[CorrectiveAction],
    filter: &HistoryFilter,
    today: NaiveDate,
) -> Vec<AgendaItem> {
    let planned = schedules
        .iter()
        .filter(|s| filter.matches(&s.department))
        .map(|s| AgendaItem {
            date: s.date,
            department: s.department.clone(),
            entry: AgendaEntry::ScheduledAudit {
                schedule_id: s.id.clone(),
                auditor_name: s.auditor_name.clone(),
            },
        });

    let deadlines = actions
        .iter()
        .filter(|a| a.status.is_open() && filter.matches(&a.department))
        .map(|a| AgendaItem {
            date: a.deadline,
            department: a.department.clone(),
            entry: AgendaEntry::ActionDeadline {
                action_id: a.id.clone(),
                issue_description: a.issue_description.clone(),
                overdue: a.is_overdue(today),
            },
        });

    let mut items: Vec<AgendaItem> = planned.chain(deadlines).collect();
    items.sort_by_key(|item| item.date);
    items
}
