//! Read-only projections over audit history and corrective actions.
//!
//! Every function here is pure: inputs are borrowed, nothing is cached, and
//! callers may recompute freely whenever the filter changes. Null scores are
//! left out of every mean rather than counted as zero.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use chrono::NaiveDate;
use gemba_core::entities::{AuditRecord, CorrectiveAction};
use gemba_core::enums::{ActionStatus, CategoryId};
use gemba_core::responses::{
    ActionStatusCounts, CategoryAverage, Kpis, RankingEntry, TrendPoint, YearMonth,
};

use crate::scoring::mean;

/// Department selection applied to history before projecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub department: Option<String>,
}

impl HistoryFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn department(name: &str) -> Self {
        Self {
            department: Some(name.to_string()),
        }
    }

    #[must_use]
    pub fn matches(&self, department: &str) -> bool {
        self.department.as_deref().is_none_or(|d| d == department)
    }
}

fn scored(records: &[&AuditRecord]) -> Option<f64> {
    mean(records.iter().filter_map(|r| r.overall_score))
}

/// Monthly mean overall score, for the whole history and for the filtered
/// subset, in chronological order.
#[must_use]
pub fn trend_series(history: &[AuditRecord], filter: &HistoryFilter, target: f64) -> Vec<TrendPoint> {
    let mut months: BTreeMap<YearMonth, (Vec<&AuditRecord>, Vec<&AuditRecord>)> = BTreeMap::new();
    for record in history {
        let (all, filtered) = months.entry(YearMonth::of(record.date)).or_default();
        all.push(record);
        if filter.matches(&record.department) {
            filtered.push(record);
        }
    }

    months
        .into_iter()
        .map(|(month, (all, filtered))| TrendPoint {
            month,
            filtered_mean: scored(&filtered),
            global_mean: scored(&all),
            target,
        })
        .collect()
}

/// Departments by mean overall score, best first.
///
/// Always computed over the full history. Ties keep the order in which the
/// departments first appear; departments without any score sort last.
#[must_use]
pub fn department_ranking(history: &[AuditRecord]) -> Vec<RankingEntry> {
    let mut groups: Vec<(&str, Vec<&AuditRecord>)> = Vec::new();
    for record in history {
        match groups.iter().position(|(d, _)| *d == record.department) {
            Some(i) => groups[i].1.push(record),
            None => groups.push((record.department.as_str(), vec![record])),
        }
    }

    let mut ranking: Vec<RankingEntry> = groups
        .into_iter()
        .map(|(department, records)| RankingEntry {
            department: department.to_string(),
            mean_score: scored(&records),
            audit_count: records.len(),
        })
        .collect();

    // Option orders None below Some, so a descending sort leaves unscored last.
    ranking.sort_by(|a, b| b.mean_score.partial_cmp(&a.mean_score).unwrap_or(Ordering::Equal));
    ranking
}

/// Mean stored score per category over the filtered subset.
#[must_use]
pub fn category_averages(history: &[AuditRecord], filter: &HistoryFilter) -> Vec<CategoryAverage> {
    CategoryId::ALL
        .iter()
        .map(|&category| {
            let scores: Vec<f64> = history
                .iter()
                .filter(|r| filter.matches(&r.department))
                .filter_map(|r| r.category_score(category))
                .collect();
            CategoryAverage {
                category,
                samples: scores.len(),
                average: mean(scores),
            }
        })
        .collect()
}

#[must_use]
pub fn kpis(history: &[AuditRecord], filter: &HistoryFilter) -> Kpis {
    let all: Vec<&AuditRecord> = history.iter().collect();
    let filtered: Vec<&AuditRecord> = history
        .iter()
        .filter(|r| filter.matches(&r.department))
        .collect();
    Kpis {
        total_audits: filtered.len(),
        filtered_mean: scored(&filtered),
        global_mean: scored(&all),
    }
}

/// The audit of the same department that came right before `record`.
///
/// Same-day audits are ordered by their position in `history`.
#[must_use]
pub fn previous_audit<'a>(history: &'a [AuditRecord], record: &AuditRecord) -> Option<&'a AuditRecord> {
    let position = history
        .iter()
        .position(|r| r.id == record.id)
        .unwrap_or(history.len());

    history
        .iter()
        .enumerate()
        .filter(|(_, r)| r.department == record.department && r.id != record.id)
        .filter(|(i, r)| r.date < record.date || (r.date == record.date && *i < position))
        .max_by_key(|(i, r)| (r.date, *i))
        .map(|(_, r)| r)
}

/// Overall score of [`previous_audit`], for side-by-side report comparison.
#[must_use]
pub fn previous_score(history: &[AuditRecord], record: &AuditRecord) -> Option<f64> {
    previous_audit(history, record).and_then(|r| r.overall_score)
}

/// Actions for the board: pending first, then newest first.
#[must_use]
pub fn action_board<'a>(actions: &'a [CorrectiveAction], filter: &HistoryFilter) -> Vec<&'a CorrectiveAction> {
    let mut board: Vec<&CorrectiveAction> = actions
        .iter()
        .filter(|a| filter.matches(&a.department))
        .collect();
    board.sort_by_key(|a| (a.status != ActionStatus::Pending, Reverse(a.created_date)));
    board
}

#[must_use]
pub fn action_status_counts(
    actions: &[CorrectiveAction],
    filter: &HistoryFilter,
    today: NaiveDate,
) -> ActionStatusCounts {
    actions
        .iter()
        .filter(|a| filter.matches(&a.department))
        .fold(ActionStatusCounts::default(), |mut counts, action| {
            match action.status {
                ActionStatus::Pending => counts.pending += 1,
                ActionStatus::Executed => counts.executed += 1,
                ActionStatus::Approved => counts.approved += 1,
                ActionStatus::Rejected => counts.rejected += 1,
            }
            if action.is_overdue(today) {
                counts.overdue += 1;
            }
            counts
        })
}
