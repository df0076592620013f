//! Department score goals and their attainment.

use chrono::NaiveDate;
use gemba_core::entities::{AuditRecord, FULL_SCORE, Goal};
use gemba_core::errors::CoreError;
use gemba_core::responses::{GoalAttainment, GoalRow};

use crate::scoring::mean;

/// # Errors
///
/// Returns `CoreError::Validation` for a blank department, an inverted
/// window, no targets, or a target outside `0..=10`.
pub fn validate_goal(goal: &Goal) -> Result<(), CoreError> {
    if goal.department.trim().is_empty() {
        return Err(CoreError::Validation("goal department is required".into()));
    }
    if goal.start_date > goal.end_date {
        return Err(CoreError::Validation(format!(
            "goal window starts {} after it ends {}",
            goal.start_date, goal.end_date
        )));
    }
    if goal.targets.is_empty() {
        return Err(CoreError::Validation("goal needs at least one category target".into()));
    }
    let max = f64::from(FULL_SCORE);
    if let Some((category, target)) = goal
        .targets
        .iter()
        .find(|(_, t)| !(0.0..=max).contains(*t))
    {
        return Err(CoreError::Validation(format!(
            "target {target} for {category} is outside 0..={max}"
        )));
    }
    Ok(())
}

/// The goal covering `department` on `date`. When windows overlap the one
/// that started last wins.
#[must_use]
pub fn active_goal<'a>(goals: &'a [Goal], department: &str, date: NaiveDate) -> Option<&'a Goal> {
    goals
        .iter()
        .filter(|g| g.department == department && g.is_active_on(date))
        .max_by_key(|g| g.start_date)
}

/// Compare the goal's targets with the category averages of the
/// department's audits inside the goal window.
#[must_use]
pub fn goal_attainment(goal: &Goal, history: &[AuditRecord]) -> GoalAttainment {
    let audits: Vec<&AuditRecord> = history
        .iter()
        .filter(|r| r.department == goal.department && goal.is_active_on(r.date))
        .collect();

    let rows = goal
        .targets
        .iter()
        .map(|(&category, &target)| {
            let actual = mean(audits.iter().filter_map(|r| r.category_score(category)));
            GoalRow {
                category,
                target,
                actual,
                met: actual.is_some_and(|a| a >= target),
            }
        })
        .collect();

    GoalAttainment {
        goal_id: goal.id.clone(),
        department: goal.department.clone(),
        audits_considered: audits.len(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use gemba_core::entities::Signatures;
    use gemba_core::enums::CategoryId;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(id: &str, start: NaiveDate, end: NaiveDate) -> Goal {
        Goal {
            id: id.into(),
            department: "Maintenance".into(),
            start_date: start,
            end_date: end,
            targets: BTreeMap::from([(CategoryId::Seiri, 8.0), (CategoryId::Seiso, 9.0)]),
        }
    }

    fn record(on: NaiveDate, department: &str, seiri: Option<f64>, seiso: Option<f64>) -> AuditRecord {
        AuditRecord {
            id: format!("aud-{on}"),
            date: on,
            department: department.into(),
            auditor_name: "Ana".into(),
            interviewee_name: "Rui".into(),
            answers: BTreeMap::new(),
            signatures: Signatures::default(),
            overall_score: None,
            category_scores: BTreeMap::from([(CategoryId::Seiri, seiri), (CategoryId::Seiso, seiso)]),
            schedule_id: None,
        }
    }

    #[test]
    fn attainment_uses_audits_inside_window() {
        let g = goal("gol-1", date(2024, 1, 1), date(2024, 6, 30));
        let history = vec![
            record(date(2023, 12, 31), "Maintenance", Some(2.0), Some(2.0)),
            record(date(2024, 1, 1), "Maintenance", Some(9.0), None),
            record(date(2024, 6, 30), "Maintenance", Some(8.0), Some(8.0)),
            record(date(2024, 3, 1), "Warehouse", Some(1.0), Some(1.0)),
        ];

        let report = goal_attainment(&g, &history);
        assert_eq!(report.audits_considered, 2);
        assert_eq!(
            report.rows,
            vec![
                GoalRow {
                    category: CategoryId::Seiri,
                    target: 8.0,
                    actual: Some(8.5),
                    met: true,
                },
                GoalRow {
                    category: CategoryId::Seiso,
                    target: 9.0,
                    actual: Some(8.0),
                    met: false,
                },
            ]
        );
    }

    #[test]
    fn no_audits_means_not_met() {
        let report = goal_attainment(&goal("gol-1", date(2024, 1, 1), date(2024, 2, 1)), &[]);
        assert_eq!(report.audits_considered, 0);
        assert!(report.rows.iter().all(|r| r.actual.is_none() && !r.met));
    }

    #[test]
    fn latest_started_goal_is_active() {
        let goals = vec![
            goal("gol-year", date(2024, 1, 1), date(2024, 12, 31)),
            goal("gol-q2", date(2024, 4, 1), date(2024, 6, 30)),
        ];
        let at = |d: NaiveDate| active_goal(&goals, "Maintenance", d).map(|g| g.id.clone());
        assert_eq!(at(date(2024, 2, 1)).as_deref(), Some("gol-year"));
        assert_eq!(at(date(2024, 5, 1)).as_deref(), Some("gol-q2"));
        assert_eq!(at(date(2025, 1, 1)), None);
        assert!(active_goal(&goals, "Cafeteria", date(2024, 5, 1)).is_none());
    }

    #[test]
    fn invalid_goals_are_rejected() {
        let ok = goal("gol-1", date(2024, 1, 1), date(2024, 2, 1));
        validate_goal(&ok).unwrap();

        let inverted = goal("gol-2", date(2024, 3, 1), date(2024, 2, 1));
        assert!(validate_goal(&inverted).is_err());

        let mut too_high = ok.clone();
        too_high.targets.insert(CategoryId::Shitsuke, 11.0);
        assert!(validate_goal(&too_high).is_err());

        let mut empty = ok.clone();
        empty.targets.clear();
        assert!(validate_goal(&empty).is_err());

        let mut blank = ok;
        blank.department = " ".into();
        assert!(validate_goal(&blank).is_err());
    }
}
