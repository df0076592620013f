use std::collections::BTreeSet;

use chrono::NaiveDate;
use gemba_engine::goals::{active_goal, goal_attainment};

use crate::cli::GlobalFlags;
use crate::commands::shared::clock::today_or;
use crate::context::AppContext;
use crate::output::output;

/// Attainment of the goal active on `today` for each department that has one.
pub fn run(
    department: Option<&str>,
    today: Option<NaiveDate>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let today = today_or(today);
    let goals = ctx.service.goals()?;
    let history = ctx.service.history()?;

    let departments: BTreeSet<&str> = match ctx.department(department) {
        Some(d) => BTreeSet::from([d]),
        None => goals.iter().map(|g| g.department.as_str()).collect(),
    };

    let report = departments
        .into_iter()
        .filter_map(|d| active_goal(&goals, d, today))
        .map(|goal| goal_attainment(goal, &history))
        .collect::<Vec<_>>();

    output(&report, flags.format)
}
