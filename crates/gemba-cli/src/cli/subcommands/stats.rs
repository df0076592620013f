use chrono::NaiveDate;
use clap::Subcommand;

/// Reporting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatsCommands {
    /// Monthly mean scores against the trend target.
    Trend {
        #[arg(long)]
        department: Option<String>,
    },
    /// Departments ranked by mean score.
    Ranking,
    /// Mean score per 5S category.
    Categories {
        #[arg(long)]
        department: Option<String>,
    },
    /// Audit count and mean scores.
    Kpis {
        #[arg(long)]
        department: Option<String>,
    },
    /// Attainment of the goals active on a day.
    Goals {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Corrective actions counted by status.
    Actions {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}
