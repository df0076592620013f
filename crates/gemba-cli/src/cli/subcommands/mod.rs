mod action;
mod audit;
mod goal;
mod schedule;
mod stats;

pub use action::ActionCommands;
pub use audit::AuditCommands;
pub use goal::GoalCommands;
pub use schedule::ScheduleCommands;
pub use stats::StatsCommands;
