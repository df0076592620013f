use chrono::{Local, NaiveDate};

/// The `--today` override, else the local calendar day.
#[must_use]
pub fn today_or(override_day: Option<NaiveDate>) -> NaiveDate {
    override_day.unwrap_or_else(|| Local::now().date_naive())
}
