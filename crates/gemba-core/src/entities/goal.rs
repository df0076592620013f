use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CategoryId;

/// Per-category score targets for one department over a date window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Goal {
    pub id: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub targets: BTreeMap<CategoryId, f64>,
}

impl Goal {
    /// Whether `date` falls inside the goal window (both ends inclusive).
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
