use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A planned future audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Schedule {
    pub id: String,
    pub department: String,
    pub auditor_name: String,
    pub date: NaiveDate,
}
