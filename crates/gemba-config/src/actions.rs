//! Corrective-action settings.

use gemba_core::policy::DEFAULT_DEADLINE_DAYS;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_deadline_days() -> u32 {
    DEFAULT_DEADLINE_DAYS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionsConfig {
    /// Days from the audit date to a generated action's deadline.
    #[serde(default = "default_deadline_days")]
    pub deadline_days: u32,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            deadline_days: default_deadline_days(),
        }
    }
}

impl ActionsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.deadline_days == 0 {
            return Err(ConfigError::invalid("actions.deadline_days", "must be at least 1"));
        }
        Ok(())
    }
}
