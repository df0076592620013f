//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default row limit for list commands.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for `action list`, `schedule list`, and `agenda`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Department used when a command is run without `--department`.
    #[serde(default)]
    pub default_department: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_department: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert!(config.default_department.is_none());
    }
}
