use figment::Jail;
use gemba_config::{ConfigError, GembaConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMBA_SCORING__TREND_TARGET", "8.5");
        jail.set_env("GEMBA_STORAGE__TRAIL_ENABLED", "false");
        jail.set_env("GEMBA_GENERAL__DEFAULT_LIMIT", "5");

        let config = GembaConfig::load_for_project(jail.directory()).expect("config loads");
        assert!((config.scoring.trend_target - 8.5).abs() < f64::EPSILON);
        assert!(!config.storage.trail_enabled);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gemba")?;
        jail.create_file(".gemba/config.toml", "[actions]\ndeadline_days = 14\n")?;
        jail.set_env("GEMBA_ACTIONS__DEADLINE_DAYS", "7");

        let config = GembaConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.audit_policy().deadline_days, 7);
        Ok(())
    });
}

#[test]
fn zero_deadline_from_env_is_invalid() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMBA_ACTIONS__DEADLINE_DAYS", "0");

        let result = GembaConfig::load_for_project(jail.directory());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field, .. }) if field == "actions.deadline_days"
        ));
        Ok(())
    });
}
