//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use gemba_config::{ConfigError, GembaConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_scoring_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scoring]
excellent_threshold = 9.5
good_threshold = 6.5
trend_target = 7.5
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let policy = config.audit_policy();
        assert!((policy.thresholds.excellent - 9.5).abs() < f64::EPSILON);
        assert!((policy.thresholds.good - 6.5).abs() < f64::EPSILON);
        assert!((policy.trend_target - 7.5).abs() < f64::EPSILON);
        assert_eq!(policy.deadline_days, 30);
        Ok(())
    });
}

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
trail_dir = "audit-trail"
trail_enabled = false
catalog_path = "checklists/plant.json"
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.trail_dir.to_str(), Some("audit-trail"));
        assert!(!config.storage.trail_enabled);
        assert_eq!(
            config.storage.catalog_path.as_deref().and_then(|p| p.to_str()),
            Some("checklists/plant.json")
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_department = "Warehouse"
"#,
        )?;

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_department.as_deref(), Some("Warehouse"));
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.actions.deadline_days, 30);
        assert!(config.storage.trail_enabled);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gemba")?;
        jail.create_file(
            ".gemba/config.toml",
            r"
[actions]
deadline_days = 14
",
        )?;

        let config = GembaConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.actions.deadline_days, 14);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[actions]
deadline_days = 14
",
        )?;
        jail.set_env("GEMBA_ACTIONS__DEADLINE_DAYS", "45");

        let config: GembaConfig = Figment::from(Serialized::defaults(GembaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("GEMBA_").split("__"))
            .extract()?;

        assert_eq!(config.actions.deadline_days, 45);
        Ok(())
    });
}

#[test]
fn invalid_project_config_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gemba")?;
        jail.create_file(
            ".gemba/config.toml",
            r"
[scoring]
excellent_threshold = 6.0
good_threshold = 8.0
",
        )?;

        let result = GembaConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gemba")?;
        jail.create_file(".gemba/config.toml", "[actions\ndeadline_days = ")?;

        let result = GembaConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
