use std::path::{Path, PathBuf};

use anyhow::Context;
use gemba_config::GembaConfig;
use gemba_core::catalog::Catalog;
use gemba_engine::HistoryFilter;
use gemba_store::{AuditService, TrailReplayer, TrailWriter};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: AuditService,
    pub config: GembaConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Load the catalog, open the trail and replay it into a fresh service.
    pub fn init(project_root: PathBuf, config: GembaConfig) -> anyhow::Result<Self> {
        let catalog = load_catalog(&project_root, &config)?;
        let trail_dir = config.storage.trail_dir_in(&project_root);

        let trail = if config.storage.trail_enabled {
            TrailWriter::new(trail_dir.clone())
                .with_context(|| format!("failed to open trail at {}", trail_dir.display()))?
        } else {
            tracing::debug!("trail disabled; changes will not be persisted");
            TrailWriter::disabled()
        };

        let mut service = AuditService::new(catalog, config.audit_policy(), trail);
        let replay = TrailReplayer::rebuild(&mut service, &trail_dir)
            .context("failed to replay trail")?;
        tracing::debug!(
            operations = replay.operations_replayed,
            files = replay.trail_files,
            "state restored from trail"
        );

        Ok(Self {
            service,
            config,
            project_root,
        })
    }

    /// Trail directory after resolving it against the project root.
    #[must_use]
    pub fn trail_dir(&self) -> PathBuf {
        self.config.storage.trail_dir_in(&self.project_root)
    }

    /// Department from the flag, else the configured default.
    #[must_use]
    pub fn department<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.config.general.default_department.as_deref())
    }

    #[must_use]
    pub fn filter(&self, flag: Option<&str>) -> HistoryFilter {
        self.department(flag)
            .map_or_else(HistoryFilter::all, HistoryFilter::department)
    }
}

fn load_catalog(project_root: &Path, config: &GembaConfig) -> anyhow::Result<Catalog> {
    let Some(path) = config.storage.catalog_path.as_ref() else {
        return Ok(Catalog::standard());
    };
    let path = if path.is_absolute() {
        path.clone()
    } else {
        project_root.join(path)
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), categories = catalog.categories().len(), "custom catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use gemba_config::GembaConfig;
    use gemba_core::catalog::Catalog;
    use gemba_engine::HistoryFilter;
    use tempfile::TempDir;

    use super::AppContext;

    #[test]
    fn empty_project_starts_with_empty_state() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path().to_path_buf(), GembaConfig::default())
            .expect("context should init");

        assert!(ctx.service.history().expect("history").is_empty());
        assert!(ctx.trail_dir().is_dir());
        assert_eq!(ctx.service.catalog().categories().len(), 5);
    }

    #[test]
    fn custom_catalog_is_loaded_relative_to_project() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut categories = Catalog::standard().categories().to_vec();
        categories[0].questions[0].text = "Is the bench clear?".into();
        let question_id = categories[0].questions[0].id;
        let json = serde_json::json!({ "categories": categories });
        std::fs::write(temp.path().join("catalog.json"), json.to_string()).expect("catalog should write");

        let mut config = GembaConfig::default();
        config.storage.catalog_path = Some("catalog.json".into());
        config.storage.trail_enabled = false;

        let ctx = AppContext::init(temp.path().to_path_buf(), config).expect("context should init");
        assert_eq!(ctx.service.catalog().question_text(question_id), Some("Is the bench clear?"));
        assert!(!ctx.trail_dir().exists());
    }

    #[test]
    fn missing_catalog_file_fails() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = GembaConfig::default();
        config.storage.catalog_path = Some("nope.json".into());

        let error = AppContext::init(temp.path().to_path_buf(), config)
            .err()
            .expect("init should fail");
        assert!(format!("{error:#}").contains("failed to read catalog"));
    }

    #[test]
    fn department_flag_overrides_default() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = GembaConfig::default();
        config.general.default_department = Some("Warehouse".into());
        config.storage.trail_enabled = false;
        let ctx = AppContext::init(temp.path().to_path_buf(), config).expect("context should init");

        assert_eq!(ctx.department(None), Some("Warehouse"));
        assert_eq!(ctx.department(Some("Cafeteria")), Some("Cafeteria"));
        assert_eq!(ctx.filter(None), HistoryFilter::department("Warehouse"));
    }
}
