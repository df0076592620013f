//! Trail and catalog locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_trail_dir() -> PathBuf {
    PathBuf::from(".gemba/trail")
}

const fn default_trail_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the per-day JSONL trail files.
    #[serde(default = "default_trail_dir")]
    pub trail_dir: PathBuf,

    /// When false, mutations stay in memory and nothing is appended.
    #[serde(default = "default_trail_enabled")]
    pub trail_enabled: bool,

    /// JSON catalog to use instead of the standard 5S checklist.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            trail_dir: default_trail_dir(),
            trail_enabled: default_trail_enabled(),
            catalog_path: None,
        }
    }
}

impl StorageConfig {
    /// Trail directory resolved against `project_root` when relative.
    #[must_use]
    pub fn trail_dir_in(&self, project_root: &Path) -> PathBuf {
        if self.trail_dir.is_absolute() {
            self.trail_dir.clone()
        } else {
            project_root.join(&self.trail_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.trail_dir, PathBuf::from(".gemba/trail"));
        assert!(config.trail_enabled);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn relative_trail_dir_resolves_under_project() {
        let config = StorageConfig::default();
        assert_eq!(
            config.trail_dir_in(Path::new("/srv/plant")),
            PathBuf::from("/srv/plant/.gemba/trail")
        );

        let absolute = StorageConfig {
            trail_dir: PathBuf::from("/var/lib/gemba"),
            ..Default::default()
        };
        assert_eq!(
            absolute.trail_dir_in(Path::new("/srv/plant")),
            PathBuf::from("/var/lib/gemba")
        );
    }
}
