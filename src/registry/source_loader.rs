use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::error::{MergeError, Result};
use crate::pipeline::processing::normalize::FieldMap;

/// Configuration for one legacy source, loaded from the registry directory.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    pub source_id: String,
    pub enabled: bool,
    /// Raw records file, relative to the data directory
    pub input: PathBuf,
    /// Position in the cross-source processing order; lower runs first
    pub order: u32,
    pub taxonomy_name: String,
    pub taxonomy_description: String,
    #[serde(default)]
    pub field_map: FieldMap,
}

#[derive(Clone)]
pub struct SourceRegistry {
    sources: HashMap<String, SourceConfig>,
}

impl SourceRegistry {
    /// Load all source configurations from the registry directory
    pub fn load_from_directory<P: AsRef<Path>>(registry_dir: P) -> Result<Self> {
        let dir_path = registry_dir.as_ref();
        if !dir_path.exists() {
            return Err(MergeError::Registry {
                message: format!("Registry directory does not exist: {}", dir_path.display()),
            });
        }

        let mut sources = HashMap::new();
        for entry in fs::read_dir(dir_path)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            let config: SourceConfig =
                serde_json::from_str(&content).map_err(|e| MergeError::Registry {
                    message: format!("Failed to parse source config {}: {}", path.display(), e),
                })?;
            sources.insert(config.source_id.clone(), config);
        }

        Ok(Self { sources })
    }

    /// Build a registry directly from configs (mainly for tests and embedding)
    pub fn from_configs(configs: Vec<SourceConfig>) -> Self {
        let sources = configs
            .into_iter()
            .map(|c| (c.source_id.clone(), c))
            .collect();
        Self { sources }
    }

    /// All enabled sources in their fixed processing order.
    ///
    /// Order is the config's `order` field, with the source id as a
    /// tiebreaker so the sequence is stable.
    pub fn enabled_sources(&self) -> Vec<&SourceConfig> {
        let mut configs: Vec<&SourceConfig> =
            self.sources.values().filter(|s| s.enabled).collect();
        configs.sort_by(|a, b| (a.order, &a.source_id).cmp(&(b.order, &b.source_id)));
        configs
    }

    pub fn get(&self, source_id: &str) -> Option<&SourceConfig> {
        self.sources.get(source_id)
    }

    pub fn is_enabled(&self, source_id: &str) -> bool {
        self.sources.get(source_id).map_or(false, |s| s.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, source_id: &str, enabled: bool, order: u32) {
        let config = format!(
            r#"{{
                "source_id": "{}",
                "enabled": {},
                "input": "{}.json",
                "order": {},
                "taxonomy_name": "Legacy {}",
                "taxonomy_description": "Imported {} records"
            }}"#,
            source_id, enabled, source_id, order, source_id, source_id
        );
        fs::write(dir.join(format!("{}.json", source_id)), config).unwrap();
    }

    #[test]
    fn test_load_and_order_sources() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "mit", true, 2);
        write_config(dir.path(), "ibm", true, 1);

        let registry = SourceRegistry::load_from_directory(dir.path()).unwrap();
        let ordered: Vec<&str> = registry
            .enabled_sources()
            .iter()
            .map(|c| c.source_id.as_str())
            .collect();
        assert_eq!(ordered, vec!["ibm", "mit"]);
        // Field map falls back to the default legacy keys
        assert_eq!(registry.get("ibm").unwrap().field_map.summary, "Summary");
    }

    #[test]
    fn test_disabled_sources_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "ibm", true, 1);
        write_config(dir.path(), "mit", false, 2);

        let registry = SourceRegistry::load_from_directory(dir.path()).unwrap();
        assert_eq!(registry.enabled_sources().len(), 1);
        assert!(registry.is_enabled("ibm"));
        assert!(!registry.is_enabled("mit"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(SourceRegistry::load_from_directory(&missing).is_err());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        assert!(SourceRegistry::load_from_directory(dir.path()).is_err());
    }
}
