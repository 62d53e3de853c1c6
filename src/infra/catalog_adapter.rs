use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::app::ports::CatalogPort;
use crate::common::error::MergeError;

/// File-based implementation of CatalogPort.
///
/// Reads previously saved taxonomy bundles from a directory and exposes
/// their record names for dedup seeding. Only `risks[].name` is consumed;
/// full records are not re-validated.
pub struct FileCatalogAdapter {
    catalog_dir: PathBuf,
}

impl FileCatalogAdapter {
    pub fn new<P: Into<PathBuf>>(catalog_dir: P) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }
}

#[async_trait]
impl CatalogPort for FileCatalogAdapter {
    async fn load_known_names(&self) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();

        if !self.catalog_dir.exists() {
            warn!(
                "Catalog directory {} does not exist; starting from an empty catalog",
                self.catalog_dir.display()
            );
            return Ok(names);
        }

        // Sort by file name so the seed order is stable across runs
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.catalog_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        paths.sort();

        for path in paths {
            let content = fs::read_to_string(&path)?;
            let bundle: Value = serde_json::from_str(&content).map_err(|e| MergeError::Catalog {
                message: format!("malformed catalog file {}: {}", path.display(), e),
            })?;

            let Some(risks) = bundle.get("risks").and_then(Value::as_array) else {
                continue;
            };
            for risk in risks {
                if let Some(name) = risk.get("name").and_then(Value::as_str) {
                    names.push(name.to_string());
                }
            }
        }

        info!(
            "Collected {} catalog names from {}",
            names.len(),
            self.catalog_dir.display()
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_collects_names_across_bundle_files() {
        let dir = tempfile::tempdir().unwrap();
        let bundle_a = json!({
            "taxonomies": [{"id": "qube-legacy-ibm", "name": "a", "description": ""}],
            "risks": [{"name": "Data Poisoning"}, {"name": "Model Theft"}]
        });
        let bundle_b = json!({"risks": [{"name": "Reward Hacking"}]});
        fs::write(dir.path().join("a.json"), bundle_a.to_string()).unwrap();
        fs::write(dir.path().join("b.json"), bundle_b.to_string()).unwrap();

        let adapter = FileCatalogAdapter::new(dir.path());
        let names = adapter.load_known_names().await.unwrap();
        assert_eq!(names, vec!["Data Poisoning", "Model Theft", "Reward Hacking"]);
    }

    #[tokio::test]
    async fn test_missing_directory_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = FileCatalogAdapter::new(dir.path().join("missing"));
        assert!(adapter.load_known_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_bundle_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{broken").unwrap();

        let adapter = FileCatalogAdapter::new(dir.path());
        assert!(adapter.load_known_names().await.is_err());
    }

    #[tokio::test]
    async fn test_bundle_without_risks_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.json"), "{\"taxonomies\": []}").unwrap();

        let adapter = FileCatalogAdapter::new(dir.path());
        assert!(adapter.load_known_names().await.unwrap().is_empty());
    }
}
