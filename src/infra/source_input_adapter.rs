use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::app::ports::SourceInputPort;
use crate::common::error::MergeError;
use crate::registry::SourceConfig;

/// File-based implementation of SourceInputPort.
///
/// Reads one legacy source's raw records from a JSON array file under the
/// data directory. File order defines ordinal assignment downstream.
pub struct FileSourceInputAdapter {
    data_dir: PathBuf,
}

impl FileSourceInputAdapter {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl SourceInputPort for FileSourceInputAdapter {
    async fn load_records(&self, config: &SourceConfig) -> anyhow::Result<Vec<Value>> {
        let path = self.data_dir.join(&config.input);
        debug!("Reading source '{}' from {}", config.source_id, path.display());

        let content = fs::read_to_string(&path).map_err(|e| MergeError::Source {
            message: format!(
                "failed to read source '{}' input {}: {}",
                config.source_id,
                path.display(),
                e
            ),
        })?;
        let records: Vec<Value> = serde_json::from_str(&content).map_err(|e| MergeError::Source {
            message: format!(
                "malformed source '{}' input {}: {}",
                config.source_id,
                path.display(),
                e
            ),
        })?;
        Ok(records)
    }
}
