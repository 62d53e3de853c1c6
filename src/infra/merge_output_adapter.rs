use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::app::ports::MergeOutputPort;
use crate::common::error::MergeError;
use crate::domain::TaxonomyBundle;

/// File-based implementation of MergeOutputPort.
///
/// Writes one pretty-printed JSON bundle per source into the output
/// directory, named after the source's taxonomy.
pub struct FileMergeOutputAdapter {
    output_dir: PathBuf,
}

impl FileMergeOutputAdapter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn bundle_path(&self, source_id: &str) -> PathBuf {
        self.output_dir
            .join(format!("qube_legacy_{}_risks.json", source_id))
    }
}

#[async_trait]
impl MergeOutputPort for FileMergeOutputAdapter {
    async fn write_bundle(&self, source_id: &str, bundle: &TaxonomyBundle) -> anyhow::Result<()> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.bundle_path(source_id);
        let json = serde_json::to_string_pretty(bundle)?;
        fs::write(&path, json).map_err(|e| MergeError::Output {
            message: format!("failed to write bundle {}: {}", path.display(), e),
        })?;

        info!("Saved {} records to {}", bundle.risks.len(), path.display());
        Ok(())
    }
}
