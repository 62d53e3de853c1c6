use async_trait::async_trait;
use serde_json::Value;

use crate::domain::TaxonomyBundle;
use crate::registry::SourceConfig;

/// Supplies the names already present in the merged catalog
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn load_known_names(&self) -> anyhow::Result<Vec<String>>;
}

/// Loads one legacy source's raw records in input order
#[async_trait]
pub trait SourceInputPort: Send + Sync {
    async fn load_records(&self, config: &SourceConfig) -> anyhow::Result<Vec<Value>>;
}

/// Receives one assembled output bundle per source
#[async_trait]
pub trait MergeOutputPort: Send + Sync {
    async fn write_bundle(&self, source_id: &str, bundle: &TaxonomyBundle) -> anyhow::Result<()>;
}
