use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::app::ports::{CatalogPort, MergeOutputPort, SourceInputPort};
use crate::observability::metrics;
use crate::pipeline::merge_orchestrator::{MergeOrchestrator, MergeStats, SourceBatch};
use crate::registry::SourceRegistry;

/// Report for one completed merge run
#[derive(Debug, Clone, Serialize)]
pub struct MergeRunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub stats: MergeStats,
}

/// Use case wiring the source registry, the I/O ports and the merge
/// pipeline into one run.
pub struct MergeUseCase {
    registry: SourceRegistry,
    catalog: Box<dyn CatalogPort>,
    input: Box<dyn SourceInputPort>,
    output: Box<dyn MergeOutputPort>,
    orchestrator: MergeOrchestrator,
}

impl MergeUseCase {
    pub fn new(
        registry: SourceRegistry,
        catalog: Box<dyn CatalogPort>,
        input: Box<dyn SourceInputPort>,
        output: Box<dyn MergeOutputPort>,
    ) -> Self {
        Self {
            registry,
            catalog,
            input,
            output,
            orchestrator: MergeOrchestrator::new(),
        }
    }

    pub fn with_orchestrator(
        registry: SourceRegistry,
        catalog: Box<dyn CatalogPort>,
        input: Box<dyn SourceInputPort>,
        output: Box<dyn MergeOutputPort>,
        orchestrator: MergeOrchestrator,
    ) -> Self {
        Self {
            registry,
            catalog,
            input,
            output,
            orchestrator,
        }
    }

    /// Run the full merge: seed the known-names set, ingest each enabled
    /// source in registry order, write one bundle per source, and report
    /// run statistics.
    ///
    /// Any catalog or source load failure aborts the run before output is
    /// written, so a failed run never leaves partial bundles behind.
    pub async fn run(&self) -> Result<MergeRunReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("Starting merge run {}", run_id);

        let existing = self.catalog.load_known_names().await?;
        info!("Loaded {} existing catalog names", existing.len());

        // Load every enabled source before merging; a malformed source
        // must fail the whole run while no output exists yet.
        let mut batches = Vec::new();
        for config in self.registry.enabled_sources() {
            let records = self.input.load_records(config).await?;
            info!(
                "Loaded {} records from source '{}'",
                records.len(),
                config.source_id
            );
            batches.push(SourceBatch {
                tag: config.source_id.clone(),
                taxonomy_name: config.taxonomy_name.clone(),
                taxonomy_description: config.taxonomy_description.clone(),
                fields: config.field_map.clone(),
                records,
            });
        }

        let outcome = self.orchestrator.merge(existing, &batches);

        // Bundles come back in processing order, matching the stats rows
        for (source, bundle) in outcome.stats.sources.iter().zip(&outcome.bundles) {
            self.output.write_bundle(&source.tag, bundle).await?;
        }

        metrics::merge::merged_names_total(outcome.stats.total_merged_names);

        let finished_at = Utc::now();
        info!(
            "Merge run {} complete: {} unique, {} duplicates removed, {} total merged names",
            run_id,
            outcome.stats.total_unique,
            outcome.stats.total_duplicates,
            outcome.stats.total_merged_names
        );

        Ok(MergeRunReport {
            run_id,
            started_at,
            finished_at,
            stats: outcome.stats,
        })
    }
}
