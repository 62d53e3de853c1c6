use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{RiskRecord, TaxonomyBundle, TaxonomyDescriptor};
use crate::observability::metrics;
use crate::pipeline::processing::dedup::{DedupEngine, KnownNames};
use crate::pipeline::processing::normalize::{normalize, taxonomy_id, FieldMap};

/// One legacy source ready for ingestion: its identity, field vocabulary
/// and raw records in input order.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub tag: String,
    pub taxonomy_name: String,
    pub taxonomy_description: String,
    pub fields: FieldMap,
    pub records: Vec<Value>,
}

/// Per-source merge counters
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceStats {
    pub tag: String,
    pub original: usize,
    pub duplicates: usize,
    pub unique: usize,
}

/// Aggregate counters for one merge run
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MergeStats {
    pub sources: Vec<SourceStats>,
    pub total_original: usize,
    pub total_duplicates: usize,
    pub total_unique: usize,
    /// Catalog names plus every acceptance from this run
    pub total_merged_names: usize,
}

/// Output of one merge run: one bundle per source, in processing order,
/// plus the run counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub bundles: Vec<TaxonomyBundle>,
    pub stats: MergeStats,
}

/// Sequences the merge phases over in-memory inputs: seed the known-names
/// set from the existing catalog, ingest each source in order, assemble
/// one bundle per source and compute run statistics.
pub struct MergeOrchestrator {
    dedup: DedupEngine,
}

impl MergeOrchestrator {
    pub fn new() -> Self {
        Self {
            dedup: DedupEngine::new(),
        }
    }

    pub fn with_engine(dedup: DedupEngine) -> Self {
        Self { dedup }
    }

    /// Run the full merge.
    ///
    /// Every accepted raw name enters the known set before the next
    /// candidate is tested, so later records dedup against earlier
    /// acceptances from the same run, within and across sources.
    pub fn merge(&self, existing_names: Vec<String>, sources: &[SourceBatch]) -> MergeOutcome {
        let mut known = KnownNames::seed(existing_names);
        info!("Seeded {} existing catalog names", known.len());
        metrics::catalog::names_seeded(known.len());

        let mut bundles = Vec::with_capacity(sources.len());
        let mut per_source = Vec::with_capacity(sources.len());

        for batch in sources {
            let (bundle, stats) = self.ingest_source(batch, &mut known);
            info!(
                "{}: {} unique, {} duplicates removed",
                batch.tag, stats.unique, stats.duplicates
            );
            metrics::merge::source_processed(&batch.tag, stats.original);
            bundles.push(bundle);
            per_source.push(stats);
        }

        let stats = MergeStats {
            total_original: per_source.iter().map(|s| s.original).sum(),
            total_duplicates: per_source.iter().map(|s| s.duplicates).sum(),
            total_unique: per_source.iter().map(|s| s.unique).sum(),
            total_merged_names: known.len(),
            sources: per_source,
        };

        MergeOutcome { bundles, stats }
    }

    /// Ingest one source: test each raw name against the known set in
    /// input order, normalizing and keeping the non-duplicates.
    ///
    /// Ordinals track the raw input position, so records dropped as
    /// duplicates leave gaps in the surviving id sequence.
    fn ingest_source(
        &self,
        batch: &SourceBatch,
        known: &mut KnownNames,
    ) -> (TaxonomyBundle, SourceStats) {
        let mut accepted: Vec<RiskRecord> = Vec::new();
        let mut duplicates = 0usize;

        for (index, raw) in batch.records.iter().enumerate() {
            let ordinal = index + 1;
            let name = batch.fields.summary_of(raw);

            if let Some(matched) = self.dedup.find_duplicate(name, known) {
                debug!("{}: duplicate '{}' ~ '{}'", batch.tag, name, matched);
                duplicates += 1;
                metrics::dedup::duplicate_detected(&batch.tag);
                continue;
            }

            let record = normalize(raw, &batch.fields, &batch.tag, ordinal);
            metrics::normalize::record_normalized(&batch.tag);
            known.insert(name);
            accepted.push(record);
            metrics::dedup::record_accepted(&batch.tag);
        }

        let stats = SourceStats {
            tag: batch.tag.clone(),
            original: batch.records.len(),
            duplicates,
            unique: accepted.len(),
        };

        let descriptor = TaxonomyDescriptor {
            id: taxonomy_id(&batch.tag),
            name: batch.taxonomy_name.clone(),
            description: batch.taxonomy_description.clone(),
        };

        (TaxonomyBundle::new(descriptor, accepted), stats)
    }
}

impl Default for MergeOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
