//! Metrics helpers for the merge pipeline.
//!
//! Thin wrappers over the `metrics` facade so call sites stay free of
//! metric-name strings. Names follow Prometheus conventions.

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Errors if a recorder is already
/// installed for this process.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    let _ = HANDLE.set(handle);
    Ok(())
}

/// Render the current metric values in Prometheus text format.
pub fn render() -> Option<String> {
    HANDLE.get().map(|state| state.render())
}

// ============================================================================
// Catalog Metrics
// ============================================================================

pub mod catalog {
    /// Record how many names were seeded from the existing catalog
    pub fn names_seeded(count: usize) {
        ::metrics::gauge!("qube_merge_catalog_names_seeded").set(count as f64);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    /// Record that a raw record was normalized for a source
    pub fn record_normalized(source: &str) {
        ::metrics::counter!("qube_merge_normalize_records_total", "source" => source.to_string())
            .increment(1);
    }
}

// ============================================================================
// Dedup Metrics
// ============================================================================

pub mod dedup {
    /// Record a near-duplicate rejection for a source
    pub fn duplicate_detected(source: &str) {
        ::metrics::counter!("qube_merge_dedup_duplicates_total", "source" => source.to_string())
            .increment(1);
    }

    /// Record an accepted record for a source
    pub fn record_accepted(source: &str) {
        ::metrics::counter!("qube_merge_dedup_accepted_total", "source" => source.to_string())
            .increment(1);
    }
}

// ============================================================================
// Merge Metrics
// ============================================================================

pub mod merge {
    /// Record that a source batch finished ingestion
    pub fn source_processed(source: &str, batch_size: usize) {
        ::metrics::counter!("qube_merge_sources_processed_total", "source" => source.to_string())
            .increment(1);
        ::metrics::histogram!("qube_merge_source_batch_size").record(batch_size as f64);
    }

    /// Record the merged catalog size at the end of a run
    pub fn merged_names_total(count: usize) {
        ::metrics::gauge!("qube_merge_known_names_total").set(count as f64);
    }
}
