use clap::{Parser, Subcommand};
use tracing::info;

use qube_risk_merger::app::merge_use_case::{MergeRunReport, MergeUseCase};
use qube_risk_merger::infra::{FileCatalogAdapter, FileMergeOutputAdapter, FileSourceInputAdapter};
use qube_risk_merger::observability::{logging, metrics};
use qube_risk_merger::pipeline::merge_orchestrator::MergeOrchestrator;
use qube_risk_merger::pipeline::processing::dedup::{DedupEngine, DEFAULT_SIMILARITY_THRESHOLD};
use qube_risk_merger::registry::SourceRegistry;

#[derive(Parser)]
#[command(name = "qube-risk-merger")]
#[command(about = "Merges legacy risk taxonomies into the QUBE canonical catalog")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all enabled legacy sources into the catalog
    Merge {
        /// Directory of per-source registry configs
        #[arg(long, default_value = "registry/sources")]
        registry: String,
        /// Directory holding the existing catalog bundles
        #[arg(long, default_value = "data/catalog")]
        catalog: String,
        /// Directory holding raw legacy source files
        #[arg(long, default_value = "data/legacy")]
        data: String,
        /// Directory for merged output bundles
        #[arg(long, default_value = "data/merged")]
        output: String,
        /// Similarity threshold for near-duplicate names
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logging();
    if let Err(e) = metrics::init() {
        tracing::warn!("Metrics recorder not installed: {}", e);
    }

    match cli.command {
        Commands::Merge {
            registry,
            catalog,
            data,
            output,
            threshold,
        } => {
            let registry = SourceRegistry::load_from_directory(&registry)?;
            let source_count = registry.enabled_sources().len();
            println!("🔄 Merging {} legacy sources into the catalog", source_count);

            let use_case = MergeUseCase::with_orchestrator(
                registry,
                Box::new(FileCatalogAdapter::new(catalog)),
                Box::new(FileSourceInputAdapter::new(data)),
                Box::new(FileMergeOutputAdapter::new(output.clone())),
                MergeOrchestrator::with_engine(DedupEngine::with_threshold(threshold)),
            );

            let report = use_case.run().await?;
            info!("Merge run {} finished", report.run_id);
            print_summary(&report);
            println!("✅ Merge completed - bundles written to {}", output);
        }
    }

    Ok(())
}

fn print_summary(report: &MergeRunReport) {
    println!("=======================================================");
    println!("MERGE SUMMARY");
    println!("=======================================================");
    for source in &report.stats.sources {
        println!(
            "  {}: {} original, {} duplicates removed, {} unique",
            source.tag, source.original, source.duplicates, source.unique
        );
    }
    println!("  Total original:       {}", report.stats.total_original);
    println!("  Duplicates removed:   {}", report.stats.total_duplicates);
    println!("  Unique legacy risks:  {}", report.stats.total_unique);
    println!("  TOTAL MERGED NAMES:   {}", report.stats.total_merged_names);
    println!("=======================================================");
}
