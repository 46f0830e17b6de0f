use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use chromatch_rs::logger;
use chromatch_rs::retrieval::{DatasetEntry, SearchConfig, SimilaritySearchPipeline};

#[derive(Parser)]
#[command(name = "chromatch")]
#[command(version, about = "Color-histogram image similarity search", long_about = None)]
struct Cli {
    /// Query image (plain-text pixmap)
    query: PathBuf,

    /// Directory holding the dataset
    dataset: PathBuf,

    /// Number of results to print
    #[arg(short = 'k', long, default_value_t = 5)]
    top: usize,

    /// Bits per channel for histogram binning
    #[arg(long, default_value_t = 3)]
    bin_bits: u32,

    /// Treat dataset files as precomputed .txt histograms instead of images
    #[arg(long)]
    precomputed: bool,

    /// Print a per-step timing summary
    #[arg(long)]
    timings: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    let config = SearchConfig::builder()
        .bin_bits(cli.bin_bits)
        .result_count(cli.top)
        .build();
    let pipeline = SimilaritySearchPipeline::new(config);

    let dataset = collect_dataset(&cli.dataset, cli.precomputed)?;
    info!(
        entries = dataset.len(),
        "Dataset loaded from {}",
        cli.dataset.display()
    );

    let ranked = if cli.timings {
        let query_data = std::fs::read(&cli.query)
            .with_context(|| format!("failed to read query image {}", cli.query.display()))?;
        let (ranked, timings) = pipeline.search_with_timings(&query_data, &dataset)?;
        timings.print_summary();
        ranked
    } else {
        pipeline.search_file(&cli.query, &dataset)?
    };

    println!("The {} most similar images are:", ranked.len());
    for (position, found) in ranked.iter().enumerate() {
        println!(
            "{}: {} ({:.2}%)",
            position + 1,
            found.name,
            found.score * 100.0
        );
    }

    Ok(())
}

/// Builds dataset entries from a directory listing. The retrieval core
/// never sees the directory itself, only the entries.
fn collect_dataset(dir: &Path, precomputed: bool) -> anyhow::Result<Vec<DatasetEntry>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list dataset directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut dataset = Vec::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if precomputed {
            if name.ends_with(".txt") {
                dataset.push(DatasetEntry::histogram_file(name, &path));
            }
        } else {
            dataset.push(DatasetEntry::image_file(name, &path));
        }
    }
    Ok(dataset)
}
