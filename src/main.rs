use cvpr_scraper_lib::{aggregator, exporter, logger, pipeline};
use cvpr_scraper_lib::{Fetcher, RunConfig};

use std::error::Error;
use std::path::PathBuf;
use clap::Parser;
use log::{info, warn};

/// Tallies per-author paper counts from the CVPR open-access listings and
/// writes the top contributors to a CSV spreadsheet.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory the spreadsheet is written to (defaults to the current dir)
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();

    let config = RunConfig {
        output_dir: args.output_dir,
        ..RunConfig::default()
    };

    info!(
        "Starting CVPR contributor analysis for years {:?} (top {})...",
        config.years, config.top_n
    );

    let fetcher = Fetcher::new(&config);
    let harvest = pipeline::collect_year_counts(&config, &fetcher)?;
    if harvest.failed_years > 0 {
        warn!(
            "{} of {} years could not be fetched and count as empty",
            harvest.failed_years,
            config.years.len()
        );
    }

    let merged = aggregator::merge_years(&config.years, &harvest.per_year);
    let ranked = aggregator::rank(merged, config.top_n);

    let output_path = config.output_path();
    exporter::export_csv(&output_path, &config.years, &ranked)?;

    info!(
        "Analysis complete! Top {} contributors written to {:?}",
        ranked.len(),
        output_path
    );
    Ok(())
}
