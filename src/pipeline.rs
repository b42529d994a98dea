use log::{error, info};
use thiserror::Error;

use crate::aggregator::{self, YearCount};
use crate::config::RunConfig;
use crate::delay_manager;
use crate::extractor;
use crate::fetcher::Fetcher;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("none of the {0} configured years could be fetched")]
    AllYearsFailed(usize),
}

/// One `YearCount` per configured year, in year order.
#[derive(Debug)]
pub struct YearHarvest {
    pub per_year: Vec<YearCount>,
    /// Years whose fetch failed; these hold an empty count above.
    pub failed_years: usize,
}

/// Fetches, extracts and counts each configured year in sequence. A year
/// whose fetch fails contributes an empty `YearCount` and the run carries
/// on; only when every year fails is the whole run unsalvageable.
pub fn collect_year_counts(
    config: &RunConfig,
    fetcher: &Fetcher,
) -> Result<YearHarvest, PipelineError> {
    let mut per_year: Vec<YearCount> = Vec::with_capacity(config.years.len());
    let mut failed_years = 0;

    for (i, &year) in config.years.iter().enumerate() {
        // Delay between listing requests to respect the host's rate limits.
        if i > 0 && config.polite_delay {
            delay_manager::polite_delay();
        }

        info!("Processing CVPR {}...", year);
        match fetcher.fetch(&config.listing_url(year)) {
            Ok(html) => {
                let extraction = extractor::extract_papers(&html, year);
                let counts = aggregator::count_authors(&extraction.papers);
                info!("Found {} unique authors for CVPR {}", counts.len(), year);
                per_year.push(counts);
            }
            Err(e) => {
                error!("Failed to fetch CVPR {} listing: {}", year, e);
                failed_years += 1;
                per_year.push(YearCount::new());
            }
        }
    }

    if failed_years == config.years.len() {
        return Err(PipelineError::AllYearsFailed(config.years.len()));
    }

    Ok(YearHarvest {
        per_year,
        failed_years,
    })
}
