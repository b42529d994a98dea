use std::path::PathBuf;
use std::time::Duration;

/// A conference year as it appears in the listing URL and the output header.
pub type Year = u16;

/// Knobs for one run. Passed explicitly to the pipeline stages so nothing
/// relies on shared defaults between calls.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the open-access site, without a trailing slash.
    pub base_url: String,
    /// Conference years to tally, in output column order.
    pub years: Vec<Year>,
    /// How many top contributors to keep in the final ranking.
    pub top_n: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra attempts after a failed fetch. 0 means a single attempt.
    pub retries: u32,
    /// Sleep between per-year listing requests to respect the host's rate
    /// limits. Off only in tests against a local server.
    pub polite_delay: bool,
    /// Directory the spreadsheet is written to. None means the current dir.
    pub output_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            base_url: "https://openaccess.thecvf.com".to_string(),
            years: vec![2022, 2023, 2024],
            top_n: 3,
            timeout: Duration::from_secs(30),
            retries: 0,
            polite_delay: true,
            output_dir: None,
        }
    }
}

impl RunConfig {
    /// Listing page for one year, e.g.
    /// `https://openaccess.thecvf.com/CVPR2024?day=all`.
    pub fn listing_url(&self, year: Year) -> String {
        format!("{}/CVPR{}?day=all", self.base_url, year)
    }

    /// Full path of the output spreadsheet.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join("cvpr_top_contributors.csv"),
            None => PathBuf::from("cvpr_top_contributors.csv"),
        }
    }
}
