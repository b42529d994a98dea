use std::fs;
use std::path::{Path, PathBuf};
use log::{error, info};
use thiserror::Error;

use crate::aggregator::ContributorTotal;
use crate::config::Year;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error writing spreadsheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error writing spreadsheet: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the ranked contributors to `path` as CSV with header
/// `Author, <year...>, Total`. The data goes to a sibling temp file first
/// and is renamed into place, so a failed run never leaves a partial file
/// behind.
pub fn export_csv(
    path: &Path,
    years: &[Year],
    contributors: &[ContributorTotal],
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_sibling(path);
    match write_rows(&tmp_path, years, contributors) {
        Ok(()) => {
            fs::rename(&tmp_path, path)?;
            info!("Results saved to {:?} ({} rows)", path, contributors.len());
            Ok(())
        }
        Err(e) => {
            error!("Failed to write spreadsheet {:?}: {}", path, e);
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

// The pid keeps concurrent runs against the same directory from clobbering
// each other's temp file.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.csv".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn write_rows(
    path: &Path,
    years: &[Year],
    contributors: &[ContributorTotal],
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["Author".to_string()];
    header.extend(years.iter().map(|y| y.to_string()));
    header.push("Total".to_string());
    writer.write_record(&header)?;

    for contributor in contributors {
        let mut row = vec![contributor.name.clone()];
        row.extend(contributor.counts.iter().map(|&(_, n)| n.to_string()));
        row.push(contributor.total.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
