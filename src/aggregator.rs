use std::collections::HashMap;
use log::info;

use crate::config::Year;
use crate::extractor::PaperRecord;

/// Per-year paper counts keyed by author name, exactly as scraped.
/// First-encounter order is kept alongside the map so ranking ties stay
/// reproducible run to run.
#[derive(Debug, Default, Clone)]
pub struct YearCount {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl YearCount {
    pub fn new() -> Self {
        YearCount::default()
    }

    pub fn increment(&mut self, author: &str) {
        if !self.counts.contains_key(author) {
            self.order.push(author.to_string());
        }
        *self.counts.entry(author.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, author: &str) -> u32 {
        self.counts.get(author).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Authors in the order they were first seen.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// One contributor after the cross-year merge. `counts` holds one entry per
/// configured year, in configured order; `total` is their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorTotal {
    pub name: String,
    pub counts: Vec<(Year, u32)>,
    pub total: u32,
}

/// Folds one year's papers into author counts: +1 per (paper, author) pair,
/// so a co-author counts once per paper.
pub fn count_authors(papers: &[PaperRecord]) -> YearCount {
    let mut counts = YearCount::new();
    for paper in papers {
        for author in &paper.authors {
            counts.increment(author);
        }
    }
    counts
}

/// Merges one `YearCount` per configured year into per-author totals.
/// Covers every author appearing in any year; years where an author is
/// absent contribute 0. Output order is cross-year first-encounter order.
pub fn merge_years(years: &[Year], per_year: &[YearCount]) -> Vec<ContributorTotal> {
    // A mismatch would silently zip-truncate counts and break the
    // total == sum(counts) invariant, so it must hold in release too.
    assert_eq!(
        years.len(),
        per_year.len(),
        "one YearCount per configured year"
    );

    let mut merged: Vec<ContributorTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for year_count in per_year {
        for author in year_count.authors() {
            if !index.contains_key(author) {
                index.insert(author.to_string(), merged.len());
                let counts: Vec<(Year, u32)> = years
                    .iter()
                    .zip(per_year)
                    .map(|(&year, yc)| (year, yc.get(author)))
                    .collect();
                let total = counts.iter().map(|&(_, n)| n).sum();
                merged.push(ContributorTotal {
                    name: author.to_string(),
                    counts,
                    total,
                });
            }
        }
    }

    info!("Merged {} unique authors across {} years", merged.len(), years.len());
    merged
}

/// Stable descending sort by total, truncated to `top_n`. Equal totals keep
/// their merge order.
pub fn rank(mut merged: Vec<ContributorTotal>, top_n: usize) -> Vec<ContributorTotal> {
    merged.sort_by(|a, b| b.total.cmp(&a.total));
    merged.truncate(top_n);
    merged
}
