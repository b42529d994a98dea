use scraper::{ElementRef, Html, Selector};
use log::{info, warn};

use crate::config::Year;

/// One paper block from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: String,
    pub authors: Vec<String>,
}

/// Everything pulled out of one listing page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub papers: Vec<PaperRecord>,
    /// Blocks that had no usable author list.
    pub skipped: usize,
}

/// Parses a CVPR open-access listing page. Each paper is a `dt.ptitle`
/// element; its author list is the first following `dd` sibling before the
/// next `dt`. Malformed blocks are skipped and counted, never fatal. A page
/// with no matching blocks yields an empty extraction.
pub fn extract_papers(html: &str, year: Year) -> Extraction {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("dt.ptitle").unwrap();

    let mut extraction = Extraction::default();

    for entry in document.select(&title_selector) {
        let title = entry.text().collect::<String>().trim().to_string();

        let authors = match author_list(entry) {
            Some(authors) if !authors.is_empty() => authors,
            _ => {
                warn!("No authors found for paper: {}", title);
                extraction.skipped += 1;
                continue;
            }
        };

        extraction.papers.push(PaperRecord { title, authors });
    }

    if extraction.papers.is_empty() {
        warn!("No paper entries found for year {}", year);
    } else {
        info!(
            "Extracted {} papers for year {} ({} blocks skipped)",
            extraction.papers.len(),
            year,
            extraction.skipped
        );
    }

    extraction
}

/// Comma-separated author names from the block's `dd` sibling, trimmed,
/// empties dropped. None if the block has no `dd` of its own.
fn author_list(entry: ElementRef) -> Option<Vec<String>> {
    for sibling in entry.next_siblings() {
        let Some(element) = ElementRef::wrap(sibling) else {
            continue;
        };
        match element.value().name() {
            "dd" => {
                let text = element.text().collect::<String>();
                let authors = text
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect();
                return Some(authors);
            }
            // Next paper started before any author list.
            "dt" => return None,
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAPERS: &str = r#"
        <html><body><dl>
            <dt class="ptitle"><a href="/p1.html">Learning to See</a></dt>
            <dd>Alice, Bob</dd>
            <dd>[pdf] [supp]</dd>
            <dt class="ptitle"><a href="/p2.html">Seeing to Learn</a></dt>
            <dd>Bob</dd>
        </dl></body></html>
    "#;

    #[test]
    fn extracts_titles_and_split_authors() {
        let extraction = extract_papers(TWO_PAPERS, 2024);

        assert_eq!(extraction.skipped, 0);
        assert_eq!(
            extraction.papers,
            vec![
                PaperRecord {
                    title: "Learning to See".to_string(),
                    authors: vec!["Alice".to_string(), "Bob".to_string()],
                },
                PaperRecord {
                    title: "Seeing to Learn".to_string(),
                    authors: vec!["Bob".to_string()],
                },
            ]
        );
    }

    #[test]
    fn trims_whitespace_per_name() {
        let html = r#"<dl>
            <dt class="ptitle">Paper</dt>
            <dd>  Alice Liddell ,   Bob Hart  </dd>
        </dl>"#;

        let extraction = extract_papers(html, 2022);
        assert_eq!(
            extraction.papers[0].authors,
            vec!["Alice Liddell".to_string(), "Bob Hart".to_string()]
        );
    }

    #[test]
    fn malformed_block_is_skipped_and_counted() {
        let html = r#"<dl>
            <dt class="ptitle">Orphan Paper</dt>
            <dt class="ptitle">Good Paper</dt>
            <dd>Carol</dd>
        </dl>"#;

        let extraction = extract_papers(html, 2023);

        assert_eq!(extraction.skipped, 1);
        assert_eq!(extraction.papers.len(), 1);
        assert_eq!(extraction.papers[0].title, "Good Paper");
    }

    #[test]
    fn no_blocks_yields_empty_not_failure() {
        let extraction = extract_papers("<html><body><p>nothing here</p></body></html>", 2022);
        assert!(extraction.papers.is_empty());
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_papers(TWO_PAPERS, 2024);
        let second = extract_papers(TWO_PAPERS, 2024);
        assert_eq!(first, second);
    }
}
