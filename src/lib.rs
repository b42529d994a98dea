pub mod config;
pub mod fetcher;
pub mod extractor;
pub mod aggregator;
pub mod exporter;
pub mod pipeline;
pub mod delay_manager;
pub mod logger;

// Exporting types for convenience
pub use config::{RunConfig, Year};
pub use fetcher::{FetchError, Fetcher};
pub use extractor::{Extraction, PaperRecord};
pub use aggregator::{ContributorTotal, YearCount};
pub use exporter::ExportError;
pub use pipeline::{PipelineError, YearHarvest};
