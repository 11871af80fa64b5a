//! Data Transfer Objects

mod extract_options;
mod extraction_report;

pub use extract_options::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, ExtractOptions};
pub use extraction_report::{ExtractionReport, ReportEntry};
