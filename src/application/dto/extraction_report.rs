//! Extraction report DTO

use crate::domain::entities::ExtractedArchive;
use crate::domain::repositories::WriteResult;
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

/// One archive that was carved and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub archive: ExtractedArchive,
    pub saved_path: PathBuf,
}

/// Result of an extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Host blob path, when it came from a file
    pub source_path: Option<PathBuf>,
    /// Output directory, when written to the file system
    pub output_dir: Option<PathBuf>,
    /// Size of the host blob
    pub bytes_scanned: u64,
    /// Archives written, in discovery order
    pub entries: Vec<ReportEntry>,
    /// Duration of the run
    pub duration: Duration,
}

impl ExtractionReport {
    pub fn new(source_path: Option<PathBuf>, bytes_scanned: u64) -> Self {
        Self {
            source_path,
            bytes_scanned,
            ..Default::default()
        }
    }

    /// Records a written archive
    pub fn add_written(&mut self, archive: ExtractedArchive, result: &WriteResult) {
        self.entries.push(ReportEntry {
            archive,
            saved_path: result.saved_path.clone(),
        });
    }

    /// Number of archives extracted
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of archives clamped at the end of the host blob
    pub fn truncated(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.archive.is_truncated())
            .count()
    }

    /// Total bytes extracted
    pub fn bytes_extracted(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.archive.length() as u64)
            .sum()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        let _ = write!(summary, "Extracted {} MPQ archive(s)", self.total());
        if let Some(dir) = &self.output_dir {
            let _ = write!(summary, " to {}", dir.display());
        }
        summary.push('\n');

        if self.truncated() > 0 {
            let _ = writeln!(
                summary,
                "{} archive(s) truncated at end of input",
                self.truncated()
            );
        }

        summary
    }
}
