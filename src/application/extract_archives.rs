//! Extract archives use case
//!
//! Carves a host blob and hands every accepted archive to a sink.
//!
//! A failed write aborts the run: the error is returned immediately and no
//! further archives are written. Files written before the failure stay on
//! disk.

use crate::application::dto::{ExtractOptions, ExtractionReport};
use crate::core::Result;
use crate::domain::entities::ExtractedArchive;
use crate::domain::repositories::{ArchiveSink, WriteResult};
use crate::domain::services::{Carver, HeaderValidator, ThresholdValidator};
use crate::infrastructure::persistence::DirectorySink;
use crate::infrastructure::source::HostBlob;
use std::time::Instant;

/// Called once per archive after it has been written
pub type ExtractProgressCallback<'a> = &'a dyn Fn(&ExtractedArchive, &WriteResult);

/// Extract archives use case
pub struct ExtractArchivesUseCase<V = ThresholdValidator> {
    carver: Carver<V>,
}

impl ExtractArchivesUseCase {
    /// Creates the use case with the MPQ v1 carver
    pub fn mpq() -> Self {
        Self::new(Carver::mpq())
    }
}

impl Default for ExtractArchivesUseCase {
    fn default() -> Self {
        Self::mpq()
    }
}

impl<V: HeaderValidator> ExtractArchivesUseCase<V> {
    pub fn new(carver: Carver<V>) -> Self {
        Self { carver }
    }

    pub fn carver(&self) -> &Carver<V> {
        &self.carver
    }

    /// Carves `blob` and writes every accepted archive to `sink`
    pub fn execute<S: ArchiveSink>(
        &self,
        blob: &HostBlob,
        sink: &S,
        progress: Option<ExtractProgressCallback<'_>>,
    ) -> Result<ExtractionReport> {
        let start_time = Instant::now();
        let data = blob.as_slice();

        let mut report =
            ExtractionReport::new(blob.path().map(|p| p.to_path_buf()), data.len() as u64);

        tracing::info!(size = data.len(), "Scanning host blob for archives");

        for archive in self.carver.carve(data) {
            let result = sink.write(&archive, &data[archive.range()]).inspect_err(|e| {
                tracing::error!(index = archive.index(), error = %e, "Aborting extraction");
            })?;

            tracing::info!(
                index = archive.index(),
                offset = archive.start(),
                size = archive.length(),
                path = %result.saved_path.display(),
                "Extracted archive"
            );

            if let Some(callback) = progress {
                callback(&archive, &result);
            }

            report.add_written(archive, &result);
        }

        report.duration = start_time.elapsed();

        tracing::info!(
            total = report.total(),
            truncated = report.truncated(),
            "Extraction complete in {:.2}s",
            report.duration.as_secs_f64()
        );

        Ok(report)
    }

    /// Opens `options.source`, creates `options.output_dir` and extracts
    ///
    /// The source is read before the output directory is touched, so an
    /// unreadable source leaves no trace on disk.
    pub fn run(
        &self,
        options: &ExtractOptions,
        progress: Option<ExtractProgressCallback<'_>>,
    ) -> Result<ExtractionReport> {
        let blob = HostBlob::open(&options.source)?;
        let sink = DirectorySink::create(
            &options.output_dir,
            options.prefix.as_str(),
            options.extension.as_str(),
        )?;

        let mut report = self.execute(&blob, &sink, progress)?;
        report.output_dir = Some(sink.output_dir().to_path_buf());
        Ok(report)
    }
}
