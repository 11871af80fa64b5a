//! Directory sink implementation
//!
//! Writes each carved archive to its own file in an output directory.

use crate::core::{CarveError, Result};
use crate::domain::entities::ExtractedArchive;
use crate::domain::repositories::{ArchiveSink, WriteResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system sink
///
/// Files are named `{prefix}_{index}.{extension}`. Existing files with the
/// same name are overwritten.
pub struct DirectorySink {
    output_dir: PathBuf,
    prefix: String,
    extension: String,
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl DirectorySink {
    /// Creates the sink, creating `output_dir` and its parents if absent
    pub fn create(
        output_dir: impl AsRef<Path>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self> {
        let output_dir = output_dir.as_ref();

        fs::create_dir_all(output_dir).map_err(|source| CarveError::DestinationUnwritable {
            path: output_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            prefix: prefix.into(),
            extension: extension.into(),
            files_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates the output path for an archive
    pub fn path_for(&self, archive: &ExtractedArchive) -> PathBuf {
        self.output_dir
            .join(archive.file_name(&self.prefix, &self.extension))
    }
}

impl ArchiveSink for DirectorySink {
    fn write(&self, archive: &ExtractedArchive, data: &[u8]) -> Result<WriteResult> {
        let output_path = self.path_for(archive);
        let unwritable = |source| CarveError::DestinationUnwritable {
            path: output_path.clone(),
            source,
        };

        let mut file = File::create(&output_path).map_err(unwritable)?;
        file.write_all(data).map_err(unwritable)?;
        file.sync_all().map_err(unwritable)?;

        let saved_size = data.len() as u64;
        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(saved_size, Ordering::Relaxed);

        Ok(WriteResult {
            index: archive.index(),
            saved_path: output_path,
            saved_size,
        })
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}
