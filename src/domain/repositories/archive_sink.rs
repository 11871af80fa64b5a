//! Archive sink trait
//!
//! Defines the interface for materializing carved archives.

use crate::core::Result;
use crate::domain::entities::ExtractedArchive;
use std::path::PathBuf;

/// Result of writing a single archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Discovery index of the archive
    pub index: usize,
    /// Where the archive was saved
    pub saved_path: PathBuf,
    /// Bytes written
    pub saved_size: u64,
}

/// Destination for carved archives
///
/// The carver itself never touches storage; everything it accepts is handed
/// to a sink together with the archive's bytes.
///
/// # Example
///
/// ```ignore
/// let sink = DirectorySink::create("/tmp/mpqs", "d2demo", "mpq")?;
/// for archive in carver.carve(&blob) {
///     let data = archive.bytes(&blob).unwrap();
///     let result = sink.write(&archive, data)?;
///     println!("Saved to: {}", result.saved_path.display());
/// }
/// ```
pub trait ArchiveSink: Send + Sync {
    /// Writes one archive; `data` is exactly the archive's byte range
    fn write(&self, archive: &ExtractedArchive, data: &[u8]) -> Result<WriteResult>;

    /// Returns the number of archives written so far
    fn files_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}
