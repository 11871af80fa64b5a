//! Host blob source
//!
//! Loads the blob to be carved. Files are memory-mapped so multi-gigabyte
//! installers do not have to be copied onto the heap before scanning.

use crate::core::{CarveError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

enum BlobData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Read-only bytes of a host blob, either mapped from a file or owned
///
/// # Example
///
/// ```ignore
/// let blob = HostBlob::open("/opt/diablo2-demo/DiabloIIDemo.exe")?;
/// let count = Carver::mpq().carve(&blob).count();
/// ```
pub struct HostBlob {
    path: Option<PathBuf>,
    data: BlobData,
}

impl HostBlob {
    /// Opens and maps a file
    ///
    /// Any failure to open, stat or map the file is reported as
    /// [`CarveError::SourceUnreadable`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unreadable = |source: io::Error| CarveError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let metadata = file.metadata().map_err(unreadable)?;

        if metadata.is_dir() {
            return Err(unreadable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )));
        }

        // Zero-length files cannot be mapped on every platform
        let data = if metadata.len() == 0 {
            BlobData::Owned(Vec::new())
        } else {
            // SAFETY: the mapping is read-only; the source file must not be
            // truncated by another process while a carve is running.
            let mmap = unsafe { Mmap::map(&file) }.map_err(unreadable)?;
            BlobData::Mapped(mmap)
        };

        tracing::debug!(path = %path.display(), size = metadata.len(), "Opened host blob");

        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// Wraps an in-memory buffer
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: None,
            data: BlobData::Owned(data.into()),
        }
    }

    /// Source path, if the blob was opened from a file
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match &self.data {
            BlobData::Mapped(mmap) => &mmap[..],
            BlobData::Owned(bytes) => bytes.as_slice(),
        }
    }
}

impl Deref for HostBlob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for HostBlob {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
