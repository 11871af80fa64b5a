//! Archive carver
//!
//! Scans a host blob for archive signatures and yields the byte range of
//! every candidate whose header passes validation.

use crate::core::{CarveError, Result};
use crate::domain::entities::{CandidateHeader, ExtractedArchive, HeaderLayout};
use crate::domain::services::validator::{HeaderValidator, Rejection, ThresholdValidator};
use memchr::memmem;
use std::iter::FusedIterator;

/// Bytes the cursor advances past a match, accepted or not
pub const DEFAULT_SCAN_STEP: usize = 4;

/// Locates embedded archives in a host blob
///
/// The carver is immutable and holds no per-scan state, so one instance can
/// serve any number of scans, including concurrent ones over different blobs.
///
/// After every signature match the cursor moves a fixed `step` past the
/// match, never past the declared archive size. Archives can sit inside the
/// declared extent of an earlier one and must still be found.
///
/// # Example
///
/// ```
/// use mpqcarve::domain::services::Carver;
///
/// let mut blob = vec![0u8; 64];
/// blob.extend_from_slice(b"MPQ\x1A");
/// blob.extend_from_slice(&32u32.to_le_bytes());
/// blob.extend_from_slice(&4096u32.to_le_bytes());
/// blob.resize(64 + 2048, 0);
///
/// let archives: Vec<_> = Carver::mpq().carve(&blob).collect();
/// assert_eq!(archives.len(), 1);
/// assert_eq!(archives[0].start(), 64);
/// assert_eq!(archives[0].length(), 2048);
/// ```
#[derive(Debug, Clone)]
pub struct Carver<V = ThresholdValidator> {
    layout: HeaderLayout,
    validator: V,
    step: usize,
}

impl Carver {
    /// Carver for MPQ v1 archives: `MPQ\x1A`, header size 32, more than 1000 bytes
    pub fn mpq() -> Self {
        Self::new(HeaderLayout::mpq_v1(), ThresholdValidator::default())
    }
}

impl Default for Carver {
    fn default() -> Self {
        Self::mpq()
    }
}

impl<V: HeaderValidator> Carver<V> {
    pub fn new(layout: HeaderLayout, validator: V) -> Self {
        Self {
            layout,
            validator,
            step: DEFAULT_SCAN_STEP,
        }
    }

    /// Overrides the cursor step; a zero step would never terminate
    pub fn with_step(mut self, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(CarveError::InvalidPolicy(
                "scan step must be at least one byte".to_string(),
            ));
        }
        self.step = step;
        Ok(self)
    }

    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Starts a lazy scan over `blob`
    ///
    /// Each call starts from offset zero with a fresh index counter.
    pub fn carve<'a>(&'a self, blob: &'a [u8]) -> Carves<'a, V> {
        Carves {
            carver: self,
            blob,
            finder: memmem::Finder::new(self.layout.signature().as_bytes()),
            pos: 0,
            next_index: 0,
        }
    }

    /// Reads and validates the candidate header at a signature match
    pub fn inspect(
        &self,
        blob: &[u8],
        offset: usize,
    ) -> std::result::Result<CandidateHeader, Rejection> {
        let header = self
            .layout
            .read(blob, offset)
            .ok_or(Rejection::HeaderTooShort {
                available: blob.len().saturating_sub(offset),
                needed: self.layout.min_len(),
            })?;

        self.validator.validate(&header)?;
        Ok(header)
    }
}

/// Lazy sequence of accepted archives, in increasing offset order
pub struct Carves<'a, V> {
    carver: &'a Carver<V>,
    blob: &'a [u8],
    finder: memmem::Finder<'a>,
    pos: usize,
    next_index: usize,
}

impl<V> Carves<'_, V> {
    /// Number of archives yielded so far
    pub fn accepted(&self) -> usize {
        self.next_index
    }

    /// Offset the next search starts from
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<V: HeaderValidator> Iterator for Carves<'_, V> {
    type Item = ExtractedArchive;

    fn next(&mut self) -> Option<ExtractedArchive> {
        while self.pos < self.blob.len() {
            let Some(found) = self.finder.find(&self.blob[self.pos..]) else {
                self.pos = self.blob.len();
                break;
            };

            let offset = self.pos + found;
            self.pos = offset.saturating_add(self.carver.step);

            let header = match self.carver.inspect(self.blob, offset) {
                Ok(header) => header,
                Err(rejection) => {
                    tracing::debug!(offset, %rejection, "Skipping signature match");
                    continue;
                }
            };

            let remaining = self.blob.len() - offset;
            let length = usize::try_from(header.archive_size)
                .unwrap_or(usize::MAX)
                .min(remaining);

            if length == 0 {
                tracing::debug!(offset, rejection = %Rejection::Empty, "Skipping signature match");
                continue;
            }

            let archive =
                ExtractedArchive::new(self.next_index, offset, length, header.archive_size);
            self.next_index += 1;

            if archive.is_truncated() {
                tracing::warn!(
                    offset,
                    declared = header.archive_size,
                    available = length,
                    "Archive runs past end of host blob, clamping"
                );
            }

            return Some(archive);
        }

        None
    }
}

impl<V: HeaderValidator> FusedIterator for Carves<'_, V> {}
