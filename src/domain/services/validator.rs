//! Header validation policy
//!
//! Decides whether a signature match is a genuine archive header or an
//! incidental occurrence of the magic bytes inside unrelated data.

use crate::domain::entities::CandidateHeader;
use thiserror::Error;

/// Header size of an MPQ v1 archive, the only version accepted by default
pub const MPQ_V1_HEADER_SIZE: u32 = 32;

/// Declared archive sizes at or below this are treated as corrupt
pub const MIN_ARCHIVE_SIZE: u32 = 1000;

/// Why a signature match was not accepted as an archive
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("only {available} bytes left, header needs {needed}")]
    HeaderTooShort { available: usize, needed: usize },

    #[error("header size {found} (expected {expected})")]
    UnexpectedHeaderSize { found: u32, expected: u32 },

    #[error("archive size {declared} not above floor {floor}")]
    ArchiveTooSmall { declared: u32, floor: u32 },

    #[error("archive has no bytes")]
    Empty,

    #[error("rejected by custom predicate")]
    Predicate,
}

/// Accepts or rejects a candidate header
///
/// Implementations must be pure: the carver may evaluate the same header
/// more than once across restarts and expects the same verdict.
///
/// Any `Fn(&CandidateHeader) -> bool` closure is a validator too.
///
/// # Example
///
/// ```
/// use mpqcarve::domain::entities::{CandidateHeader, HeaderLayout};
/// use mpqcarve::domain::services::Carver;
///
/// let carver = Carver::new(HeaderLayout::mpq_v1(), |h: &CandidateHeader| {
///     h.header_size >= 32 && h.archive_size > 0
/// });
/// assert_eq!(carver.carve(b"no archives here").count(), 0);
/// ```
pub trait HeaderValidator: Send + Sync {
    fn validate(&self, header: &CandidateHeader) -> Result<(), Rejection>;
}

impl<F> HeaderValidator for F
where
    F: Fn(&CandidateHeader) -> bool + Send + Sync,
{
    fn validate(&self, header: &CandidateHeader) -> Result<(), Rejection> {
        if self(header) {
            Ok(())
        } else {
            Err(Rejection::Predicate)
        }
    }
}

/// Exact header size plus a strict lower bound on the archive size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdValidator {
    required_header_size: u32,
    min_archive_size: u32,
}

impl ThresholdValidator {
    pub fn new(required_header_size: u32, min_archive_size: u32) -> Self {
        Self {
            required_header_size,
            min_archive_size,
        }
    }

    pub fn required_header_size(&self) -> u32 {
        self.required_header_size
    }

    /// Exclusive floor: accepted archives declare strictly more bytes
    pub fn min_archive_size(&self) -> u32 {
        self.min_archive_size
    }
}

impl Default for ThresholdValidator {
    fn default() -> Self {
        Self::new(MPQ_V1_HEADER_SIZE, MIN_ARCHIVE_SIZE)
    }
}

impl HeaderValidator for ThresholdValidator {
    fn validate(&self, header: &CandidateHeader) -> Result<(), Rejection> {
        if header.header_size != self.required_header_size {
            return Err(Rejection::UnexpectedHeaderSize {
                found: header.header_size,
                expected: self.required_header_size,
            });
        }

        if header.archive_size <= self.min_archive_size {
            return Err(Rejection::ArchiveTooSmall {
                declared: header.archive_size,
                floor: self.min_archive_size,
            });
        }

        Ok(())
    }
}
