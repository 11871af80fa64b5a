//! Signature and header layout entities
//!
//! A signature marks where a candidate archive may start; the header layout
//! says where the two size fields sit relative to that match.

use crate::core::{CarveError, Result};

/// Magic bytes of an MPQ archive header: `MPQ\x1A`
pub const MPQ_SIGNATURE: [u8; 4] = *b"MPQ\x1A";

/// Offset of the `header_size` field from the start of an MPQ header
pub const MPQ_HEADER_SIZE_OFFSET: usize = 4;

/// Offset of the `archive_size` field from the start of an MPQ header
pub const MPQ_ARCHIVE_SIZE_OFFSET: usize = 8;

const SIZE_FIELD_LEN: usize = 4;

/// The magic byte pattern identifying the start of a candidate archive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    /// Creates a signature from arbitrary magic bytes
    ///
    /// Fails with [`CarveError::InvalidPolicy`] when `bytes` is empty, since
    /// an empty pattern matches at every offset.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CarveError::InvalidPolicy(
                "signature must not be empty".to_string(),
            ));
        }
        Ok(Self { bytes })
    }

    /// The MPQ signature `MPQ\x1A`
    pub fn mpq() -> Self {
        Self {
            bytes: MPQ_SIGNATURE.to_vec(),
        }
    }

    /// Returns the magic bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the pattern length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks whether `data` carries this signature at `offset`
    pub fn matches_at(&self, data: &[u8], offset: usize) -> bool {
        offset
            .checked_add(self.bytes.len())
            .and_then(|end| data.get(offset..end))
            .is_some_and(|window| window == self.bytes.as_slice())
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::mpq()
    }
}

/// Size fields read from a candidate header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateHeader {
    /// Offset of the signature match within the host blob
    pub offset: usize,
    /// Declared header length in bytes
    pub header_size: u32,
    /// Declared archive length in bytes, counted from the signature
    pub archive_size: u32,
}

/// Where the size fields of a candidate header live
///
/// Both fields are little-endian `u32` values at fixed offsets from the
/// signature match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    signature: Signature,
    header_size_offset: usize,
    archive_size_offset: usize,
}

impl HeaderLayout {
    pub fn new(signature: Signature, header_size_offset: usize, archive_size_offset: usize) -> Self {
        Self {
            signature,
            header_size_offset,
            archive_size_offset,
        }
    }

    /// Layout of an MPQ v1 header
    pub fn mpq_v1() -> Self {
        Self::new(
            Signature::mpq(),
            MPQ_HEADER_SIZE_OFFSET,
            MPQ_ARCHIVE_SIZE_OFFSET,
        )
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of bytes needed from the match offset to read both fields
    pub fn min_len(&self) -> usize {
        (self.header_size_offset + SIZE_FIELD_LEN)
            .max(self.archive_size_offset + SIZE_FIELD_LEN)
            .max(self.signature.len())
    }

    /// Reads the size fields of a candidate starting at `offset`
    ///
    /// Returns `None` when fewer than [`min_len`](Self::min_len) bytes remain.
    pub fn read(&self, data: &[u8], offset: usize) -> Option<CandidateHeader> {
        if data.len().saturating_sub(offset) < self.min_len() {
            return None;
        }

        Some(CandidateHeader {
            offset,
            header_size: read_u32_le(data, offset + self.header_size_offset)?,
            archive_size: read_u32_le(data, offset + self.archive_size_offset)?,
        })
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::mpq_v1()
    }
}

fn read_u32_le(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at.checked_add(SIZE_FIELD_LEN)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signature_rejected() {
        assert!(matches!(
            Signature::new(Vec::new()),
            Err(CarveError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_matches_at() {
        let sig = Signature::mpq();
        let data = b"xxMPQ\x1Ayy";
        assert!(sig.matches_at(data, 2));
        assert!(!sig.matches_at(data, 0));
        assert!(!sig.matches_at(data, 8));
        assert!(!sig.matches_at(data, usize::MAX));
    }

    #[test]
    fn test_min_len_mpq() {
        assert_eq!(HeaderLayout::mpq_v1().min_len(), 12);
    }

    #[test]
    fn test_read_little_endian() {
        let mut data = MPQ_SIGNATURE.to_vec();
        data.extend_from_slice(&32u32.to_le_bytes());
        data.extend_from_slice(&0x8000_0001u32.to_le_bytes());

        let header = HeaderLayout::mpq_v1().read(&data, 0).unwrap();
        assert_eq!(header.offset, 0);
        assert_eq!(header.header_size, 32);
        assert_eq!(header.archive_size, 0x8000_0001);
    }

    #[test]
    fn test_read_short_header() {
        let mut data = vec![0u8; 3];
        data.extend_from_slice(&MPQ_SIGNATURE);
        data.extend_from_slice(&[32, 0, 0, 0, 1, 2, 3]);

        assert!(HeaderLayout::mpq_v1().read(&data, 3).is_none());
        assert!(HeaderLayout::mpq_v1().read(&data, 100).is_none());
    }

    #[test]
    fn test_custom_layout_min_len() {
        let layout = HeaderLayout::new(Signature::new(*b"PK\x03\x04\x14\x00").unwrap(), 0, 2);
        assert_eq!(layout.min_len(), 6);
    }
}
