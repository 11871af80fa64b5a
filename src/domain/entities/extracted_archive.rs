//! Extracted archive entity
//!
//! A bounded byte range of the host blob that passed header validation.

use std::ops::Range;

/// An accepted archive: `[start, start + length)` within the host blob
///
/// `length` is the declared archive size clamped to the bytes that remain
/// after `start`, and is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractedArchive {
    index: usize,
    start: usize,
    length: usize,
    declared_size: u32,
}

impl ExtractedArchive {
    pub fn new(index: usize, start: usize, length: usize, declared_size: u32) -> Self {
        Self {
            index,
            start,
            length,
            declared_size,
        }
    }

    /// Zero-based discovery order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset of the signature within the host blob
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of bytes extracted
    pub fn length(&self) -> usize {
        self.length
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Archive size as declared by the header, before clamping
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    /// True when the declared size ran past the end of the host blob
    ///
    /// A truncated archive holds every byte that was available, but the
    /// inner format may not open cleanly.
    pub fn is_truncated(&self) -> bool {
        (self.length as u64) < u64::from(self.declared_size)
    }

    /// Borrows this archive's bytes out of the blob it was carved from
    ///
    /// Returns `None` if `blob` is shorter than the archive's end, which only
    /// happens when it is not the blob the archive was carved from.
    pub fn bytes<'a>(&self, blob: &'a [u8]) -> Option<&'a [u8]> {
        blob.get(self.range())
    }

    /// Output file name: `{prefix}_{index}.{extension}`
    pub fn file_name(&self, prefix: &str, extension: &str) -> String {
        format!("{}_{}.{}", prefix, self.index, extension)
    }

    /// Returns a human-readable size string
    pub fn size_human(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;

        let size = self.length as f64;
        if size >= MB {
            format!("{:.1} MB", size / MB)
        } else if size >= KB {
            format!("{:.1} KB", size / KB)
        } else {
            format!("{} bytes", self.length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_end() {
        let archive = ExtractedArchive::new(0, 50, 1500, 2000);
        assert_eq!(archive.end(), 1550);
        assert_eq!(archive.range(), 50..1550);
    }

    #[test]
    fn test_is_truncated() {
        assert!(ExtractedArchive::new(0, 0, 1500, 2000).is_truncated());
        assert!(!ExtractedArchive::new(0, 0, 2000, 2000).is_truncated());
    }

    #[test]
    fn test_bytes_out_of_range() {
        let archive = ExtractedArchive::new(0, 4, 8, 8);
        assert!(archive.bytes(&[0u8; 11]).is_none());
        assert_eq!(archive.bytes(&[7u8; 12]).map(<[u8]>::len), Some(8));
    }

    #[test]
    fn test_file_name() {
        let archive = ExtractedArchive::new(3, 0, 2048, 2048);
        assert_eq!(archive.file_name("d2demo", "mpq"), "d2demo_3.mpq");
    }

    #[test]
    fn test_size_human() {
        assert_eq!(ExtractedArchive::new(0, 0, 512, 512).size_human(), "512 bytes");
        assert_eq!(ExtractedArchive::new(0, 0, 1536, 1536).size_human(), "1.5 KB");
        assert_eq!(
            ExtractedArchive::new(0, 0, 3 * 1024 * 1024, 3 * 1024 * 1024).size_human(),
            "3.0 MB"
        );
    }
}
