//! Extraction options DTO

use std::path::PathBuf;

/// Host blob opened when no source is given
pub const DEFAULT_SOURCE: &str = "/opt/diablo2-demo/DiabloIIDemo.exe";

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "/opt/diablo2-demo/mpqs";

/// Options for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Path to the host blob
    pub source: PathBuf,
    /// Directory receiving the carved archives (created if absent)
    pub output_dir: PathBuf,
    /// File name prefix of carved archives
    pub prefix: String,
    /// File extension of carved archives, without the dot
    pub extension: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prefix: "d2demo".to_string(),
            extension: "mpq".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Creates options for the given source and output directory
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}
