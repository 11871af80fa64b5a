use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a carve run
///
/// Rejected signature matches and truncated archives never show up here:
/// the carver skips the former and clamps the latter.
#[derive(Error, Debug)]
pub enum CarveError {
    #[error("Cannot read host blob {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write archive to {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid carve policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, CarveError>;
