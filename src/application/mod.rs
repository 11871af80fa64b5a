//! Application layer
//!
//! Use cases that wire the carver to a host blob source and an archive sink.

pub mod dto;
mod extract_archives;

pub use extract_archives::{ExtractArchivesUseCase, ExtractProgressCallback};
