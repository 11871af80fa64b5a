//! Repository traits (interfaces)
//!
//! Contracts for the storage the domain hands its results to.

mod archive_sink;

pub use archive_sink::{ArchiveSink, WriteResult};
