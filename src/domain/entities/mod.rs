//! Domain entities
//!
//! Core business objects of the carving domain: what a candidate archive
//! looks like and what an accepted one is.

mod extracted_archive;
mod signature;

pub use extracted_archive::ExtractedArchive;
pub use signature::{
    CandidateHeader, HeaderLayout, Signature, MPQ_ARCHIVE_SIZE_OFFSET, MPQ_HEADER_SIZE_OFFSET,
    MPQ_SIGNATURE,
};
