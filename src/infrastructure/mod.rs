//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories and the sources the
//! carver reads from. All file system access lives here.

pub mod persistence;
pub mod source;
