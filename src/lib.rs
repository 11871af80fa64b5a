//! Carves embedded MPQ archives out of host binaries.
//!
//! The [`Carver`] scans a byte buffer for the archive signature, validates
//! the candidate header and yields the byte range of every accepted archive.
//! Everything around it (reading the host file, writing output files,
//! reporting) lives in the application, infrastructure and presentation
//! layers.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use crate::core::{CarveError, Result};
pub use domain::entities::{ExtractedArchive, HeaderLayout, Signature};
pub use domain::services::{Carver, HeaderValidator, ThresholdValidator};
