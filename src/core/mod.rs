//! Crate-wide error type

mod error;

pub use error::{CarveError, Result};
