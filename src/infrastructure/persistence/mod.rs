//! Persistence adapters for carved archives

mod directory_sink;

pub use directory_sink::DirectorySink;
