//! CLI module

mod commands;
mod report;

pub use commands::Cli;
pub use report::{archive_line, print_archive, print_summary};
