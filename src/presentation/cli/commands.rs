//! CLI commands using clap

use crate::application::dto::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, ExtractOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// mpqcarve - MPQ archive carver
///
/// Finds MPQ archives embedded in installer executables or any other binary
/// and writes each one to its own file.
#[derive(Parser, Debug)]
#[command(name = "mpqcarve")]
#[command(version)]
#[command(about = "Extract MPQ archives embedded in installer executables", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output (logs every rejected signature match)
    #[arg(short, long)]
    pub debug: bool,

    /// Host file to carve (e.g. an installer executable)
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Output directory for carved archives (created if absent)
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

impl Cli {
    /// Maximum log level for the tracing subscriber
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new(&self.source, &self.output)
    }
}
