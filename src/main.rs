use anyhow::{Context, Result};
use clap::Parser;

use mpqcarve::application::ExtractArchivesUseCase;
use mpqcarve::presentation::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = cli.extract_options();

    let report = ExtractArchivesUseCase::mpq()
        .run(&options, Some(&cli::print_archive))
        .with_context(|| format!("Failed to extract archives from {:?}", options.source))?;

    cli::print_summary(&report);

    Ok(())
}
