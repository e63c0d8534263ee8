//! CLI entry point for the contact-sheet tiling tool

use clap::Parser;
use tilesheet::io::cli::{Cli, RunProcessor};
use tilesheet::io::logging::init_logging;

fn main() -> tilesheet::Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let mut processor = RunProcessor::new(cli);
    init_logging(quiet, processor.progress_display());
    let summary = processor.process()?;
    tracing::info!(
        batches = summary.batches,
        groups = summary.groups_written,
        skipped = summary.groups_skipped,
        failed_sources = summary.failed_sources,
        "run complete"
    );
    Ok(())
}
