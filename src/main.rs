//! CLI entry point for the Truchet tile pattern generator

use clap::Parser;
use truchet::io::cli::{Cli, PatternProcessor};

fn main() -> truchet::Result<()> {
    let cli = Cli::parse();
    let processor = PatternProcessor::new(cli);
    processor.process()
}
