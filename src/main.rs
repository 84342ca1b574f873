//! CLI entry point for batch graveyard generation

use clap::Parser;
use graveyard::io::cli::{Cli, MapProcessor};

fn main() -> graveyard::Result<()> {
    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
