//! CLI entry point for the photomosaic generator

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    let processor = MosaicProcessor::new(cli);
    processor.process()
}
