//! CLI entry point for the edge-matching jigsaw tile assembler

use clap::Parser;
use jigsawtile::io::cli::{Cli, FileProcessor};

fn main() -> jigsawtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
