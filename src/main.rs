//! CLI entry point for quantum-inspired pixel art generation

use clap::Parser;
use quantica::io::cli::{ArtGenerator, Cli};

fn main() -> quantica::Result<()> {
    let cli = Cli::parse();
    let mut generator = ArtGenerator::new(cli);
    generator.run()
}
