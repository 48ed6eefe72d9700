//! Command-line interface for generating and writing art collections

use crate::io::configuration::{COLLECTION_SIZE, GRID_SIZE, OUTPUT_FILE};
use crate::io::error::Result;
use crate::io::export::write_collection;
use crate::io::progress::ProgressManager;
use crate::pipeline::{ArtCollection, generate_piece};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;

#[derive(Parser)]
#[command(name = "quantica")]
#[command(
    author,
    version,
    about = "Generate quantum-inspired pixel art collections"
)]
/// Command-line arguments for the art generation tool
///
/// Generation constants (grid size, collection size, gradient) are fixed;
/// the flags only control reproducibility and display.
pub struct Cli {
    /// Random seed for reproducible generation (OS entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a full generation-and-write cycle with progress tracking
pub struct ArtGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ArtGenerator {
    /// Create a new generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the collection and write it to the fixed output location
    ///
    /// # Errors
    ///
    /// Returns an error if piece generation or the output write fails.
    pub fn run(&mut self) -> Result<()> {
        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(COLLECTION_SIZE);
        }

        let mut collection = ArtCollection::with_capacity(COLLECTION_SIZE);
        for _ in 0..COLLECTION_SIZE {
            collection.push(generate_piece(GRID_SIZE, &mut rng)?);
            if let Some(pm) = &self.progress_manager {
                pm.advance();
            }
        }

        write_collection(&collection, Path::new(OUTPUT_FILE))?;

        if let Some(pm) = &self.progress_manager {
            pm.finish("Collection written");
        }

        Ok(())
    }
}
