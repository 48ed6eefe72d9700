//! Progress display for collection generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COLLECTION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Pieces: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a generation run
///
/// Shows a single bar advancing once per generated piece.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the bar for a run of `piece_count` pieces
    pub fn initialize(&mut self, piece_count: usize) {
        let bar = ProgressBar::new(piece_count as u64);
        bar.set_style(COLLECTION_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Mark one piece as completed
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Finish the bar with a completion message
    pub fn finish(&self, message: &'static str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message);
        }
    }
}
