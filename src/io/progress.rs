//! Terminal progress display for batched materialization

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::materialize::materializer::{BatchProgress, MaterializeObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} batches"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar that follows materialization batches of successive generations
///
/// The bar is resized whenever a new generation starts, so a regenerate in
/// the middle of materialization restarts it from zero.
pub struct BatchProgressBar {
    bar: ProgressBar,
    generations: usize,
}

impl Default for BatchProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressBar {
    /// Create a visible progress bar
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress bar that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            generations: 0,
        }
    }

    /// Batches shown as completed
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Generations that reported at least one batch
    pub const fn generations(&self) -> usize {
        self.generations
    }

    fn update(&mut self, progress: BatchProgress) {
        // First batch of a generation
        if progress.completed_batches <= 1 {
            self.generations += 1;
            self.bar.reset();
            self.bar.set_length(progress.total_batches as u64);
            self.bar.set_message(format!("{} cells", progress.cell_count));
        }
        self.bar.set_position(progress.completed_batches as u64);
    }
}

impl MaterializeObserver for BatchProgressBar {
    fn on_batch(&mut self, progress: BatchProgress) {
        self.update(progress);
    }

    fn on_complete(&mut self, progress: BatchProgress) {
        self.update(progress);
        self.bar
            .finish_with_message(format!("{} cells materialized", progress.cell_count));
    }
}
