//! Batch progress display for multi-seed runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maps of a batch are done
///
/// The message shows the seed in flight and, once a map finishes, how many
/// pipeline attempts it took.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    total_attempts: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            total_attempts: 0,
        }
    }

    /// Create the bar for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        let bar = ProgressBar::new(map_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Announce the seed about to be generated
    pub fn start_map(&self, seed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed}"));
        }
    }

    /// Mark a map as generated
    pub fn complete_map(&mut self, seed: u64, attempts: u32, _elapsed: Duration) {
        self.completed += 1;
        self.total_attempts += u64::from(attempts);
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed} ({attempts} attempts)"));
            bar.inc(1);
        }
    }

    /// Maps completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Pipeline attempts summed over completed maps
    pub const fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("{} maps generated", self.completed));
        }
    }
}
