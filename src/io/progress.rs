//! Batch and group progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a tiling run
///
/// One bar tracks completed batches across the run, a second tracks the
/// groups of the batch currently in flight.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    group_bar: Option<ProgressBar>,
    batch_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Batches: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static GROUP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            group_bar: None,
            batch_count: 0,
        }
    }

    /// Create the run-level bar for `batch_count` batches
    pub fn initialize(&mut self, batch_count: usize) {
        self.batch_count = batch_count;

        let batch_bar = ProgressBar::new(batch_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let group_bar = ProgressBar::new(0);
        group_bar.set_style(GROUP_STYLE.clone());
        self.group_bar = Some(self.multi_progress.add(group_bar));
    }

    /// Reset the group bar for a new batch
    pub fn start_batch(&mut self, index: usize, group_count: usize) {
        if let Some(ref bar) = self.group_bar {
            bar.set_length(group_count as u64);
            bar.set_position(0);
            bar.set_prefix(format!("Batch {}/{}", index + 1, self.batch_count));
            bar.set_message(format!("0/{group_count} groups"));
        }
    }

    /// Advance the group bar by one
    pub fn complete_group(&self) {
        if let Some(ref bar) = self.group_bar {
            bar.inc(1);
            let length = bar.length().unwrap_or(0);
            bar.set_message(format!("{}/{length} groups", bar.position()));
        }
    }

    /// Advance the batch bar by one
    pub fn complete_batch(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Draw target shared by both bars, for log output that must not tear them
    pub const fn multi_progress(&self) -> &MultiProgress {
        &self.multi_progress
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.group_bar {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All batches processed");
        }
        let _ = self.multi_progress.clear();
    }
}
