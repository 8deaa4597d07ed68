//! Progress bar for the entry-writing loop, built on indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar over a known number of entries.
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Create a bar spanning `total` entries.
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} entries")
                .expect("Invalid progress bar template")
                .progress_chars("█░"),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Advance by one entry.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar; the completion message is printed separately.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
