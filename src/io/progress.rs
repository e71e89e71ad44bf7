//! Progress display for batch generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many characters of a batch have been generated
///
/// Draws to stderr so that names printed on stdout stay pipeable.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for `total` characters
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix("Generating");
        Self { bar }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Record one finished character
    pub fn advance(&self, name: &str) {
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }

    /// Number of characters recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once the batch is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
