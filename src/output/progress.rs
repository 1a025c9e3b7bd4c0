//! Progress bar for the export loop.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::console::{print_error, print_warning};

const EXPORT_TEMPLATE: &str = "{msg:.cyan.bold} {spinner:.cyan.bold} [{wide_bar:.blue/cyan}] \
                               {percent:>3}% {pos}/{len} torrents";

/// Progress display for the per-torrent loop.
///
/// Messages printed while the bar is live go through [`ExportProgress::warn`]
/// and [`ExportProgress::error`] so they don't tear the bar.
pub struct ExportProgress {
    bar: ProgressBar,
}

impl ExportProgress {
    /// Create the bar. With `visible == false` nothing is drawn, but
    /// diagnostics are still printed.
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total);
        bar.set_style(
            ProgressStyle::with_template(EXPORT_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("Exporting torrents...");
        if visible {
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        Self { bar }
    }

    /// Mark one torrent as processed.
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn warn(&self, message: &str) {
        self.bar.suspend(|| print_warning(message));
    }

    pub fn error(&self, message: &str) {
        self.bar.suspend(|| print_error(message));
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Export complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_still_counts() {
        let progress = ExportProgress::new(3, false);
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
