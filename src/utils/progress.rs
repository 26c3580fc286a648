//! Spinner shown while a conversion runs

use crate::bio::fasta::ConversionSummary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with consistent styling; hidden when `enabled` is false
pub fn create_spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn checkpoint_message(summary: &ConversionSummary) -> String {
    format!(
        "Processed {} lines, {} sequences...",
        summary.lines, summary.sequences
    )
}
