//! Progress reporting for long trial loops

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a repeated-trial loop; hidden when quiet
pub fn trial_bar(trials: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(trials);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    bar
}
