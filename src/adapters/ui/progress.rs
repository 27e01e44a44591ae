//! "Typing" spinner shown while a question is being answered.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-ticking spinner. Call `finish_and_clear()` when the answer is in.
pub fn typing_indicator() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.red} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("typing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
