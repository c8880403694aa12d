//! Progress display for the palette and compositing phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the generation phases
///
/// Each phase (palette build, compositing) gets its own bar; bars are
/// incremented from inside the parallel loops and cleared on finish.
pub struct ProgressManager {
    multi_progress: MultiProgress,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
        }
    }

    /// Add a styled bar for one generation phase
    pub fn phase_bar(&self, label: &'static str, len: u64) -> ProgressBar {
        let bar = ProgressBar::new(len);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_message(label);
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
