//! Progress bar for engine batches.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;

use confluence_orchestration::{EngineProgress, EngineStatus, ProgressReporter};

const TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} engines {msg}";

/// Progress reporter that draws one bar per engine batch on stderr.
pub struct CLIProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    hidden: bool,
}

impl CLIProgressReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            hidden: false,
        }
    }

    /// A reporter that tracks progress without drawing anything.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: Mutex::new(None),
            hidden: true,
        }
    }

    fn create_bar(&self, total: usize) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(
            Some(total as u64),
            if self.hidden {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            },
        );
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    }

    /// Engines settled in the current batch, if one is running.
    #[must_use]
    pub fn position(&self) -> Option<u64> {
        self.bar.lock().as_ref().map(ProgressBar::position)
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, update: &EngineProgress) {
        let mut guard = self.bar.lock();
        let bar = guard.get_or_insert_with(|| self.create_bar(update.total));
        let verb = match update.status {
            EngineStatus::Started => "running",
            EngineStatus::Succeeded => "finished",
            EngineStatus::Failed => "failed",
            EngineStatus::TimedOut => "timed out",
        };
        bar.set_position(update.completed as u64);
        bar.set_message(format!("{} {verb}", update.engine));
    }

    fn complete(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}
