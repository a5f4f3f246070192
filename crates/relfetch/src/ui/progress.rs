use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use relfetch_fetch::{FetchPhase, Progress};

/// Minimum advance, in percentage points, between two redraws.
pub const DEFAULT_STEP: f64 = 5.0;

const PB_STYLE: &str = "{prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.progress_chars(PB_CHARS))
});

/// Lets a redraw through only once progress moved past the last one by
/// more than `step` percentage points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentThrottle {
    last: f64,
    step: f64,
}

impl Default for PercentThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl PercentThrottle {
    pub const fn new(step: f64) -> Self {
        Self { last: 0.0, step }
    }

    pub fn should_emit(&mut self, percent: f64) -> bool {
        if percent - self.last > self.step {
            self.last = percent;
            return true;
        }
        false
    }
}

/// Renders download progress on the terminal.
pub struct ProgressReporter {
    bar:      ProgressBar,
    throttle: PercentThrottle,
    redraws:  usize,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let bar = match PB_TEMPLATE.as_ref() {
            Some(style) => bar.with_style(style.clone()),
            None => bar,
        };
        bar.set_prefix("Downloading");
        Self::with_bar(bar)
    }

    /// Reporter that tracks progress without drawing anything.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            throttle: PercentThrottle::default(),
            redraws: 0,
        }
    }

    /// Number of progress updates let through the throttle.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn report(&mut self, progress: &Progress) {
        match progress.phase {
            FetchPhase::Connecting => self.bar.set_length(progress.total_bytes),
            FetchPhase::Downloading => {
                let percent = progress.percentage();
                if self.throttle.should_emit(percent) {
                    self.redraws += 1;
                    self.bar.set_position(progress.bytes_downloaded);
                    self.bar.set_message(format!("Downloaded {percent:.1}%"));
                }
            }
            FetchPhase::Verifying => self.bar.set_position(progress.bytes_downloaded),
            FetchPhase::Completed => {
                self.bar.set_position(progress.bytes_downloaded);
                self.bar.finish_and_clear();
            }
        }
    }
}

impl Drop for ProgressReporter {
    /// Clears a bar left behind by a download that never completed.
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
