use crate::data::options::FetchPhase;

/// Snapshot handed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current phase of the download.
    pub phase: FetchPhase,

    /// Number of bytes written to the destination file so far.
    pub bytes_downloaded: u64,

    /// Expected size of the artifact.
    pub total_bytes: u64,
}

impl Progress {
    pub fn new(phase: FetchPhase, bytes_downloaded: u64, total_bytes: u64) -> Self {
        Self {
            phase,
            bytes_downloaded,
            total_bytes,
        }
    }

    /// Completion in percent, between 0 and 100.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return if self.is_completed() { 100.0 } else { 0.0 };
        }
        (self.bytes_downloaded as f64 / self.total_bytes as f64) * 100.0
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == FetchPhase::Completed
    }
}
