pub mod progress;

pub use progress::{PercentThrottle, ProgressReporter};
