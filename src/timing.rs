//! Phase timing.

use std::time::Instant;
use tracing::info;

/// Measures one workflow phase and logs its duration when finished.
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Log the elapsed time and return it in seconds.
    pub fn finish(self) -> f64 {
        let secs = self.start.elapsed().as_secs_f64();
        if secs >= 60.0 {
            info!("[{:.1}m] {}", secs / 60.0, self.name);
        } else {
            info!("[{:.1}s] {}", secs, self.name);
        }
        secs
    }
}
