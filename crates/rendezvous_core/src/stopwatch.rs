use std::time::{Duration, Instant};

use tracing::debug;

/// Times one algorithm run and logs the result when finished.
pub(crate) struct Stopwatch {
    start_time: Instant,
    name: &'static str,
}

impl Stopwatch {
    pub fn start(name: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.start_time.elapsed();
        debug!(name = self.name, ?elapsed, "Finished");
        elapsed
    }
}
