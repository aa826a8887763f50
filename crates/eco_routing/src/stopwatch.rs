use std::time::{Duration, Instant};

use tracing::debug;

pub(crate) struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub(crate) fn new(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub(crate) fn report(&self) {
        debug!(elapsed = ?self.elapsed(), "[{}]", self.name);
    }
}
