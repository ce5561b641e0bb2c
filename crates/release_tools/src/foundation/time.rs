//! Time management utilities

use std::time::{Duration, Instant};

/// Wall-clock stopwatch started on creation
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Time since the stopwatch was started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
