use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Source of "now" for elapsed-time computation.
/// Must be monotonic non-decreasing between calls.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Process monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for deterministic tests and replays.
/// Clones share the same offset, so a test can keep one handle and advance it
/// while the timeline owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }

    pub fn elapsed(&self) -> Duration {
        *self.offset.lock()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

/// `[SSS.mmm]`: seconds zero-padded to 3 digits, milliseconds to 3.
/// Sub-millisecond time is truncated. From 1000 s on the seconds field widens
/// (`[1000.000]`) instead of wrapping.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("[{:03}.{:03}]", elapsed.as_secs(), elapsed.subsec_millis())
}
