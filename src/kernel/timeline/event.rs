use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Time since the session's `start()`.
    pub elapsed: Duration,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(elapsed: Duration, description: impl Into<String>) -> Self {
        Self {
            elapsed,
            description: description.into(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
