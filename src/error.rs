use thiserror::Error;

/// Conditions raised by the timeline recorder.
/// None of these are fatal; `Timeline::log_event` turns them into a warning line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("timeline not started, dropping event: {description}")]
    Uninitialized { description: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
