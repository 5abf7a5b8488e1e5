pub mod config;
pub mod error;
pub mod kernel;
pub mod outputs;

// Re-export specific items for convenient access
pub use config::{LifescopeConfig, RenderConfig};
pub use error::{ConfigError, TimelineError};
pub use kernel::registry::{CounterEntry, CounterRegistry, LiveGuard};
pub use kernel::time::{Clock, ManualClock, SystemClock};
pub use kernel::timeline::{Timeline, TimelineEvent};
pub use outputs::{OutputSink, Renderer, ReportRequest};
