//! Session-scoped chronological event log.
//!
//! # ORDERING INVARIANT
//! Within one session, recorded elapsed times are non-decreasing in insertion order.
//! `start()` begins a new session and discards the previous one unconditionally.
//!
//! # THREADING
//! Single writer. Callers serialize `start` / `log_event` / `render`, usually by
//! owning one `Timeline` per demo run. Wrap it in a `Mutex` to share it.

pub mod event;
pub mod recorder;

pub use event::TimelineEvent;
pub use recorder::{SessionState, Timeline};
