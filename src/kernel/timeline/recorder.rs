use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::event::TimelineEvent;
use crate::error::TimelineError;
use crate::kernel::time::{Clock, SystemClock};
use crate::outputs::renderer::Renderer;
use crate::outputs::report::ReportRequest;
use crate::outputs::sink::OutputSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session yet. Events are dropped with a warning.
    Idle,
    Active { id: Uuid, origin: Instant },
}

#[derive(Debug)]
pub struct Timeline<C: Clock = SystemClock> {
    clock: C,
    state: SessionState,
    events: Vec<TimelineEvent>,
}

impl Timeline<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Timeline<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timeline<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: SessionState::Idle,
            events: Vec::new(),
        }
    }

    /// Begins a new session: resets the origin to now and drops all prior events.
    pub fn start(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        let discarded = self.events.len();
        self.events.clear();
        self.state = SessionState::Active {
            id,
            origin: self.clock.now(),
        };
        info!(session = %id, discarded, "timeline session started");
        id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn session_id(&self) -> Option<Uuid> {
        match self.state {
            SessionState::Active { id, .. } => Some(id),
            SessionState::Idle => None,
        }
    }

    /// Appends an event and returns its elapsed time.
    /// Fails with `Uninitialized` before the first `start()`; nothing is appended.
    pub fn record(&mut self, description: impl Into<String>) -> Result<Duration, TimelineError> {
        let description = description.into();
        let origin = match self.state {
            SessionState::Active { origin, .. } => origin,
            SessionState::Idle => return Err(TimelineError::Uninitialized { description }),
        };

        let elapsed = self.clock.now().saturating_duration_since(origin);
        debug!(elapsed_ms = elapsed.as_millis() as u64, %description, "timeline event");
        self.events.push(TimelineEvent::new(elapsed, description));
        Ok(elapsed)
    }

    /// `record`, with the `Uninitialized` case rendered as a warning line.
    /// Never fails; a dropped event is not retried or queued.
    pub fn log_event<S: OutputSink>(
        &mut self,
        description: impl Into<String>,
        renderer: &mut Renderer<S>,
    ) {
        if let Err(e) = self.record(description) {
            warn!("{}", e);
            renderer.warning(format!("Timeline: call start() first ({})", e));
        }
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The timeline as a renderer request, events in insertion order.
    pub fn report(&self, title: impl Into<String>) -> ReportRequest {
        ReportRequest::Timeline {
            title: title.into(),
            events: self.events.clone(),
        }
    }

    pub fn render<S: OutputSink>(&self, title: impl Into<String>, renderer: &mut Renderer<S>) {
        renderer.render(&self.report(title));
    }
}
