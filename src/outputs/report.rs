use serde::{Deserialize, Serialize};

use super::glyph::{LogLevel, ReferenceKind};
use crate::kernel::registry::CounterEntry;
use crate::kernel::timeline::event::TimelineEvent;

/// One row of a memory-state report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub name: String,
    pub is_alive: bool,
    pub held_by: Vec<String>,
}

impl MemoryEntry {
    pub fn alive(name: impl Into<String>, held_by: &[&str]) -> Self {
        Self {
            name: name.into(),
            is_alive: true,
            held_by: held_by.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn released(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_alive: false,
            held_by: Vec::new(),
        }
    }

    /// Alive but nothing holds it.
    pub fn is_orphaned(&self) -> bool {
        self.is_alive && self.held_by.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: ReferenceKind,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: ReferenceKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }
}

/// A transient request for the renderer. Built, rendered, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRequest {
    LeveledMessage {
        text: String,
        level: LogLevel,
    },
    Section {
        title: String,
    },
    Subsection {
        title: String,
    },
    Step {
        number: u32,
        code: String,
        description: String,
        alive_objects: Vec<String>,
    },
    BeforeAfter {
        title: String,
        before_label: String,
        after_label: String,
        before_objects: Vec<String>,
        after_objects: Vec<String>,
    },
    MemoryState {
        entries: Vec<MemoryEntry>,
    },
    DependencyGraph {
        title: String,
        nodes: Vec<String>,
        edges: Vec<GraphEdge>,
    },
    RetainCycleDiagram {
        object_a: String,
        object_b: String,
        /// Supplied by the caller; never computed here.
        has_cycle: bool,
    },
    Timeline {
        title: String,
        events: Vec<TimelineEvent>,
    },
    CounterSummary {
        entries: Vec<CounterEntry>,
    },
}

impl ReportRequest {
    pub fn message(level: LogLevel, text: impl Into<String>) -> Self {
        ReportRequest::LeveledMessage {
            text: text.into(),
            level,
        }
    }

    pub fn section(title: impl Into<String>) -> Self {
        ReportRequest::Section { title: title.into() }
    }

    pub fn subsection(title: impl Into<String>) -> Self {
        ReportRequest::Subsection { title: title.into() }
    }
}
