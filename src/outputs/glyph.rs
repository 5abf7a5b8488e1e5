use serde::{Deserialize, Serialize};

/// Severity of a leveled report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
            LogLevel::Debug => "🔍",
        }
    }
}

/// Ownership strength drawn on a dependency-graph edge. Purely a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Strong,
    Weak,
    Unowned,
}

impl ReferenceKind {
    pub fn arrow(self) -> &'static str {
        match self {
            ReferenceKind::Strong => "──strong──▶",
            ReferenceKind::Weak => "┄┄weak┄┄▷",
            ReferenceKind::Unowned => "··unowned··▷",
        }
    }
}

// Frame glyphs shared by the formatter.
pub(crate) const SECTION_RULE: char = '═';
pub(crate) const SECTION_MARKER: &str = "📦";
pub(crate) const LIGHT_RULE: char = '─';
pub(crate) const SUBSECTION_RULE: char = '┈';
pub(crate) const SUBSECTION_MARKER: &str = "▸";
pub(crate) const ALIVE: &str = "🟢";
pub(crate) const RELEASED: &str = "⚫";
