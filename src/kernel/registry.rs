use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

/// One label and its live-instance count at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    pub label: String,
    pub count: i64,
}

impl CounterEntry {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    pub fn is_leak(&self) -> bool {
        self.count > 0
    }
}

/// Per-label live-instance counter.
///
/// Every operation is one critical section on a single instance-scoped lock.
/// The map is a `BTreeMap` so snapshots come out sorted by label without a
/// second pass. Nothing is logged or rendered while the lock is held.
///
/// Counts are not clamped: a decrement without a matching increment goes
/// negative, which `over_released` reports separately.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counts: Mutex<BTreeMap<String, i64>>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry behind an `Arc`, for sharing across threads and for `track`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn increment(&self, label: &str) -> i64 {
        let count = {
            let mut counts = self.counts.lock();
            let slot = counts.entry(label.to_string()).or_insert(0);
            *slot += 1;
            *slot
        };
        trace!(label, count, "increment");
        count
    }

    pub fn decrement(&self, label: &str) -> i64 {
        let count = {
            let mut counts = self.counts.lock();
            let slot = counts.entry(label.to_string()).or_insert(0);
            *slot -= 1;
            *slot
        };
        trace!(label, count, "decrement");
        count
    }

    /// Current value, 0 for an unseen label. Does not create an entry.
    pub fn count(&self, label: &str) -> i64 {
        self.counts.lock().get(label).copied().unwrap_or(0)
    }

    pub fn reset(&self, label: &str) {
        self.counts.lock().insert(label.to_string(), 0);
        trace!(label, "reset");
    }

    pub fn reset_all(&self) {
        self.counts.lock().clear();
        trace!("reset all");
    }

    /// All entries sorted by label, taken under one lock acquisition.
    pub fn snapshot(&self) -> Vec<CounterEntry> {
        let counts = self.counts.lock();
        counts
            .iter()
            .map(|(label, count)| CounterEntry::new(label.clone(), *count))
            .collect()
    }

    pub fn has_leaks(&self) -> bool {
        self.counts.lock().values().any(|count| *count > 0)
    }

    /// Snapshot filtered to `count > 0`.
    pub fn leaks_only(&self) -> Vec<CounterEntry> {
        self.filtered(|count| count > 0)
    }

    /// Snapshot filtered to `count < 0`: more releases than constructions.
    pub fn over_released(&self) -> Vec<CounterEntry> {
        self.filtered(|count| count < 0)
    }

    fn filtered(&self, keep: impl Fn(i64) -> bool) -> Vec<CounterEntry> {
        let counts = self.counts.lock();
        counts
            .iter()
            .filter(|(_, count)| keep(**count))
            .map(|(label, count)| CounterEntry::new(label.clone(), *count))
            .collect()
    }

    /// Counts one live instance of `label` until the returned guard drops.
    pub fn track(self: &Arc<Self>, label: impl Into<String>) -> LiveGuard {
        let label = label.into();
        self.increment(&label);
        LiveGuard {
            registry: Arc::clone(self),
            label,
        }
    }

    /// `track` keyed by the short type name of `T` (e.g. `User` for `app::model::User`).
    pub fn track_type<T: ?Sized>(self: &Arc<Self>) -> LiveGuard {
        self.track(type_label::<T>())
    }
}

/// Short type name: every path inside the name cut to its last segment.
/// `alloc::vec::Vec<app::Item>` becomes `Vec<Item>`, `[app::Item; 3]` becomes `[Item; 3]`.
pub fn type_label<T: ?Sized>() -> String {
    shorten_paths(std::any::type_name::<T>())
}

fn shorten_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path_start = 0;
    for (idx, ch) in full.char_indices() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            continue;
        }
        out.push_str(last_segment(&full[path_start..idx]));
        out.push(ch);
        path_start = idx + ch.len_utf8();
    }
    out.push_str(last_segment(&full[path_start..]));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// RAII handle for one live instance. Decrements its label on drop.
#[derive(Debug)]
pub struct LiveGuard {
    registry: Arc<CounterRegistry>,
    label: String,
}

impl LiveGuard {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.registry.decrement(&self.label);
    }
}
