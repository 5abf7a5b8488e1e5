use super::glyph::{
    LogLevel, ALIVE, LIGHT_RULE, RELEASED, SECTION_MARKER, SECTION_RULE,
    SUBSECTION_MARKER, SUBSECTION_RULE,
};
use super::report::{GraphEdge, MemoryEntry, ReportRequest};
use crate::config::RenderConfig;
use crate::kernel::registry::CounterEntry;
use crate::kernel::time::format_elapsed;
use crate::kernel::timeline::event::TimelineEvent;

const CYCLE_FORWARD: &str = "──strong─▶";
const CYCLE_BACK_STRONG: &str = "◀─strong──";
const CYCLE_BACK_WEAK: &str = "◁┄┄weak┄┄┄";

/// PURE FUNCTION: request + layout -> lines. Same input, same bytes.
pub fn format_request(request: &ReportRequest, config: &RenderConfig) -> Vec<String> {
    match request {
        ReportRequest::LeveledMessage { text, level } => vec![leveled(*level, text)],
        ReportRequest::Section { title } => vec![
            rule(SECTION_RULE, config.rule_width),
            format!("{} {}", SECTION_MARKER, title),
            rule(LIGHT_RULE, config.rule_width),
        ],
        ReportRequest::Subsection { title } => vec![
            rule(SUBSECTION_RULE, config.rule_width),
            format!("{} {}", SUBSECTION_MARKER, title),
            rule(SUBSECTION_RULE, config.rule_width),
        ],
        ReportRequest::Step {
            number,
            code,
            description,
            alive_objects,
        } => step(*number, code, description, alive_objects, config),
        ReportRequest::BeforeAfter {
            title,
            before_label,
            after_label,
            before_objects,
            after_objects,
        } => {
            let mut lines = vec![format!("🔄 {}", title)];
            lines.push(format!("  ◀ {}:", before_label));
            lines.extend(object_block(before_objects, config));
            lines.push(format!("  ▶ {}:", after_label));
            lines.extend(object_block(after_objects, config));
            lines
        }
        ReportRequest::MemoryState { entries } => memory_state(entries),
        ReportRequest::DependencyGraph { title, nodes, edges } => {
            dependency_graph(title, nodes, edges, config)
        }
        ReportRequest::RetainCycleDiagram {
            object_a,
            object_b,
            has_cycle,
        } => retain_cycle(object_a, object_b, *has_cycle),
        ReportRequest::Timeline { title, events } => timeline(title, events),
        ReportRequest::CounterSummary { entries } => counter_summary(entries),
    }
}

fn leveled(level: LogLevel, text: &str) -> String {
    format!("{} {}", level.glyph(), text)
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn bullet(config: &RenderConfig, indent: &str, item: &str) -> String {
    format!("{}{} {}", indent, config.bullet, item)
}

fn step(
    number: u32,
    code: &str,
    description: &str,
    alive: &[String],
    config: &RenderConfig,
) -> Vec<String> {
    let head = format!("┌─ Step {} ", number);
    let fill = config.rule_width.saturating_sub(head.chars().count());
    let mut lines = vec![format!("{}{}", head, rule(LIGHT_RULE, fill))];
    lines.push(format!("│ code: {}", code));
    lines.push(format!("│ note: {}", description));
    lines.push("│ alive objects:".to_string());
    if alive.is_empty() {
        lines.push("│   (none)".to_string());
    } else {
        for name in alive {
            lines.push(bullet(config, "│   ", name));
        }
    }
    lines.push(format!(
        "└{}",
        rule(LIGHT_RULE, config.rule_width.saturating_sub(1))
    ));
    lines
}

fn object_block(objects: &[String], config: &RenderConfig) -> Vec<String> {
    if objects.is_empty() {
        return vec!["    ✨ all objects cleared".to_string()];
    }
    objects
        .iter()
        .map(|name| bullet(config, "    ", name))
        .collect()
}

fn memory_state(entries: &[MemoryEntry]) -> Vec<String> {
    let mut lines = vec!["🧠 Memory state:".to_string()];
    if entries.is_empty() {
        lines.push("  (no objects)".to_string());
        return lines;
    }
    for entry in entries {
        let line = if !entry.is_alive {
            format!("  {} {}: released", RELEASED, entry.name)
        } else if entry.is_orphaned() {
            format!(
                "  {} {}: {} alive with no holders (leak)",
                ALIVE,
                entry.name,
                LogLevel::Warning.glyph()
            )
        } else {
            format!(
                "  {} {}: alive, held by: {}",
                ALIVE,
                entry.name,
                entry.held_by.join(", ")
            )
        };
        lines.push(line);
    }
    lines
}

fn dependency_graph(
    title: &str,
    nodes: &[String],
    edges: &[GraphEdge],
    config: &RenderConfig,
) -> Vec<String> {
    let mut lines = vec![format!("🕸️ {}", title), "  nodes:".to_string()];
    if nodes.is_empty() {
        lines.push("    (no nodes)".to_string());
    }
    lines.extend(nodes.iter().map(|n| bullet(config, "    ", n)));

    lines.push("  edges:".to_string());
    if edges.is_empty() {
        lines.push("    (no edges)".to_string());
    }
    lines.extend(
        edges
            .iter()
            .map(|e| format!("    {} {} {}", e.from, e.kind.arrow(), e.to)),
    );
    lines
}

fn retain_cycle(a: &str, b: &str, has_cycle: bool) -> Vec<String> {
    let width = a.chars().count().max(b.chars().count());
    let bar = rule('─', width + 2);
    let gap = " ".repeat(CYCLE_FORWARD.chars().count() + 2);
    let back = if has_cycle {
        CYCLE_BACK_STRONG
    } else {
        CYCLE_BACK_WEAK
    };

    let mut lines = vec![
        format!("🔁 Reference diagram: {} / {}", a, b),
        format!("  ┌{}┐{}┌{}┐", bar, gap, bar),
        format!("  │ {:<w$} │ {} │ {:<w$} │", a, CYCLE_FORWARD, b, w = width),
        format!("  │ {:<w$} │ {} │ {:<w$} │", "", back, "", w = width),
        format!("  └{}┘{}└{}┘", bar, gap, bar),
    ];
    if has_cycle {
        lines.push(leveled(
            LogLevel::Warning,
            &format!(
                "Retain cycle: {} and {} hold each other strongly, neither will be reclaimed (leak)",
                a, b
            ),
        ));
    } else {
        lines.push(leveled(
            LogLevel::Success,
            &format!(
                "No cycle: {} refers back to {} weakly, both will be reclaimed",
                b, a
            ),
        ));
    }
    lines
}

fn timeline(title: &str, events: &[TimelineEvent]) -> Vec<String> {
    let mut lines = vec![format!("⏱️ {}", title)];
    if events.is_empty() {
        lines.push("(no events recorded)".to_string());
        return lines;
    }
    lines.extend(
        events
            .iter()
            .map(|e| format!("{} {}", format_elapsed(e.elapsed), e.description)),
    );
    lines
}

fn counter_summary(entries: &[CounterEntry]) -> Vec<String> {
    let mut lines = vec!["📊 Live instances:".to_string()];
    if entries.is_empty() {
        lines.push("(no tracked types)".to_string());
        return lines;
    }
    for entry in entries {
        let (glyph, status) = if entry.is_leak() {
            (LogLevel::Warning.glyph(), "LEAK")
        } else {
            (LogLevel::Success.glyph(), "OK")
        };
        lines.push(format!(
            "{} {}: {} объектов ({})",
            glyph, entry.label, entry.count, status
        ));
    }

    let over: Vec<String> = entries
        .iter()
        .filter(|e| e.count < 0)
        .map(|e| format!("{} ({})", e.label, e.count))
        .collect();
    if !over.is_empty() {
        lines.push(leveled(
            LogLevel::Warning,
            &format!("over-released: {}", over.join(", ")),
        ));
    }
    lines
}
