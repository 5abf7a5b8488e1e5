use anyhow::Context;
use lifescope::config::{DemoConfig, LifescopeConfig};
use lifescope::kernel::registry::{type_label, CounterRegistry, LiveGuard};
use lifescope::kernel::timeline::Timeline;
use lifescope::outputs::{
    GraphEdge, MemoryEntry, OutputSink, ReferenceKind, Renderer, ReportRequest, WriterSink,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

// Demo model types. Each one owns a guard, so construction and drop are counted.
struct User {
    name: String,
    _live: LiveGuard,
}

impl User {
    fn new(registry: &Arc<CounterRegistry>, name: &str) -> Self {
        Self {
            name: name.to_string(),
            _live: registry.track_type::<User>(),
        }
    }
}

struct Session {
    _owner: Arc<User>,
    _live: LiveGuard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; the report owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LifescopeConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {}", path))?,
        None => LifescopeConfig::default(),
    };
    tracing::info!(?config, "Lifescope demo booting...");

    let registry = CounterRegistry::shared();
    let mut out = Renderer::with_config(WriterSink::stdout(), config.render.clone());
    let mut timeline = Timeline::new();

    lifecycle(&registry, &mut out);
    leak(&registry, &mut out);
    concurrent(&registry, &config.demo, &mut out).await?;
    session_timeline(&mut timeline, &config.demo, &mut out).await;
    ownership_graphs(&mut out);

    if let Some(e) = out.sink_mut().take_error() {
        return Err(e).context("writing report to stdout");
    }
    tracing::info!("Lifescope demo finished.");
    Ok(())
}

fn summary<S: OutputSink>(registry: &CounterRegistry, out: &mut Renderer<S>) {
    // Snapshot first; the registry lock is released before rendering.
    let entries = registry.snapshot();
    out.render(&ReportRequest::CounterSummary { entries });
}

fn lifecycle<S: OutputSink>(registry: &Arc<CounterRegistry>, out: &mut Renderer<S>) {
    out.section("Object lifecycle");

    let alice = User::new(registry, "alice");
    out.render(&ReportRequest::Step {
        number: 1,
        code: "let alice = User::new(\"alice\")".to_string(),
        description: "one owner, one live instance".to_string(),
        alive_objects: vec![alice.name.clone()],
    });

    let bob = User::new(registry, "bob");
    out.render(&ReportRequest::Step {
        number: 2,
        code: "let bob = User::new(\"bob\")".to_string(),
        description: "a second instance of the same type".to_string(),
        alive_objects: vec![alice.name.clone(), bob.name.clone()],
    });
    summary(registry, out);

    let before = vec![alice.name.clone(), bob.name.clone()];
    drop(alice);
    drop(bob);
    out.render(&ReportRequest::Step {
        number: 3,
        code: "drop(alice); drop(bob)".to_string(),
        description: "both owners gone".to_string(),
        alive_objects: Vec::new(),
    });
    out.render(&ReportRequest::BeforeAfter {
        title: "Leaving scope".to_string(),
        before_label: "inside scope".to_string(),
        after_label: "after drop".to_string(),
        before_objects: before,
        after_objects: Vec::new(),
    });
    summary(registry, out);

    if registry.has_leaks() {
        out.error("instances survived their owners");
    } else {
        out.success("every User was released");
    }
    out.blank();
}

fn leak<S: OutputSink>(registry: &Arc<CounterRegistry>, out: &mut Renderer<S>) {
    out.section("Leak detection");

    let user = Arc::new(User::new(registry, "carol"));
    let session = Session {
        _owner: Arc::clone(&user),
        _live: registry.track_type::<Session>(),
    };
    out.render(&ReportRequest::MemoryState {
        entries: vec![
            MemoryEntry::alive(user.name.clone(), &["main", "Session"]),
            MemoryEntry::alive(type_label::<Session>(), &["main"]),
        ],
    });

    drop(user);
    // Forgetting the session skips its drop, so both guards stay alive.
    std::mem::forget(session);
    out.render(&ReportRequest::MemoryState {
        entries: vec![
            MemoryEntry::alive("carol", &["Session"]),
            MemoryEntry::alive(type_label::<Session>(), &[]),
        ],
    });

    let leaks = registry.leaks_only();
    out.render(&ReportRequest::CounterSummary {
        entries: leaks.clone(),
    });
    for entry in &leaks {
        out.warning(format!("{} never released ({} live)", entry.label, entry.count));
    }

    registry.reset_all();
    out.info("registry reset for the next scenario");
    out.blank();
}

async fn concurrent<S: OutputSink>(
    registry: &Arc<CounterRegistry>,
    demo: &DemoConfig,
    out: &mut Renderer<S>,
) -> anyhow::Result<()> {
    out.section("Concurrent tracking");
    out.info(format!("{} tasks each construct one Worker", demo.workers));

    let delay = Duration::from_millis(demo.step_delay_ms);
    let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(demo.workers);
    for id in 0..demo.workers {
        let registry = Arc::clone(registry);
        handles.push(tokio::spawn(async move {
            let _worker = registry.track("Worker");
            registry.increment("Request");
            tokio::time::sleep(delay).await;
            tracing::debug!(worker = id, "worker done");
        }));
    }
    for handle in handles {
        handle.await.context("worker task panicked")?;
    }

    let requests = registry.count("Request");
    if requests == demo.workers as i64 {
        out.success(format!("Request counted {} times, no lost updates", requests));
    } else {
        out.error(format!(
            "Request counted {} times, expected {}",
            requests, demo.workers
        ));
    }
    registry.reset("Request");
    summary(registry, out);
    out.blank();
    Ok(())
}

async fn session_timeline<S: OutputSink>(
    timeline: &mut Timeline,
    demo: &DemoConfig,
    out: &mut Renderer<S>,
) {
    out.section("Timeline");

    // Before start(): dropped with a warning, not a crash.
    timeline.log_event("too early", out);

    timeline.start();
    let delay = Duration::from_millis(demo.step_delay_ms);
    timeline.log_event("User created", out);
    tokio::time::sleep(delay).await;
    timeline.log_event("Session created, holds User", out);
    tokio::time::sleep(delay).await;
    timeline.log_event("Session dropped", out);
    timeline.log_event("User dropped", out);
    timeline.render("User lifetime", out);
    out.blank();
}

fn ownership_graphs<S: OutputSink>(out: &mut Renderer<S>) {
    out.section("Ownership graphs");

    out.render(&ReportRequest::DependencyGraph {
        title: "Parent and child".to_string(),
        nodes: vec!["Parent".to_string(), "Child".to_string(), "Logger".to_string()],
        edges: vec![
            GraphEdge::new("Parent", "Child", ReferenceKind::Strong),
            GraphEdge::new("Child", "Parent", ReferenceKind::Weak),
            GraphEdge::new("Child", "Logger", ReferenceKind::Unowned),
        ],
    });

    out.subsection("Both sides strong");
    out.render(&ReportRequest::RetainCycleDiagram {
        object_a: "Parent".to_string(),
        object_b: "Child".to_string(),
        has_cycle: true,
    });

    out.subsection("Back reference weak");
    out.render(&ReportRequest::RetainCycleDiagram {
        object_a: "Parent".to_string(),
        object_b: "Child".to_string(),
        has_cycle: false,
    });
}
