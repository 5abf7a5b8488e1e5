use lifescope::kernel::registry::CounterRegistry;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 32;

#[test]
fn test_no_lost_updates_across_threads() {
    let registry = CounterRegistry::shared();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.increment("X");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.count("X"), THREADS as i64, "Every increment must land");
}

#[test]
fn test_mixed_labels_under_contention() {
    let registry = CounterRegistry::shared();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..100 {
                    registry.increment("shared");
                    registry.increment(&format!("own-{:02}", i));
                    registry.decrement("shared");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), THREADS + 1);
    assert_eq!(registry.count("shared"), 0);
    assert!(snapshot
        .iter()
        .filter(|e| e.label.starts_with("own-"))
        .all(|e| e.count == 100));
}

#[test]
fn test_snapshot_counts_stay_in_range() {
    // Each writer holds at most one guard per label, so any consistent view
    // has every count in 0..=writers.
    let registry = CounterRegistry::shared();
    let writers = 8;

    let handles: Vec<_> = (0..writers)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    let a = registry.track("a");
                    let b = registry.track("b");
                    drop(b);
                    drop(a);
                }
            })
        })
        .collect();

    for _ in 0..200 {
        for entry in registry.snapshot() {
            assert!(
                (0..=writers).contains(&entry.count),
                "{} out of range: {}",
                entry.label,
                entry.count
            );
        }
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(!registry.has_leaks());
}

#[test]
fn test_reset_all_is_atomic_with_snapshot() {
    let registry = CounterRegistry::shared();
    for i in 0..50 {
        registry.increment(&format!("label-{}", i));
    }

    let clearer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.reset_all())
    };
    let seen = registry.snapshot().len();
    clearer.join().unwrap();

    assert!(seen == 0 || seen == 50, "Saw a partial reset: {} entries", seen);
    assert!(registry.snapshot().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_guards_across_tokio_tasks() {
    let registry = CounterRegistry::shared();

    let mut handles = Vec::new();
    for _ in 0..64 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let _guard = registry.track("Worker");
            tokio::task::yield_now().await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(registry.count("Worker"), 0, "All guards dropped with their tasks");
    assert!(!registry.has_leaks());
}
