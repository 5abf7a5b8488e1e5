use lifescope::kernel::registry::{type_label, CounterEntry, CounterRegistry};

#[test]
fn test_increment_decrement_round_trip() {
    let registry = CounterRegistry::new();

    assert_eq!(registry.increment("User"), 1);
    assert_eq!(registry.increment("User"), 2);
    assert_eq!(registry.decrement("User"), 1);
    assert_eq!(registry.decrement("User"), 0);

    assert!(!registry.has_leaks(), "Balanced construct/destroy should not leak");
    println!("Balanced lifecycle: no leaks");
}

#[test]
fn test_unmatched_increments_are_leaks() {
    let registry = CounterRegistry::new();
    for _ in 0..3 {
        registry.increment("User");
    }

    assert!(registry.has_leaks());
    assert_eq!(registry.leaks_only(), vec![CounterEntry::new("User", 3)]);
}

#[test]
fn test_count_is_net_of_operations() {
    let registry = CounterRegistry::new();
    let ops = [true, true, false, true, false, false, false, false];
    let mut expected = 0i64;

    for inc in ops {
        if inc {
            registry.increment("Node");
            expected += 1;
        } else {
            registry.decrement("Node");
            expected -= 1;
        }
        assert_eq!(registry.count("Node"), expected);
    }

    assert_eq!(registry.count("Node"), -2, "Decrements may outnumber increments");
}

#[test]
fn test_decrement_unseen_label_goes_negative() {
    let registry = CounterRegistry::new();

    assert_eq!(registry.decrement("Ghost"), -1);
    assert!(!registry.has_leaks(), "Negative counts are not leaks");
    assert!(registry.leaks_only().is_empty());
    assert_eq!(registry.over_released(), vec![CounterEntry::new("Ghost", -1)]);
}

#[test]
fn test_count_does_not_create_entry() {
    let registry = CounterRegistry::new();

    assert_eq!(registry.count("Unseen"), 0);
    assert!(registry.snapshot().is_empty(), "count() must be read-only");
}

#[test]
fn test_reset_creates_zero_entry() {
    let registry = CounterRegistry::new();
    registry.increment("A");
    registry.increment("A");

    registry.reset("A");
    registry.reset("B");

    assert_eq!(
        registry.snapshot(),
        vec![CounterEntry::new("A", 0), CounterEntry::new("B", 0)]
    );
    assert!(!registry.has_leaks());
}

#[test]
fn test_reset_all_empties_snapshot() {
    let registry = CounterRegistry::new();
    registry.increment("A");
    registry.decrement("B");

    registry.reset_all();

    assert!(registry.snapshot().is_empty());
    assert!(!registry.has_leaks());
}

#[test]
fn test_snapshot_sorted_by_label() {
    let registry = CounterRegistry::new();
    for label in ["zeta", "Alpha", "mid", "alpha", ""] {
        registry.increment(label);
    }

    let labels: Vec<String> = registry.snapshot().into_iter().map(|e| e.label).collect();
    let mut sorted = labels.clone();
    sorted.sort();

    assert_eq!(labels, sorted);
    assert_eq!(labels.first().map(String::as_str), Some(""), "Empty label is legal");
}

#[test]
fn test_has_leaks_matches_snapshot() {
    let registry = CounterRegistry::new();
    registry.increment("A");
    registry.decrement("A");
    registry.decrement("B");
    assert_eq!(
        registry.has_leaks(),
        registry.snapshot().iter().any(|e| e.count > 0)
    );

    registry.increment("C");
    assert!(registry.has_leaks());
    assert_eq!(
        registry.has_leaks(),
        registry.snapshot().iter().any(|e| e.count > 0)
    );
}

#[test]
fn test_live_guard_counts_until_drop() {
    let registry = CounterRegistry::shared();

    let first = registry.track("Session");
    let second = registry.track("Session");
    assert_eq!(registry.count("Session"), 2);
    assert_eq!(first.label(), "Session");

    drop(first);
    assert_eq!(registry.count("Session"), 1);
    drop(second);
    assert_eq!(registry.count("Session"), 0);
    assert!(!registry.has_leaks());
}

struct Widget;

#[test]
fn test_track_type_uses_short_name() {
    let registry = CounterRegistry::shared();

    let guard = registry.track_type::<Widget>();
    assert_eq!(guard.label(), "Widget");
    assert_eq!(registry.count("Widget"), 1);

    assert_eq!(type_label::<String>(), "String");
    assert_eq!(type_label::<Vec<u8>>(), "Vec<u8>");
}

mod app {
    pub struct Item;
}

#[test]
fn test_type_label_for_compound_types() {
    assert_eq!(type_label::<[app::Item]>(), "[Item]");
    assert_eq!(type_label::<[app::Item; 3]>(), "[Item; 3]");
    assert_eq!(type_label::<(u8, app::Item)>(), "(u8, Item)");
    assert_eq!(type_label::<Vec<app::Item>>(), "Vec<Item>");
    assert_eq!(type_label::<&str>(), "&str");

    let registry = CounterRegistry::shared();
    let _slice = registry.track_type::<[app::Item]>();
    let _again = registry.track_type::<[app::Item]>();
    assert_eq!(registry.count("[Item]"), 2, "Same type, same label");
}
