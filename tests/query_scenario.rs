//! Query Scenario Tests
//!
//! End-to-end coverage of the store and executor against the reference
//! scenario: two records, the second parented to the first, filtered
//! with relationship predicates.

use tododb::predicate::Predicate;
use tododb::storage::MemoryBackend;
use tododb::store::{StoreError, TodoStore};

// =============================================================================
// Helper Functions
// =============================================================================

/// id 1: "Add GraphQL Example", id 2: "Add Tracing Example", 2 parented to 1.
fn reference_store() -> TodoStore<MemoryBackend> {
    let mut store = TodoStore::open(MemoryBackend::new()).unwrap();
    store.create("Add GraphQL Example").unwrap();
    store.create("Add Tracing Example").unwrap();
    store.set_parent(2, 1).unwrap();
    store
}

fn query_ids(store: &TodoStore<MemoryBackend>, predicates: &[Predicate]) -> Vec<u64> {
    store
        .query(predicates)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect()
}

// =============================================================================
// Reference Scenario
// =============================================================================

/// Empty predicate set returns every record in id order.
#[test]
fn test_query_all() {
    let store = reference_store();
    assert_eq!(query_ids(&store, &[]), vec![1, 2]);

    let records = store.query(&[]).unwrap();
    assert_eq!(records[0].text, "Add GraphQL Example");
    assert_eq!(records[1].text, "Add Tracing Example");
}

/// HasParent selects only the dependent record.
#[test]
fn test_query_has_parent() {
    let store = reference_store();
    assert_eq!(query_ids(&store, &[Predicate::HasParent]), vec![2]);
}

/// "No parent AND has children" selects only the root with dependents.
#[test]
fn test_query_roots_with_children() {
    let store = reference_store();
    let ids = query_ids(
        &store,
        &[Predicate::not(Predicate::HasParent), Predicate::HasChildren],
    );
    assert_eq!(ids, vec![1]);
}

/// The same filter built as one composed expression.
#[test]
fn test_query_composed_predicate() {
    let store = reference_store();
    let filter = Predicate::and(vec![
        Predicate::not(Predicate::HasParent),
        Predicate::HasChildren,
    ]);
    assert_eq!(query_ids(&store, &[filter]), vec![1]);
}

/// Text equality composes with relationship predicates.
#[test]
fn test_query_text_and_relationship() {
    let store = reference_store();
    let ids = query_ids(
        &store,
        &[
            Predicate::text_equals("Add Tracing Example"),
            Predicate::HasParent,
        ],
    );
    assert_eq!(ids, vec![2]);

    let none = query_ids(
        &store,
        &[
            Predicate::text_equals("Add GraphQL Example"),
            Predicate::HasParent,
        ],
    );
    assert!(none.is_empty());
}

// =============================================================================
// Store Invariants
// =============================================================================

/// Ids are strictly increasing from 1 across many creates.
#[test]
fn test_ids_strictly_increasing() {
    let mut store = TodoStore::open(MemoryBackend::new()).unwrap();
    let mut previous = 0;
    for i in 0..50 {
        let record = store.create(format!("task {}", i)).unwrap();
        assert_eq!(record.id, previous + 1);
        previous = record.id;
    }
}

/// query([]) is identical to all() in content and order.
#[test]
fn test_empty_query_matches_all() {
    let store = reference_store();
    let queried = store.query(&[]).unwrap();
    let all: Vec<_> = store.all().cloned().collect();
    assert_eq!(queried, all);
}

/// Re-parenting moves the child between children sets.
#[test]
fn test_reparenting_property() {
    let mut store = TodoStore::open(MemoryBackend::new()).unwrap();
    store.create("p1").unwrap();
    store.create("p2").unwrap();
    store.create("c").unwrap();

    store.set_parent(3, 1).unwrap();
    store.set_parent(3, 2).unwrap();

    assert!(!store.relations().children_of(1).contains(&3));
    assert!(store.relations().children_of(2).contains(&3));
}

/// Self-parenting is rejected for any id, existing or not.
#[test]
fn test_self_parent_rejected() {
    let mut store = reference_store();
    for id in [1, 2, 1000] {
        assert!(matches!(
            store.set_parent(id, id),
            Err(StoreError::InvalidRelationship { .. })
        ));
    }
}

/// get on a never-created id fails with NotFound.
#[test]
fn test_get_unknown_id() {
    let store = reference_store();
    assert!(matches!(store.get(3), Err(StoreError::NotFound { id: 3 })));
}

/// Mutations after a query do not disturb earlier results.
#[test]
fn test_query_results_are_snapshots() {
    let mut store = reference_store();
    let before = store.query(&[]).unwrap();

    store.create("Add OpenTelemetry Example").unwrap();
    store.update_text(1, "renamed").unwrap();

    assert_eq!(before.len(), 2);
    assert_eq!(before[0].text, "Add GraphQL Example");
    assert_eq!(store.query(&[]).unwrap().len(), 3);
}
