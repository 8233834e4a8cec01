//! Undo/redo history integration tests

use floorplanner_core::constants::MAX_HISTORY;
use floorplanner_core::FloorPlan;
use floorplanner_designer::HistoryManager;
use proptest::prelude::*;

fn plan(n: usize) -> FloorPlan {
    FloorPlan::named(format!("plan {n}"))
}

#[test]
fn test_commits_grow_until_the_cap() {
    let mut history = HistoryManager::new(plan(0));
    for n in 1..MAX_HISTORY {
        history.commit(plan(n));
        assert_eq!(history.len(), n + 1);
        assert_eq!(history.cursor(), n);
    }
    assert_eq!(history.len(), MAX_HISTORY);

    // One more evicts the oldest.
    history.commit(plan(MAX_HISTORY));
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history.cursor(), MAX_HISTORY - 1);
    assert_eq!(history.entries()[0].name, "plan 1");
    assert_eq!(history.current().unwrap().name, format!("plan {MAX_HISTORY}"));
}

#[test]
fn test_undo_then_redo_is_idempotent() {
    let mut history = HistoryManager::new(plan(0));
    history.commit(plan(1));
    history.commit(plan(2));
    let before = history.current().cloned();

    history.undo();
    history.redo();

    assert_eq!(history.current().cloned(), before);
    assert_eq!(history.cursor(), 2);
}

#[test]
fn test_commit_after_undo_drops_redo_tail() {
    let mut history = HistoryManager::new(plan(0));
    history.commit(plan(1));
    history.commit(plan(2));
    history.undo();
    history.undo();
    assert!(history.can_redo());

    history.commit(plan(9));
    assert!(!history.can_redo());
    assert_eq!(history.len(), 2);
    let names: Vec<_> = history.entries().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["plan 0", "plan 9"]);
}

#[derive(Debug, Clone)]
enum Op {
    Commit,
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![3 => Just(Op::Commit), 1 => Just(Op::Undo), 1 => Just(Op::Redo)]
}

proptest! {
    #[test]
    fn prop_cursor_stays_in_range(ops in prop::collection::vec(op(), 0..200)) {
        let mut history = HistoryManager::new(plan(0));
        let mut displayed = plan(0);
        let mut next = 1;

        for op in ops {
            match op {
                Op::Commit => {
                    displayed = plan(next);
                    next += 1;
                    history.commit(displayed.clone());
                }
                Op::Undo => {
                    if let Some(p) = history.undo() {
                        displayed = p.clone();
                    }
                }
                Op::Redo => {
                    if let Some(p) = history.redo() {
                        displayed = p.clone();
                    }
                }
            }
            prop_assert!(history.len() <= MAX_HISTORY);
            prop_assert!(history.cursor() < history.len());
            prop_assert_eq!(history.current(), Some(&displayed));
            prop_assert_eq!(history.can_undo(), history.cursor() > 0);
            prop_assert_eq!(history.can_redo(), history.cursor() + 1 < history.len());
        }
    }
}
