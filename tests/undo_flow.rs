//! Cross-module scenarios: the command history driving a real store.

use pretty_assertions::assert_eq;

use ordo::history::{Command, HISTORY_LIMIT, History};
use ordo::store::TaskStore;

#[test]
fn full_session_survives_mixed_undo_redo() {
    let store = TaskStore::open_in_memory().unwrap();
    let mut history = History::new();

    // add two tasks
    let milk = store.add("Buy milk").unwrap();
    history.push(Command::Add { task_id: milk });
    let dog = store.add("Walk the dog").unwrap();
    history.push(Command::Add { task_id: dog });

    // complete one, rename the other
    store.set_completed(milk, true).unwrap();
    history.push(Command::Toggle {
        task_id: milk,
        old_completed: false,
    });
    store.set_description(dog, "Walk the dog twice").unwrap();
    history.push(Command::Edit {
        task_id: dog,
        old_description: "Walk the dog".into(),
        new_description: "Walk the dog twice".into(),
    });

    // wind all the way back
    while history.can_undo() {
        assert!(history.undo(&store));
    }
    assert!(store.list_active().unwrap().is_empty());
    assert_eq!(store.list_trashed().unwrap().len(), 2);

    // and all the way forward again
    while history.can_redo() {
        assert!(history.redo(&store));
    }
    let active = store.list_active().unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().any(|t| t.id == milk && t.completed));
    assert!(
        active
            .iter()
            .any(|t| t.id == dog && t.description == "Walk the dog twice")
    );
}

#[test]
fn history_window_slides_over_a_long_session() {
    let store = TaskStore::open_in_memory().unwrap();
    let mut history = History::new();

    // One more edit than the history can hold
    let id = store.add("v0").unwrap();
    for i in 1..=HISTORY_LIMIT + 1 {
        let old = format!("v{}", i - 1);
        let new = format!("v{}", i);
        store.set_description(id, &new).unwrap();
        history.push(Command::Edit {
            task_id: id,
            old_description: old,
            new_description: new,
        });
    }

    // Only the last HISTORY_LIMIT edits can be unwound; the description
    // lands on v1, not v0 — the oldest edit fell off the bottom.
    let mut undone = 0;
    while history.undo(&store) {
        undone += 1;
    }
    assert_eq!(undone, HISTORY_LIMIT);
    assert_eq!(store.list_active().unwrap()[0].description, "v1");
}

#[test]
fn purged_task_blocks_undo_without_corrupting_history() {
    let store = TaskStore::open_in_memory().unwrap();
    let mut history = History::new();

    let keeper = store.add("keeper").unwrap();
    history.push(Command::Add { task_id: keeper });

    let doomed = store.add("doomed").unwrap();
    history.push(Command::Add { task_id: doomed });
    store.soft_delete(doomed).unwrap();
    history.push(Command::Trash { task_id: doomed });

    // Purge behind the history's back
    store.hard_delete(doomed).unwrap();

    // Undoing the trash fails (NotFound) and stays failing
    assert!(!history.undo(&store));
    assert!(!history.undo(&store));
    assert!(history.can_undo());

    // The keeper's own history is untouched underneath; the store state
    // for it is still consistent
    let active = store.list_active().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, keeper);
}

#[test]
fn ids_are_not_recycled_across_undo() {
    let store = TaskStore::open_in_memory().unwrap();
    let mut history = History::new();

    let first = store.add("first").unwrap();
    history.push(Command::Add { task_id: first });
    assert!(history.undo(&store));

    // A new add while `first` sits in the trash must not reuse its id
    let second = store.add("second").unwrap();
    assert_ne!(first, second);

    // Redo restores the original row under the original id
    assert!(history.redo(&store));
    let ids: Vec<i64> = store.list_active().unwrap().iter().map(|t| t.id).collect();
    assert!(ids.contains(&first));
    assert!(ids.contains(&second));
}
