//! End-to-end scenarios against a real on-disk slot

use tempfile::TempDir;

use taskboard::storage::FileSlot;
use taskboard::store::TaskStore;
use taskboard::views::{self, Filter};

fn store_in(dir: &TempDir) -> TaskStore<FileSlot> {
    TaskStore::load(FileSlot::new(&dir.path().join("tasks.json")))
}

/// Empty store → create → toggle → the completed filter holds exactly that task → delete → empty
#[test]
fn create_toggle_filter_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    assert!(store.is_empty());

    let id = store.create("Buy milk", "2024-03-01").unwrap().id().clone();
    assert_eq!(store.len(), 1);

    assert!(store.toggle(&id).unwrap());

    let completed = views::tasks_by_filter(store.tasks(), Filter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id(), &id);
    assert!(completed[0].completed());
    assert!(views::tasks_by_filter(store.tasks(), Filter::Active).is_empty());

    assert!(store.delete(&id).unwrap());
    assert!(store.is_empty());
}

/// A store loaded from the file another store saved into sees the same tasks, in the same order
#[test]
fn reload_round_trips_tasks_and_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_in(&dir);
    store.create("A", "2024-03-01").unwrap();
    let b = store.create("B", "2024-03-02").unwrap().id().clone();
    store.create("C", "2024-03-03").unwrap();
    store.toggle(&b).unwrap();
    store.update(&b, "B, renamed", "2024-03-20").unwrap();

    let reloaded = store_in(&dir);
    assert_eq!(reloaded.tasks(), store.tasks());

    let titles: Vec<&str> = reloaded.tasks().iter().map(|t| t.title()).collect();
    assert_eq!(titles, ["A", "B, renamed", "C"]);
    assert_eq!(reloaded.get(&b).unwrap().completed(), true);
}

/// A missing file is the normal first-run state
#[test]
fn absent_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.is_empty());
}

/// Corrupt content is treated like an absent file, and the next save repairs it
#[test]
fn corrupt_file_loads_as_empty_and_is_overwritten_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let mut store = TaskStore::load(FileSlot::new(&path));
    assert!(store.is_empty());

    store.create("Buy milk", "2024-03-01").unwrap();

    let reloaded = TaskStore::load(FileSlot::new(&path));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].title(), "Buy milk");
}

/// A rejected creation writes nothing to disk
#[test]
fn rejected_create_does_not_touch_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(FileSlot::new(&path));
    assert!(store.create("   ", "2024-03-01").is_err());
    assert!(store.create("Buy milk", "03/01/2024").is_err());

    assert!(path.exists() == false);
}

/// Two stores over the same file do not coordinate: whoever saves last wins.
/// This is a known limitation of the single-slot design (there is no locking and no
/// version detection), not a guaranteed merge behavior.
#[test]
fn shared_slot_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut first = TaskStore::load(FileSlot::new(&path));
    let mut second = TaskStore::load(FileSlot::new(&path));

    first.create("From the first store", "2024-03-01").unwrap();
    second.create("From the second store", "2024-03-02").unwrap();

    let reloaded = TaskStore::load(FileSlot::new(&path));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].title(), "From the second store");
}
