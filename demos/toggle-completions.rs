//! This is an example of how taskboard can be used.
//! This binary simply toggles the completion status of every task it finds.

use std::error::Error;

use taskboard::config;
use taskboard::storage::FileSlot;
use taskboard::store::TaskStore;
use taskboard::TaskId;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("This demo flips the completion status of every stored task.");
    println!("You can set the RUST_LOG environment variable to display more info.");
    println!();

    let slot = FileSlot::new(&config::default_slot_path());
    let mut store = TaskStore::load(slot);

    let ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id().clone()).collect();
    let mut n_toggled = 0;
    for id in &ids {
        if store.toggle(id)? {
            n_toggled += 1;
        }
    }

    println!("{} tasks toggled.", n_toggled);
    Ok(())
}
