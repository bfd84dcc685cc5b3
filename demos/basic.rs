//! This is an example of how taskboard can be used as a library.
//! It creates a couple of tasks in a temporary file, then shows the list and the month grid.

use std::error::Error;

use taskboard::calendar::MonthCursor;
use taskboard::storage::FileSlot;
use taskboard::store::TaskStore;
use taskboard::utils;
use taskboard::views::{self, Filter};

const DEMO_FILE: &str = "demo_tasks.json";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let slot = FileSlot::new(DEMO_FILE.as_ref());
    let mut store = TaskStore::load(slot);

    let first = store.create("Buy milk", "2024-03-01")?.id().clone();
    store.create("Call the plumber", "2024-03-01")?;
    store.create("Water the plants", "2024-03-15")?;
    store.toggle(&first)?;

    println!("---- all tasks -----");
    utils::print_task_table(&views::tasks_by_filter(store.tasks(), Filter::All));

    println!("---- active tasks only -----");
    utils::print_task_table(&views::tasks_by_filter(store.tasks(), Filter::Active));

    println!("---- the month grid -----");
    let cursor = MonthCursor::new(2024, 3).unwrap();
    utils::print_month_grid(&cursor, store.tasks());

    println!("The tasks are persisted in {:?}; run this demo again and they will be loaded back.", DEMO_FILE);
    Ok(())
}
