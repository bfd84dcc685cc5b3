//! Example tasks for a brand new task list

use std::error::Error;

use chrono::{Duration, Local, NaiveDate};

use crate::store::TaskStore;
use crate::traits::StorageSlot;

/// The example tasks an empty list can be filled with, anchored to `today`.
/// Half of them land on `today`, the other half on the day after.
pub fn sample_tasks(today: NaiveDate) -> Vec<(&'static str, NaiveDate)> {
    let tomorrow = today + Duration::days(1);
    vec![
        ("Finish the project", today),
        ("Prepare the presentation", tomorrow),
        ("Study the material", today),
        ("Optimize the code", tomorrow),
        ("Run the tests", today),
        ("Add animations", tomorrow),
        ("Write the documentation", today),
        ("Analyze the results", tomorrow),
    ]
}

/// Populate an empty store with the sample tasks, so a first run does not greet the
/// user with a blank screen. Does nothing if the store already holds tasks.
///
/// This is cosmetic only: it goes through the regular create operation and is not
/// part of the store's contract. Returns how many tasks were created.
pub fn populate_sample_tasks<S: StorageSlot>(store: &mut TaskStore<S>) -> Result<usize, Box<dyn Error>> {
    if store.is_empty() == false {
        return Ok(0);
    }

    let samples = sample_tasks(Local::now().date_naive());
    for (title, date) in &samples {
        store.create(title, &date.to_string())?;
    }
    log::info!("Added {} example tasks to an empty task list", samples.len());
    Ok(samples.len())
}
