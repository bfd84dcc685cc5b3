//! The task store, i.e. the single source of truth for the task collection

use std::error::Error;

use chrono::NaiveDate;

use crate::task::{Task, TaskId};
use crate::traits::StorageSlot;

/// The authoritative, persistent collection of tasks.
///
/// Tasks are kept in insertion order, and that order is observable (list views and the
/// durable form both preserve it). Every mutating operation serializes the whole
/// collection back into the underlying slot before returning, so after any successful
/// mutating call the slot reflects the current in-memory state.
#[derive(Debug)]
pub struct TaskStore<S: StorageSlot> {
    slot: S,
    tasks: Vec<Task>,
}

impl<S: StorageSlot> TaskStore<S> {
    /// Initialize a store from the content of its slot.
    ///
    /// An absent slot, an unreadable slot, or a slot whose content does not parse all
    /// yield an empty collection: a missing slot is the normal first-run state, not an
    /// error. Parse and read problems are logged and otherwise ignored.
    pub fn load(slot: S) -> Self {
        let tasks = match slot.read() {
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(tasks) => tasks,
                Err(err) => {
                    log::warn!("Invalid task data: {}. Starting from an empty task list", err);
                    Vec::new()
                },
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("Unable to read stored tasks: {}. Starting from an empty task list", err);
                Vec::new()
            },
        };
        Self { slot, tasks }
    }

    /// The current collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task matching `id`, if any
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Validate `title` and `date`, then append a new, not-yet-completed task and persist.
    ///
    /// Returns the created task. On a validation error the collection is left untouched
    /// and nothing is written to the slot.
    pub fn create(&mut self, title: &str, date: &str) -> Result<&Task, Box<dyn Error>> {
        let (title, date) = validate(title, date)?;
        self.tasks.push(Task::new(title, date));
        self.save()?;
        Ok(self.tasks.last().unwrap(/* this cannot panic, we've just pushed an element */))
    }

    /// Flip the completion state of the task matching `id` and persist.
    ///
    /// Returns whether a task matched. An unknown id is a silent no-op (the task may
    /// just have been deleted by another action) and writes nothing.
    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            None => Ok(false),
            Some(task) => {
                let completed = task.completed();
                task.set_completed(!completed);
                self.save()?;
                Ok(true)
            },
        }
    }

    /// Replace the title and the date of the task matching `id` and persist.
    ///
    /// Validation is the same as [`create`](TaskStore::create), and runs before the
    /// lookup: a rejected update never mutates anything, even for unknown ids.
    /// An unknown id is a silent no-op and writes nothing.
    pub fn update(&mut self, id: &TaskId, title: &str, date: &str) -> Result<bool, Box<dyn Error>> {
        let (title, date) = validate(title, date)?;
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            None => Ok(false),
            Some(task) => {
                task.set_title(title);
                task.set_date(date);
                self.save()?;
                Ok(true)
            },
        }
    }

    /// Remove the task matching `id` and persist.
    ///
    /// Returns whether a task matched. An unknown id is a silent no-op and writes nothing.
    pub fn delete(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>> {
        let len_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == len_before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Serialize the full collection into the slot, overwriting any prior content.
    ///
    /// Called by every mutating operation. A write failure propagates to the caller:
    /// silently dropping it would leave the slot out of step with the collection.
    pub fn save(&mut self) -> Result<(), Box<dyn Error>> {
        let contents = serde_json::to_string(&self.tasks)?;
        self.slot.write(&contents)
    }
}

/// Check the store invariants on user input: a title that is non-empty once trimmed,
/// and a date in ISO `YYYY-MM-DD` form
fn validate(title: &str, date: &str) -> Result<(String, NaiveDate), Box<dyn Error>> {
    let title = title.trim();
    if title.is_empty() {
        return Err("The task title must not be empty".into());
    }
    let date: NaiveDate = date.parse()
        .map_err(|err| format!("Invalid date {:?}: {}", date, err))?;
    Ok((title.to_string(), date))
}
