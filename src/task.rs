//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// An opaque, unique task identifier.
///
/// Ids are assigned by the store at creation time and stay stable for the task's lifetime.
/// They are random UUIDs rather than creation timestamps, so two tasks created within the
/// same clock tick cannot collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl FromStr for TaskId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Persistent unique identifier, assigned by the store when the task is created
    id: TaskId,

    /// The display title of the task
    title: String,

    /// The calendar day this task is scheduled on.
    /// Serialized in its ISO form (`YYYY-MM-DD`), which is also the form user input arrives in
    date: NaiveDate,

    /// Whether this task has been completed
    completed: bool,
}

impl Task {
    /// Create a brand new Task, scheduled on `date` and not completed yet.
    /// This will pick a new (random) task ID.
    pub fn new(title: String, date: NaiveDate) -> Self {
        let new_id = TaskId::random();
        Self::new_with_parameters(new_id, title, date, false)
    }

    /// Create a Task instance from parts that already exist (e.g. read back from the durable slot)
    pub fn new_with_parameters(id: TaskId, title: String, date: NaiveDate, completed: bool) -> Self {
        Self {
            id,
            title,
            date,
            completed,
        }
    }

    pub fn id(&self) -> &TaskId     { &self.id        }
    pub fn title(&self) -> &str     { &self.title     }
    pub fn date(&self) -> NaiveDate { self.date       }
    pub fn completed(&self) -> bool { self.completed  }

    /// Rename a task
    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    /// Reschedule a task on another day
    pub fn set_date(&mut self, new_date: NaiveDate) {
        self.date = new_date;
    }

    /// Set the completion state
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
