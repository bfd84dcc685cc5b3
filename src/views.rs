//! Pure, read-only views over a snapshot of the task collection.
//!
//! Nothing in here mutates tasks or touches the durable slot; these functions are
//! what list and calendar rendering is built from.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::task::Task;

/// Which subset of tasks the list view displays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Keep all tasks
    All,
    /// Keep only the tasks that still need action
    Active,
    /// Keep only the completed tasks
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl FromStr for Filter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!("Unknown filter {:?} (expected all, active or completed)", other)),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let name = match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

/// Returns the tasks selected by `filter`, preserving their relative order.
///
/// `Active` and `Completed` partition the collection exactly; `All` returns it unchanged.
pub fn tasks_by_filter<'t>(tasks: &'t [Task], filter: Filter) -> Vec<&'t Task> {
    tasks.iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => task.completed() == false,
            Filter::Completed => task.completed(),
        })
        .collect()
}

/// Returns the tasks scheduled on exactly this day, preserving their relative order
pub fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter()
        .filter(|task| task.date() == date)
        .collect()
}

/// Same as [`tasks_on`], with the day spelled out as day/month/year.
/// A day/month/year triple that does not form a valid calendar date selects nothing.
pub fn tasks_for_day(tasks: &[Task], day: u32, month: u32, year: i32) -> Vec<&Task> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => tasks_on(tasks, date),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(title: &str, date: &str, completed: bool) -> Task {
        Task::new_with_parameters(
            TaskId::random(),
            title.to_string(),
            date.parse().unwrap(),
            completed,
        )
    }

    fn sample_collection() -> Vec<Task> {
        vec![
            task("A", "2024-03-01", false),
            task("B", "2024-03-01", true),
            task("C", "2024-03-02", false),
            task("D", "2024-04-01", true),
            task("E", "2023-03-01", false),
        ]
    }

    #[test]
    fn filter_all_returns_the_collection_unchanged() {
        let tasks = sample_collection();
        let all = tasks_by_filter(&tasks, Filter::All);
        let titles: Vec<&str> = all.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let tasks = sample_collection();
        let active = tasks_by_filter(&tasks, Filter::Active);
        let completed = tasks_by_filter(&tasks, Filter::Completed);

        assert_eq!(active.len() + completed.len(), tasks.len());
        for task in &active {
            assert_eq!(task.completed(), false);
            assert!(completed.iter().all(|c| c.id() != task.id()));
        }
        for task in &completed {
            assert!(task.completed());
        }

        let active_titles: Vec<&str> = active.iter().map(|t| t.title()).collect();
        let completed_titles: Vec<&str> = completed.iter().map(|t| t.title()).collect();
        assert_eq!(active_titles, ["A", "C", "E"]);
        assert_eq!(completed_titles, ["B", "D"]);
    }

    #[test]
    fn tasks_for_day_matches_day_month_and_year_exactly() {
        let tasks = sample_collection();

        let titles: Vec<&str> = tasks_for_day(&tasks, 1, 3, 2024).iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["A", "B"]);

        // same day and month, another year
        let titles: Vec<&str> = tasks_for_day(&tasks, 1, 3, 2023).iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["E"]);
    }

    #[test]
    fn tasks_for_day_is_empty_when_nothing_matches() {
        let tasks = sample_collection();
        assert!(tasks_for_day(&tasks, 15, 3, 2024).is_empty());
        assert!(tasks_for_day(&tasks, 31, 2, 2024).is_empty());
        assert!(tasks_for_day(&[], 1, 3, 2024).is_empty());
    }

    #[test]
    fn filter_parses_from_its_lowercase_names() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Active".parse::<Filter>().unwrap(), Filter::Active);
        assert_eq!("COMPLETED".parse::<Filter>().unwrap(), Filter::Completed);
        assert!("done".parse::<Filter>().is_err());
    }
}
