//! Some utility functions to pretty-print tasks and calendars

use chrono::{Local, NaiveDate};

use crate::calendar::{day_counts, MonthCursor};
use crate::task::Task;

const WEEKDAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Formats tasks as a text table (date, title, status, id), one row per task.
/// An empty slice formats as an invitation to add the first task.
pub fn format_task_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks. Add the first one!\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<12} {:<30} {:<10} {}\n", "Date", "Title", "Status", "Id"));
    for task in tasks {
        let status = if task.completed() { "completed" } else { "active" };
        out.push_str(&format!(
            "{:<12} {:<30} {:<10} {}\n",
            task.date().to_string(),
            task.title(),
            status,
            task.id()
        ));
    }
    out
}

/// A utility that pretty-prints a list of tasks
pub fn print_task_table(tasks: &[&Task]) {
    print!("{}", format_task_table(tasks));
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    [{}] {}  {} (id {})", completion, task.date(), task.title(), task.id());
}

/// Formats the month grid of `cursor`: a Monday-first calendar where each cell shows
/// the day number, a `*` marker on `today`, and the number of tasks scheduled that day.
pub fn format_month_grid(cursor: &MonthCursor, tasks: &[Task], today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", cursor.first_day().format("%B %Y")));
    for name in &WEEKDAY_NAMES {
        out.push_str(&format!("{:>3}     ", name));
    }
    out.push('\n');

    let counts = day_counts(cursor, tasks);
    let mut column = 0;
    for _ in 0..cursor.leading_blanks() {
        out.push_str("        ");
        column += 1;
    }
    for day in 1..=cursor.days_in_month() {
        let marker = match cursor.date_of(day) {
            Some(date) if date == today => '*',
            _ => ' ',
        };
        let count = counts[(day - 1) as usize];
        let count_part = if count > 0 { format!("({})", count) } else { String::new() };
        out.push_str(&format!("{:>3}{}{:<4}", day, marker, count_part));

        column += 1;
        if column == 7 {
            out.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        out.push('\n');
    }
    out
}

/// A utility that pretty-prints the month grid around today
pub fn print_month_grid(cursor: &MonthCursor, tasks: &[Task]) {
    print!("{}", format_month_grid(cursor, tasks, Local::now().date_naive()));
}
