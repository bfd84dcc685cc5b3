//! The month-grid calendar view: which month is displayed, and what its grid looks like

use chrono::{Datelike, Local, NaiveDate};

use crate::task::Task;
use crate::views;

/// The (year, month) pair a calendar is currently displaying.
///
/// Months are 1-based, like chrono's. The cursor can be moved one month at a time and
/// wraps across year boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// The cursor for the month containing `date`
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The cursor for the month containing today (local time)
    pub fn for_today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// A cursor for an explicit year and 1-based month.
    /// Returns `None` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The displayed month, 1-based
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move to the previous month, wrapping into December of the previous year from January
    pub fn prev(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Move to the next month, wrapping into January of the next year from December
    pub fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// The first day of the displayed month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap(/* this cannot panic, every constructor checked the month is valid */)
    }

    /// The number of days in the displayed month
    pub fn days_in_month(&self) -> u32 {
        let mut next_month = *self;
        next_month.next();
        next_month.first_day()
            .pred_opt()
            .unwrap(/* this cannot panic, the first of a month always has a predecessor */)
            .day()
    }

    /// The number of empty cells before day 1 in a grid whose weeks start on Monday (0 to 6)
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_monday()
    }

    /// The date of the given 1-based day of the displayed month, if that day exists
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Whether `date` falls inside the displayed month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Per-day task counts for the cursor's month, for the "n tasks" label of each grid cell.
/// Index 0 is day 1.
pub fn day_counts(cursor: &MonthCursor, tasks: &[Task]) -> Vec<usize> {
    (1..=cursor.days_in_month())
        .map(|day| views::tasks_for_day(tasks, day, cursor.month(), cursor.year()).len())
        .collect()
}
