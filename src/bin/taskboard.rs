//! The command-line shell around the taskboard library.
//!
//! It only marshals user input into store calls and re-renders the month grid and the
//! task table after every change; all task logic lives in the library.

use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use taskboard::calendar::MonthCursor;
use taskboard::config;
use taskboard::seed;
use taskboard::storage::FileSlot;
use taskboard::store::TaskStore;
use taskboard::traits::StorageSlot;
use taskboard::utils;
use taskboard::views::{self, Filter};
use taskboard::TaskId;

#[derive(Parser)]
#[command(name = "taskboard", version, about = "A calendar-centric to-do task manager")]
struct Cli {
    /// Path of the task file (defaults to a well-known file in the platform data directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task
    Add {
        /// The task title
        title: String,
        /// The day the task is scheduled on, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(long, default_value_t)]
        filter: Filter,
    },
    /// Flip the completion state of a task
    Toggle {
        /// The id of the task, as shown by `list`
        id: String,
    },
    /// Change the title and the date of a task
    Edit {
        /// The id of the task, as shown by `list`
        id: String,
        /// The new title
        #[arg(long)]
        title: String,
        /// The new date, as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Delete a task
    Rm {
        /// The id of the task, as shown by `list`
        id: String,
    },
    /// Show the month grid with per-day task counts
    Month {
        /// Any day inside the month to show, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// How many months to go back from there
        #[arg(long, conflicts_with = "ahead")]
        back: Option<u32>,
        /// How many months to go forward from there
        #[arg(long)]
        ahead: Option<u32>,
    },
    /// List the tasks of a single day
    Day {
        /// The day, as YYYY-MM-DD
        date: String,
    },
    /// Fill an empty task list with a few example tasks
    Seed,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let path = cli.file.unwrap_or_else(config::default_slot_path);
    let slot = FileSlot::new(&path);
    let mut store = TaskStore::load(slot);
    let today = Local::now().date_naive();

    match cli.command {
        Command::Add { title, date } => {
            let date = date.unwrap_or_else(|| today.to_string());
            let task = store.create(&title, &date)?;
            println!("Added task {:?} on {}", task.title(), task.date());
            render(&store, Filter::All, today);
        },
        Command::List { filter } => {
            utils::print_task_table(&views::tasks_by_filter(store.tasks(), filter));
        },
        Command::Toggle { id } => {
            let id = TaskId::from(id);
            if store.toggle(&id)? {
                render(&store, Filter::All, today);
            } else {
                // the task may just have been deleted by another command
                println!("No task with id {}", id);
            }
        },
        Command::Edit { id, title, date } => {
            let id = TaskId::from(id);
            if store.update(&id, &title, &date)? {
                render(&store, Filter::All, today);
            } else {
                println!("No task with id {}", id);
            }
        },
        Command::Rm { id } => {
            let id = TaskId::from(id);
            if store.delete(&id)? {
                render(&store, Filter::All, today);
            } else {
                println!("No task with id {}", id);
            }
        },
        Command::Month { date, back, ahead } => {
            let anchor: NaiveDate = match date {
                Some(date) => date.parse()?,
                None => today,
            };
            let mut cursor = MonthCursor::for_date(anchor);
            for _ in 0..back.unwrap_or(0) {
                cursor.prev();
            }
            for _ in 0..ahead.unwrap_or(0) {
                cursor.next();
            }
            print!("{}", utils::format_month_grid(&cursor, store.tasks(), today));
        },
        Command::Day { date } => {
            let date: NaiveDate = date.parse()?;
            utils::print_task_table(&views::tasks_on(store.tasks(), date));
        },
        Command::Seed => {
            let n = seed::populate_sample_tasks(&mut store)?;
            if n == 0 {
                println!("The task list is not empty, no example tasks were added");
            } else {
                println!("Added {} example tasks", n);
                render(&store, Filter::All, today);
            }
        },
    }

    Ok(())
}

/// Re-render everything a mutation can change: the month grid around today, then the task table
fn render<S: StorageSlot>(store: &TaskStore<S>, filter: Filter, today: NaiveDate) {
    let cursor = MonthCursor::for_date(today);
    print!("{}", utils::format_month_grid(&cursor, store.tasks(), today));
    utils::print_task_table(&views::tasks_by_filter(store.tasks(), filter));
}
