//! Task management commands for CLI.

use std::path::PathBuf;

use clap::Subcommand;
use taskrank_core::task::parse_day;
use taskrank_core::{Config, Level, Task, TaskSource};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Scheduled day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Due day (YYYY-MM-DD); overrides --date for urgency
        #[arg(long)]
        end_date: Option<String>,
        /// low, medium or high
        #[arg(long)]
        priority: Option<String>,
        /// low, medium or high
        #[arg(long)]
        importance: Option<String>,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Task file; defaults to store.tasks_file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List tasks in stored order
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Mark a task completed
    Done {
        /// Task ID
        id: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a task
    Remove {
        /// Task ID
        id: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

// Input from the user is checked up front; only stored records get the
// lenient treatment.
fn day_arg(flag: &str, value: Option<String>) -> Result<Option<chrono::NaiveDate>, String> {
    value
        .map(|v| parse_day(&v).ok_or_else(|| format!("invalid {flag} '{v}', expected YYYY-MM-DD")))
        .transpose()
}

fn level_arg(flag: &str, value: Option<String>) -> Result<Option<Level>, String> {
    value
        .map(|v| Level::from_label(&v).ok_or_else(|| format!("invalid {flag} '{v}', expected low, medium or high")))
        .transpose()
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TaskAction::Add {
            title,
            date,
            end_date,
            priority,
            importance,
            description,
            file,
        } => {
            let store = super::open_store(file, &config)?;
            let task = Task {
                id: Uuid::new_v4().to_string(),
                title,
                description,
                date: day_arg("--date", date)?,
                end_date: day_arg("--end-date", end_date)?,
                priority: level_arg("--priority", priority)?,
                importance: level_arg("--importance", importance)?,
                completed: false,
            };
            store.save_task(&task)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { all, file } => {
            let store = super::open_store(file, &config)?;
            let tasks: Vec<Task> = store
                .fetch_tasks()?
                .into_iter()
                .filter(|t| all || !t.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Done { id, file } => {
            let store = super::open_store(file, &config)?;
            let task = store.complete_task(&id)?;
            println!("Task completed: {} ({})", task.id, task.title);
        }
        TaskAction::Remove { id, file } => {
            let store = super::open_store(file, &config)?;
            store.remove_task(&id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
