//! Ranking views: ordered list, quadrant groups, next task.

use std::path::PathBuf;

use clap::Args;
use taskrank_core::priority::scoring::due_date;
use taskrank_core::{active_tasks, group, next_up, rank_iso, Config, RankedTask, Task, TaskSource};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Args)]
pub struct RankArgs {
    /// Task file (JSON array); defaults to store.tasks_file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn load_active(args: &RankArgs, config: &Config) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let store = super::open_store(args.file.clone(), config)?;
    Ok(active_tasks(&store.fetch_tasks()?))
}

fn describe(entry: &RankedTask<'_>, show_scores: bool) -> String {
    let due = due_date(entry.task)
        .map(|d| format!(" (due {d})"))
        .unwrap_or_default();
    let mut line = format!("{}{}", entry.task.title, due);
    if show_scores {
        line.push_str(&format!(
            "  [urgency {:.1}, importance {}, score {:.1}]",
            entry.urgency, entry.importance, entry.score
        ));
    }
    line
}

pub fn run_rank(args: RankArgs, limit: Option<usize>) -> CmdResult {
    let config = Config::load_or_default();
    let tasks = load_active(&args, &config)?;
    let mut ranked = rank_iso(&tasks, args.today.as_deref());

    let limit = limit.unwrap_or(config.display.limit as usize);
    if limit > 0 {
        ranked.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }
    if ranked.is_empty() {
        println!("No active tasks.");
        return Ok(());
    }
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{:>2}. [{}] {}",
            i + 1,
            entry.quadrant,
            describe(entry, config.display.show_scores)
        );
    }
    Ok(())
}

pub fn run_group(args: RankArgs) -> CmdResult {
    let config = Config::load_or_default();
    let tasks = load_active(&args, &config)?;
    let ranked = rank_iso(&tasks, args.today.as_deref());
    let groups = group(&ranked);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }
    for (quadrant, bucket) in groups.iter() {
        if bucket.is_empty() && !config.display.show_empty_quadrants {
            continue;
        }
        println!("=== {} ({}) ===", quadrant, bucket.len());
        // Same order as the bucket; the entries carry the scores.
        for entry in ranked.iter().filter(|r| r.quadrant == quadrant) {
            println!("  - {}", describe(entry, config.display.show_scores));
        }
        println!();
    }
    Ok(())
}

pub fn run_next(args: RankArgs) -> CmdResult {
    let config = Config::load_or_default();
    let tasks = load_active(&args, &config)?;
    let ranked = rank_iso(&tasks, args.today.as_deref());

    match next_up(&ranked) {
        Some(entry) if args.json => println!("{}", serde_json::to_string_pretty(entry)?),
        Some(entry) => {
            println!("Next: {}", describe(entry, config.display.show_scores));
            println!("  Quadrant: {}", entry.quadrant);
            if let Some(desc) = &entry.task.description {
                println!("  {desc}");
            }
        }
        None if args.json => println!("null"),
        None => println!("Nothing to do. No active tasks."),
    }
    Ok(())
}
