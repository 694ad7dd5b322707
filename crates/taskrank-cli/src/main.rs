use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "taskrank-cli", version, about = "taskrank CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank active tasks, most pressing first
    Rank {
        #[command(flatten)]
        args: commands::rank::RankArgs,
        /// Show at most this many tasks (overrides display.limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show active tasks grouped by Eisenhower quadrant
    Group {
        #[command(flatten)]
        args: commands::rank::RankArgs,
    },
    /// Show the single task to do next
    Next {
        #[command(flatten)]
        args: commands::rank::RankArgs,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TASKRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank { args, limit } => commands::rank::run_rank(args, limit),
        Commands::Group { args } => commands::rank::run_group(args),
        Commands::Next { args } => commands::rank::run_next(args),
        Commands::Task { action } => commands::task::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
