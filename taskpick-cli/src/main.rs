use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use taskpick_cli::{config, render, seed, session::Session, state};
use taskpick_core::{project_timeline, Scheduler, SearchQuery, SortKey};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "taskpick",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TASKPICK_BUILD_SHA"), ")"),
    about = "Deadline-aware task list with a time-budget optimizer"
)]
struct Cli {
    /// JSON task list to start from (read only, never written back)
    #[arg(long, global = true)]
    tasks: Option<PathBuf>,

    /// Config file (default: ~/.taskpick/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print tasks in a sorted view
    List {
        /// deadline, priority or type (default from config)
        #[arg(long)]
        by: Option<SortKey>,
    },

    /// Pick the highest-priority set of tasks that fits in a time budget
    Optimize {
        /// Available time in minutes
        #[arg(long, allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Find tasks by keyword or by date (YYYY-MM-DD)
    Search { query: String },

    /// Print a Gantt-style timeline relative to now
    Timeline,

    /// Interactive session: add tasks and query them until `quit`
    Session,

    /// Write the default config file if none exists
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => state::default_config_path()?,
    };
    let cfg = config::load_config(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter)),
        )
        .with_writer(io::stderr)
        .init();

    let scheduler = match &cli.tasks {
        Some(path) => load_tasks(path)?,
        None => Scheduler::new(),
    };

    match cli.command {
        Command::List { by } => {
            let key = by.unwrap_or(cfg.display.default_sort);
            print!("{}", render::task_table(&scheduler.get_sorted_tasks(key)));
        }

        Command::Optimize { minutes } => {
            cfg.check_budget(minutes)?;
            let sel = scheduler.optimize_summary(minutes)?;
            print!("{}", render::selection(&sel));
        }

        Command::Search { query } => {
            let query = SearchQuery::from_input(&query)?;
            print!("{}", render::search_results(&scheduler.search_task(&query)));
        }

        Command::Timeline => {
            let now = cfg.local_now()?;
            print!("{}", render::timeline(&project_timeline(scheduler.tasks(), now)));
        }

        Command::Session => {
            let mut session = Session::new(scheduler, cfg);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }

        Command::InitConfig => {
            if config::init_config(&config_path)? {
                println!("Wrote {}", config_path.display());
            } else {
                println!("Config already exists: {}", config_path.display());
            }
        }
    }

    Ok(())
}

fn load_tasks(path: &Path) -> Result<Scheduler> {
    if !path.exists() {
        bail!("task file not found: {} (pass --tasks <path>)", path.display());
    }
    seed::load_seed(path)
}
