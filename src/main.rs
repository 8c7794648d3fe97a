mod handlers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use onboard::engine::config::Config;
use onboard::engine::types::{Assignee, Phase, TaskStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "onboard", version, about = "New-hire onboarding checklist")]
struct Cli {
    /// Data directory (defaults to $ONBOARD_HOME, then ./.onboard)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Initialize the onboarding store
    Init,
    /// Add a new hire with the default checklist
    Hire(handlers::hire::NewHireArgs),
    /// List all hires
    Hires {
        #[arg(long)]
        json: bool,
    },
    /// Select the hire other commands act on
    Use { hire: String },
    /// Show readiness and Day 1 status
    Status {
        #[arg(long)]
        hire: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the checklist grouped by section
    Tasks {
        #[arg(long)]
        hire: Option<String>,
        /// Only show one phase ("pre-boarding" or "day-1")
        #[arg(long)]
        phase: Option<Phase>,
        /// Only show one assignee ("employee", "owner" or "manager")
        #[arg(long)]
        assignee: Option<Assignee>,
    },
    /// Set a task's status ("not-started", "in-progress", "completed")
    Set {
        task: String,
        status: TaskStatus,
        #[arg(long)]
        hire: Option<String>,
        /// Strict mode: require exact ID, ID prefix or title (no fuzzy matching)
        #[arg(long)]
        strict: bool,
    },
    /// Append a task to the checklist
    AddTask {
        #[command(flatten)]
        args: handlers::add_task::AddTaskArgs,
        #[arg(long)]
        hire: Option<String>,
    },
    /// Remove a task from the checklist
    RemoveTask {
        task: String,
        #[arg(long)]
        hire: Option<String>,
        #[arg(long)]
        strict: bool,
    },
    /// Put every task back to "Not started"
    Reset {
        #[arg(long)]
        hire: Option<String>,
    },
    /// Insert demo hires at different stages
    Seed,
    /// Explain how the current status was derived
    Why {
        #[arg(long)]
        hire: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %config.data_dir.display(), "config resolved");

    match cli.command {
        Commands::Init
        | Commands::Hire(..)
        | Commands::Use { .. }
        | Commands::Set { .. }
        | Commands::AddTask { .. }
        | Commands::RemoveTask { .. }
        | Commands::Reset { .. }
        | Commands::Seed => dispatch_write_ops(&config, cli.command),
        Commands::Hires { .. }
        | Commands::Status { .. }
        | Commands::Tasks { .. }
        | Commands::Why { .. } => dispatch_read_ops(&config, cli.command),
    }
}

fn dispatch_write_ops(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init => handlers::init::handle(config),
        Commands::Hire(args) => handlers::hire::handle(config, args),
        Commands::Use { hire } => handlers::use_hire::handle(config, &hire),
        Commands::Set {
            task,
            status,
            hire,
            strict,
        } => handlers::set::handle(config, hire.as_deref(), &task, status, strict),
        Commands::AddTask { args, hire } => {
            handlers::add_task::handle(config, hire.as_deref(), args)
        }
        Commands::RemoveTask { task, hire, strict } => {
            handlers::remove_task::handle(config, hire.as_deref(), &task, strict)
        }
        Commands::Reset { hire } => handlers::reset::handle(config, hire.as_deref()),
        Commands::Seed => handlers::seed::handle(config),
        _ => unreachable!("Invalid write command dispatch"),
    }
}

fn dispatch_read_ops(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Hires { json } => handlers::hires::handle(config, json),
        Commands::Status { hire, json } => handlers::status::handle(config, hire.as_deref(), json),
        Commands::Tasks {
            hire,
            phase,
            assignee,
        } => handlers::tasks::handle(config, hire.as_deref(), phase, assignee),
        Commands::Why { hire } => handlers::why::handle(config, hire.as_deref()),
        _ => unreachable!("Invalid read command dispatch"),
    }
}
