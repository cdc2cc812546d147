//! Taskpulse CLI
//!
//! Hosts the dashboard in a terminal:
//! - Run the live dashboard, driven by commands on stdin
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskpulse::clock::format_time;
use taskpulse::config::{generate_default_config, Config, LoggingConfig};
use taskpulse::runtime::{write_board, DashboardHandle, DashboardRuntime, TerminalRenderer};
use taskpulse::TaskId;

#[derive(Parser)]
#[command(name = "taskpulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal productivity dashboard")]
#[command(long_about = "Taskpulse keeps a live clock, animated stats and a task list.\nRun `taskpulse run` and type `help` for commands.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for `list` (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard in this terminal
    Run {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

const HELP: &str = "\
Commands:
  add <text>   Add a task
  done <id>    Complete or reopen a task
  rm <id>      Delete a task
  list         Show the board
  quit         Exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::load_default(),
            };
            init_logging(&config.logging);
            run(config, &cli.format).await
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taskpulse={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(config: Config, format: &str) -> anyhow::Result<()> {
    tracing::info!("Taskpulse v{}", env!("CARGO_PKG_VERSION"));

    let (handle, join) = DashboardRuntime::spawn(TerminalRenderer::stdout(), &config);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "add" => handle.add_task(rest).await?,
            "done" => with_id(rest, |id| handle.toggle_task(id)).await?,
            "rm" => with_id(rest, |id| handle.delete_task(id)).await?,
            "list" | "ls" => print_board(&handle, &config, format).await?,
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (type `help`)", other),
        }
    }

    handle.shutdown().await?;
    join.await?;
    tracing::info!("Taskpulse shutdown complete");
    Ok(())
}

async fn with_id<F, Fut>(arg: &str, action: F) -> anyhow::Result<()>
where
    F: FnOnce(TaskId) -> Fut,
    Fut: std::future::Future<Output = Result<(), taskpulse::RuntimeError>>,
{
    match arg.parse::<TaskId>() {
        Ok(id) => Ok(action(id).await?),
        Err(_) => {
            println!("Expected a task id, got {:?}", arg);
            Ok(())
        }
    }
}

async fn print_board(handle: &DashboardHandle, config: &Config, format: &str) -> anyhow::Result<()> {
    let snapshot = handle.snapshot().await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        _ => {
            let time = format_time(&chrono::Local::now(), &config.dashboard.clock_format);
            write_board(&mut std::io::stdout(), &time, &snapshot)?;
        }
    }
    Ok(())
}
