//! Cadence CLI - Command-line front end for the Cadence loop scheduler

mod commands;
mod demo;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{replay, run};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Fixed-timestep game loop runner and replay tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Log loop start/stop and clamped frames (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the headless bouncing-ball demo on the wall clock
    Run {
        /// Path to a loop config TOML file
        #[arg(long)]
        config: Option<String>,

        /// Simulated seconds to run before stopping
        #[arg(long, default_value = "5.0")]
        seconds: f64,

        /// Kick the ball every N presented frames (0 disables)
        #[arg(long, default_value = "90")]
        kick_every: u64,

        /// Refresh rate that presenting waits for (0 disables pacing)
        #[arg(long, default_value = "60.0")]
        vsync_hz: f64,
    },

    /// Feed raw frame deltas through the scheduler and print update counts
    Replay {
        /// Comma-separated frame deltas in seconds (e.g. 0,0.02,0.02,0.3)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        deltas: Vec<f64>,

        /// Clock value at the first reading
        #[arg(long, default_value = "0.0")]
        start: f64,

        /// Path to a loop config TOML file
        #[arg(long)]
        config: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Commands::Run {
            config,
            seconds,
            kick_every,
            vsync_hz,
        } => run::run(run::RunArgs {
            config,
            seconds,
            kick_every,
            vsync_hz,
        })?,
        Commands::Replay {
            deltas,
            start,
            config,
            format,
        } => replay::run(replay::ReplayArgs {
            deltas,
            start,
            config,
            format,
        })?,
    };

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
