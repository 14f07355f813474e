mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::recovery::RecoveryArgs;
use commands::scenarios::ScenariosArgs;
use commands::stress::StressArgs;

/// Portfolio stress testing against historical and hypothetical shocks
#[derive(Parser)]
#[command(
    name = "stress-lab",
    version,
    about = "Portfolio stress testing against historical and hypothetical shocks",
    long_about = "Applies a named market shock to a multi-asset portfolio, reports \
                  per-asset and aggregate losses, and projects a compounding recovery \
                  path back to the pre-shock value."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in stress scenarios
    Scenarios(ScenariosArgs),
    /// Stress a portfolio under one scenario and project its recovery
    Stress(StressArgs),
    /// Project a compounding recovery path on its own
    Recovery(RecoveryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Scenarios(args) => commands::scenarios::run_scenarios(args),
        Commands::Stress(args) => commands::stress::run_stress(args),
        Commands::Recovery(args) => commands::recovery::run_recovery(args),
        Commands::Version => {
            println!("stress-lab {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
