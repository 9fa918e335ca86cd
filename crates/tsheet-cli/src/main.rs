use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsheet_cli::commands::{days, duration, overlap, progress, report, round};
use tsheet_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Duration(args)) => duration::run(&mut out, args)?,
        Some(Commands::Overlap(args)) => overlap::run(&mut out, args)?,
        Some(Commands::Round(args)) => round::run_round(&mut out, args, &config)?,
        Some(Commands::Shift(args)) => round::run_shift(&mut out, args)?,
        Some(Commands::Progress(args)) => progress::run(&mut out, args, &config)?,
        Some(Commands::Days(args)) => days::run(&mut out, args)?,
        Some(Commands::Report(args)) => report::run(&mut out, args, &config)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    out.flush()?;
    Ok(())
}
