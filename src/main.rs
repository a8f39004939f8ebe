use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::{AppConfig, Frontend};
use connect_four::{console, logging, ui};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of the line-based console
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let frontend = if cli.tui { Frontend::Tui } else { config.ui.frontend };
    log::info!("starting {frontend:?} front end");

    match frontend {
        Frontend::Console => console::run_stdio(&config).context("console session failed"),
        Frontend::Tui => ui::run(&config).context("terminal UI failed"),
    }
}

