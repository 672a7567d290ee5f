//! `portfolio-terminal`: interactive portfolio shell for the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use terminal_cli::{CliConfig, ConfigLoader, FileConfig, DEFAULT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

/// Portfolio terminal command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "portfolio-terminal", version, about = "Interactive portfolio terminal", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults to `portfolio-terminal.toml` when it exists.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip remote repository lookups.
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Run this command and exit instead of reading stdin. Repeatable.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<CliConfig> {
    let file = match &cli.config {
        Some(path) => ConfigLoader::<FileConfig>::new(path).load()?,
        None => ConfigLoader::<FileConfig>::new(DEFAULT_CONFIG_FILE)
            .load_optional()?
            .unwrap_or_default(),
    };
    let mut config = CliConfig::resolve(file, |key| std::env::var(key).ok())?;
    if cli.offline {
        config.github_username.clear();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = load_config(&cli).context("load configuration")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, terminal_cli::run(config, cli.commands))
}
