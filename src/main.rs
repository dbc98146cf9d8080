use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_n::config::GameConfig;
use connect_n::ui::App;

/// Play Connect N in the terminal.
#[derive(Parser)]
#[command(name = "connect-n", about = "Connect-N game")]
struct Cli {
    /// Width of the board
    #[arg(long)]
    width: Option<usize>,

    /// Height of the board
    #[arg(long)]
    height: Option<usize>,

    /// Number of cells in a row to win
    #[arg(long)]
    n: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(n) = cli.n {
        config.n = n;
    }
    config.validate().context("invalid board settings")?;

    let stdin = io::stdin();
    let mut app = App::new(config, stdin.lock(), io::stdout().lock());
    app.run().context("running game session")
}
