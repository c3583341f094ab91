//! gnome-theme-watcher - Report and react to the desktop light/dark preference.

mod commands;
mod output;

use std::future::Future;
use std::path::PathBuf;

use clap::Parser;
use commands::{AppContext, Mode};
use theme_config::{init_logging, Config, Paths};
use tracing::{debug, info};

/// Print `1` for a dark color scheme and `0` for light, or react to changes.
#[derive(Parser, Debug)]
#[command(name = "gnome-theme-watcher")]
#[command(about = "Query or watch the desktop color scheme")]
#[command(version)]
struct Cli {
    /// Print the state on every color-scheme change
    #[arg(long)]
    watch: bool,

    /// Run the scripts directory on every color-scheme change
    #[arg(long)]
    server: bool,

    /// Stop after the first change (with --watch or --server)
    #[arg(long)]
    once: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error). Overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Configuration directory. Defaults to ~/.config/gnome-theme-watcher
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = match cli.config_dir {
        Some(dir) => Paths::with_config_dir(dir),
        None => Paths::new()?,
    };
    let config = Config::load(&paths)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    init_logging(&level, &paths);

    let mode = Mode::from_flags(cli.watch, cli.server);
    debug!(?mode, once = cli.once, "Starting");

    let ctx = AppContext::new(paths, config);
    match mode {
        Mode::Query => commands::query(&ctx, cli.format).await,
        Mode::Watch => until_interrupted(commands::watch(&ctx, cli.format, cli.once)).await,
        Mode::Server => until_interrupted(commands::serve(&ctx, cli.once)).await,
    }
}

/// Run `fut` until it completes or Ctrl-C is received.
///
/// Dropping the future drops the monitor child, which is killed on drop.
async fn until_interrupted<F>(fut: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    tokio::select! {
        result = fut => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    }
}
