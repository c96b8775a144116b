mod command;
mod logging;
mod shell;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use memo_pad_config::AppConfig;
use tracing_subscriber::util::SubscriberInitExt;

use crate::shell::Shell;

/// A line-oriented text editing shell with snapshot-based undo/redo.
#[derive(Parser, Debug)]
#[command(name = "memo-pad", version, about)]
struct Cli {
    /// Script of commands to run instead of reading stdin.
    script: Option<PathBuf>,

    /// Configuration file (defaults to memo-pad.json next to the executable).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial document text.
    #[arg(long, default_value = "")]
    text: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Installed before the config is read; the configured level applies after.
    // Stderr keeps command output on stdout clean.
    let (filter, from_env) = logging::startup_filter();
    let (subscriber, filter_handle) = logging::subscriber(filter, io::stderr);
    subscriber.init();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path);
    if !from_env {
        logging::apply_level(&filter_handle, &config.log_level)?;
    }

    tracing::info!(
        "Starting memo-pad (config: {}, max history depth: {})",
        config_path.display(),
        config.max_history_depth
    );

    let mut shell = Shell::new(&cli.text, config);
    let mut stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            shell.run(BufReader::new(file), &mut stdout, false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), &mut stdout, interactive)?;
        }
    }

    tracing::info!(
        "Exiting with {} snapshot(s) in history",
        shell.session().history().len()
    );
    Ok(())
}
