//! tracing subscriber setup.

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::Level;

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// Batch modes log to stderr, with ANSI colours only on a terminal. Action
/// failures are printed by the front end and only logged at debug level. The
/// TUI owns the terminal, so it only logs when `--log-file` is given.
pub fn init(args: &Cli) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level_for(args.verbose))
        .with_target(false);

    if let Some(path) = args.log_file.as_deref() {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    } else if args.is_batch() {
        builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    }
    Ok(())
}
