mod cli;
mod config;
mod error;
mod logging;
mod model;
mod orchestrator;
mod registry;
mod storage;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_silent = args.silent;
    logging::init(&args)?;

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            if is_silent {
                eprintln!("{}", e);
                std::process::exit(1);
            } else {
                Err(e)
            }
        }
    }
}
