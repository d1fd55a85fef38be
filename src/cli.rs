use crate::config::Config;
use crate::model::{Action, Outcome, Snapshot, SnapshotMessage};
use crate::orchestrator::Session;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "name-sorter",
    version,
    about = "Collect, sort and save lists of names with optional TUI"
)]
pub struct Cli {
    /// Load names from a text file, replacing any current names
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Add a name (repeatable); applied after --load
    #[arg(long = "add", value_name = "NAME")]
    pub add: Vec<String>,

    /// Save the sorted names; without a value the configured default path is used
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Print JSON result and exit (no TUI)
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Print sorted names and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Run silently: suppress all output except errors
    #[arg(long)]
    pub silent: bool,

    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// True when output goes straight to stdout/stderr rather than the TUI.
    pub fn is_batch(&self) -> bool {
        self.silent || self.json || self.text || cfg!(not(feature = "tui"))
    }
}

/// Actions requested on the command line, in application order.
pub fn build_actions(args: &Cli, config: &Config) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(path) = args.load.clone() {
        actions.push(Action::Load(path));
    }
    actions.extend(args.add.iter().cloned().map(Action::Add));
    if let Some(save) = args.save.as_ref() {
        let path = save.clone().unwrap_or_else(|| config.default_save_path());
        actions.push(Action::Save(path));
    }
    actions
}

pub fn run(args: Cli) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let actions = build_actions(&args, &config);
    let mut session = Session::new(config);

    if !args.is_batch() {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(&mut session, actions);
        }
    }

    let outcomes = session.apply_all(actions);
    if args.silent {
        report_failures(&outcomes);
    } else if args.json {
        run_json(&session, &outcomes)?;
    } else {
        run_text(&session, &outcomes)?;
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        return Err(anyhow::anyhow!("{failed} operation(s) failed"));
    }
    Ok(())
}

fn report_failures(outcomes: &[Outcome]) {
    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    for outcome in outcomes.iter().filter(|o| o.is_failure()) {
        let _ = writeln!(err, "{}", outcome.to_message());
    }
}

fn run_json(session: &Session, outcomes: &[Outcome]) -> Result<()> {
    let registry = session.registry();
    let snapshot = Snapshot {
        count: registry.len(),
        names: registry.names().to_vec(),
        messages: outcomes.iter().map(SnapshotMessage::from).collect(),
    };
    let out = serde_json::to_string_pretty(&snapshot)?;
    let stdout = std::io::stdout();
    writeln!(stdout.lock(), "{}", out).context("write JSON to stdout")?;
    Ok(())
}

fn run_text(session: &Session, outcomes: &[Outcome]) -> Result<()> {
    {
        let stderr = std::io::stderr();
        let mut err = stderr.lock();
        for outcome in outcomes {
            let _ = writeln!(err, "{}", outcome.to_message());
        }
    }

    let summary = crate::text_summary::build_text_summary(session.registry());
    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    for line in summary.lines {
        writeln!(out, "{}", line).context("write names to stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("name-sorter").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn actions_follow_load_add_save_order() {
        let args = parse(&[
            "--save", "out.txt", "--add", "bob", "--load", "in.txt", "--add", "amy",
        ]);
        let actions = build_actions(&args, &Config::default());
        assert_eq!(
            actions,
            vec![
                Action::Load("in.txt".into()),
                Action::Add("bob".into()),
                Action::Add("amy".into()),
                Action::Save("out.txt".into()),
            ]
        );
    }

    #[test]
    fn bare_save_uses_configured_default_path() {
        let args = parse(&["--add", "amy", "--save"]);
        let config = Config {
            save_dir: Some("/tmp/lists".into()),
            ..Config::default()
        };
        let actions = build_actions(&args, &config);
        assert_eq!(
            actions.last(),
            Some(&Action::Save(
                std::path::Path::new("/tmp/lists").join("sorted_names.txt")
            ))
        );
    }

    #[test]
    fn json_and_text_conflict_at_parse_time() {
        let err = Cli::try_parse_from(["name-sorter", "--json", "--text"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn no_save_flag_means_no_save_action() {
        let args = parse(&["--text", "--add", "amy"]);
        assert!(args.is_batch());
        assert_eq!(build_actions(&args, &Config::default()).len(), 1);
    }
}
