use crate::error::RegistryError;
use serde::Serialize;
use std::path::PathBuf;

/// Operations a front end can request from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Load(PathBuf),
    Save(PathBuf),
}

/// Result of applying an [`Action`], consumed by UI/CLI layers.
#[derive(Debug)]
pub enum Outcome {
    Added { name: String, total: usize },
    Loaded { path: PathBuf, count: usize },
    Saved { path: PathBuf, count: usize },
    Failed {
        path: Option<PathBuf>,
        error: RegistryError,
    },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Render a human-readable message for UI/CLI layers.
    pub fn to_message(&self) -> String {
        match self {
            Outcome::Added { name, total } => format!("Added {name} ({total} total)"),
            Outcome::Loaded { path, count } => {
                format!("Loaded {} name(s) from {}", count, path.display())
            }
            Outcome::Saved { path, count } => {
                format!("File saved successfully! ({} name(s) to {})", count, path.display())
            }
            Outcome::Failed {
                path: Some(path),
                error: error @ (RegistryError::ReadError { .. } | RegistryError::WriteError { .. }),
            } => format!("{error} ({})", path.display()),
            Outcome::Failed { error, .. } => error.to_string(),
        }
    }
}

/// JSON document printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub count: usize,
    pub names: Vec<String>,
    pub messages: Vec<SnapshotMessage>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotMessage {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String,
}

impl From<&Outcome> for SnapshotMessage {
    fn from(outcome: &Outcome) -> Self {
        let error = match outcome {
            Outcome::Failed { error, .. } => Some(error.kind()),
            _ => None,
        };
        Self {
            ok: error.is_none(),
            error,
            message: outcome.to_message(),
        }
    }
}
