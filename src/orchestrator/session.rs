//! Session: the registry plus the glue every front end shares.

use crate::config::Config;
use crate::model::{Action, Outcome};
use crate::registry::NameRegistry;
use crate::storage;

pub(crate) struct Session {
    registry: NameRegistry,
    config: Config,
}

impl Session {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            registry: NameRegistry::new(),
            config,
        }
    }

    pub(crate) fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Apply one action. Failures are reported in the outcome and never
    /// leave the session unusable.
    pub(crate) fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::Add(raw) => match self.registry.add(&raw) {
                Ok(name) => {
                    let name = name.to_string();
                    self.registry.sort();
                    Outcome::Added {
                        name,
                        total: self.registry.len(),
                    }
                }
                Err(error) => Outcome::Failed { path: None, error },
            },
            Action::Load(path) => match storage::load_file(&mut self.registry, &path) {
                Ok(count) => {
                    self.registry.sort();
                    Outcome::Loaded { path, count }
                }
                Err(error) => Outcome::Failed {
                    path: Some(path),
                    error,
                },
            },
            Action::Save(path) => match storage::save_file(&self.registry, &path) {
                Ok(count) => Outcome::Saved { path, count },
                Err(error) => Outcome::Failed {
                    path: Some(path),
                    error,
                },
            },
        };

        if let Outcome::Failed { error, .. } = &outcome {
            tracing::debug!(kind = error.kind(), "{}", outcome.to_message());
        } else {
            tracing::info!("{}", outcome.to_message());
        }
        outcome
    }

    /// Apply actions in order, collecting every outcome.
    pub(crate) fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Outcome> {
        actions.into_iter().map(|a| self.apply(a)).collect()
    }
}
