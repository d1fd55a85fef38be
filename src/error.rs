use thiserror::Error;

/// Failures surfaced by the name registry and its file I/O.
///
/// None of these are fatal: the registry stays usable after any of them and
/// presentation layers decide how to render the message.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Please enter a valid name (non-empty)")]
    EmptyName,
    #[error("No valid names found in the file!")]
    NoValidNames,
    #[error("No names to save!")]
    NothingToSave,
    #[error("Error reading file: {source}")]
    ReadError {
        #[source]
        source: std::io::Error,
    },
    #[error("Error saving file: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Short machine-friendly name of the error kind, used in JSON output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::EmptyName => "EmptyName",
            RegistryError::NoValidNames => "NoValidNames",
            RegistryError::NothingToSave => "NothingToSave",
            RegistryError::ReadError { .. } => "ReadError",
            RegistryError::WriteError { .. } => "WriteError",
        }
    }
}
