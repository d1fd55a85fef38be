//! Plain-text import/export for the name registry.

use crate::error::RegistryError;
use crate::registry::NameRegistry;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Suggested file name when saving.
pub const DEFAULT_FILE_NAME: &str = "sorted_names.txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Load names from `path`, replacing the registry contents.
///
/// The registry is cleared even when the file cannot be opened.
pub fn load_file(registry: &mut NameRegistry, path: &Path) -> Result<usize, RegistryError> {
    let result = match File::open(path) {
        Ok(file) => registry.load_from(split_lines(BufReader::new(file))),
        Err(e) => registry.load_from(std::iter::once(Err::<String, _>(e))),
    };
    match &result {
        Ok(count) => tracing::debug!(path = %path.display(), count, "names loaded"),
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "load failed"),
    }
    result
}

/// Write every name followed by the platform line terminator.
pub fn save_file(registry: &NameRegistry, path: &Path) -> Result<usize, RegistryError> {
    if registry.is_empty() {
        return Err(RegistryError::NothingToSave);
    }
    write_lines(registry, path).map_err(|source| RegistryError::WriteError { source })?;
    tracing::debug!(path = %path.display(), count = registry.len(), "names saved");
    Ok(registry.len())
}

fn write_lines(registry: &NameRegistry, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for name in registry.serialize() {
        out.write_all(name.as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
    }
    out.flush()
}

/// Lines terminated by `\n`, `\r\n` or a lone `\r`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the load; only real I/O errors are yielded as `Err`.
fn split_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<String>> {
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                done = true;
                None
            }
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => {
                done = true;
                Some(Err(e))
            }
        }
    })
    .flat_map(|line| -> Vec<io::Result<String>> {
        match line {
            Ok(line) if line.contains('\r') => line.split('\r').map(|s| Ok(s.to_string())).collect(),
            other => vec![other],
        }
    })
}
