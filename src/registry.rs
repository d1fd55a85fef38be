//! In-memory name registry.
//!
//! Holds the ordered list of names and the sort / import / export operations.
//! Nothing here knows about files or terminals; front ends drive it through
//! [`crate::orchestrator::Session`].

use crate::error::RegistryError;
use std::cmp::Ordering;

#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    names: Vec<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Trim `raw` and append it. Does not sort.
    pub fn add(&mut self, raw: &str) -> Result<&str, RegistryError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        self.names.push(name.to_string());
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    /// Replace the contents with the non-blank, trimmed lines of `lines`.
    ///
    /// The registry is cleared before the first line is read and is left empty
    /// when the source fails part way through or yields no usable names.
    pub fn load_from<I, S>(&mut self, lines: I) -> Result<usize, RegistryError>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        self.names.clear();
        for line in lines {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    self.names.clear();
                    return Err(RegistryError::ReadError { source });
                }
            };
            let trimmed = line.as_ref().trim();
            if !trimmed.is_empty() {
                self.names.push(trimmed.to_string());
            }
        }
        if self.names.is_empty() {
            return Err(RegistryError::NoValidNames);
        }
        Ok(self.names.len())
    }

    /// Stable sort by lowercase first character, then case-insensitively.
    pub fn sort(&mut self) {
        self.names.sort_by(|a, b| compare_names(a, b));
    }

    /// Names in current order, one item per output line.
    pub fn serialize(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

/// Lowercased first character; `'\0'` sorts an empty string before everything else.
fn group_key(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .unwrap_or('\0')
}

/// Per-character case fold: uppercase, then lowercase, one char to one char.
/// Multi-char uppercase expansions (`ß` -> `SS`) leave the char unchanged and
/// a multi-char lowercase expansion (`İ`) keeps its first char.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

/// Case-insensitive comparison of folded chars in scalar-value order.
/// Outside the Basic Multilingual Plane this can order differently from a
/// UTF-16 code-unit comparison.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

/// Two-level comparator used by [`NameRegistry::sort`].
pub fn compare_names(a: &str, b: &str) -> Ordering {
    group_key(a)
        .cmp(&group_key(b))
        .then_with(|| compare_ignore_case(a, b))
}
