//! Immutable snapshot of the process environment
//!
//! The environment is read once, at startup, into an [`EnvSnapshot`]. Every
//! resolver takes the snapshot by reference, so resolution is a pure function
//! of it.

use std::collections::BTreeMap;
use std::fmt;

/// Read-only copy of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let snapshot: Self = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        tracing::debug!(count = snapshot.len(), "Captured environment snapshot");
        snapshot
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    /// Raw value of `name`, which may be empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of `name` if it is set to a non-empty string.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Whether `name` is set to a non-empty string.
    pub fn is_set(&self, name: &str) -> bool {
        self.get_non_empty(name).is_some()
    }

    /// Whether `name` is set to exactly `literal`.
    pub fn equals(&self, name: &str, literal: &str) -> bool {
        self.get(name) == Some(literal)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

// Values may be secrets, so only names are printed.
impl fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("vars", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}
