//! Static base fragment
//!
//! The base fragment holds project settings that do not depend on the
//! environment. It is required: a missing file halts resolution.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::{Error, Result};

/// Top-level entries of the base configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseFragment {
    entries: Map<String, Value>,
}

impl BaseFragment {
    /// Load the base fragment from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingBaseFragment`] if the file does not exist
    /// - [`Error::InvalidBaseFragment`] if it is not valid TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::MissingBaseFragment {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(?path, "Loading base fragment");
        Self::parse(&content).map_err(|e| Error::InvalidBaseFragment {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a base fragment from TOML content. An empty document is valid.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let entries = table
            .iter()
            .map(|(k, v)| (k.clone(), toml_to_json_value(v)))
            .collect();
        Ok(Self { entries })
    }

    /// Build a base fragment from already-parsed entries.
    pub fn from_entries(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert a TOML value to JSON.
///
/// Written by hand so datetimes render as their TOML string form. JSON has
/// no non-finite numbers, so `nan` and `inf` floats become `null`.
pub fn toml_to_json_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number((*i).into()),
        toml::Value::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.iter().map(toml_to_json_value).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json_value(v)))
                .collect(),
        ),
    }
}
