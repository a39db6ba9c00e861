//! Opaque secret values
//!
//! Private keys and explorer API keys are carried as [`Secret`] so they never
//! show up in `Debug` output or log lines. Serialization emits the raw value,
//! since downstream tooling needs it; use [`Secret::redacted`] to build a
//! placeholder for display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder written in place of a secret value.
pub const REDACTED: &str = "<redacted>";

/// A secret read from the environment.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A secret holding the [`REDACTED`] placeholder.
    pub fn redacted() -> Self {
        Self(REDACTED.to_string())
    }

    /// Borrow the raw secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_value() {
        let secret = Secret::new("0xabc");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("0xabc"));
        assert!(debug.contains(REDACTED));
    }

    #[test]
    fn serializes_raw_value() {
        let secret = Secret::new("0xabc");
        assert_eq!(serde_json::to_value(&secret).unwrap(), "0xabc");
    }

    #[test]
    fn redacted_exposes_placeholder() {
        assert_eq!(Secret::redacted().expose(), REDACTED);
    }
}
