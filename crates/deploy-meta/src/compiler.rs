//! Compiler toolchain types
//!
//! A [`CompilerSet`] is the ordered list of compilers the build runs, plus
//! per-file exceptions that pin a single source file to one of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Compiler version every project source is built with.
pub const PINNED_VERSION: &str = "0.8.9";

/// Optimizer runs shared by every compiler entry.
pub const OPTIMIZER_RUNS: u32 = 100;

/// Source file compiled with the extra compiler version, when one is given.
pub const INTERFACE_TESTER_FILE: &str = "src/test-helpers/InterfaceCompatibilityTester.sol";

/// A single compiler version with its optimizer settings.
///
/// Version strings are opaque here. A malformed version is reported by the
/// compiler toolchain when it tries to fetch or run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSpec {
    pub version: String,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u32,
}

impl CompilerSpec {
    /// The pinned project compiler.
    pub fn pinned() -> Self {
        Self::with_version(PINNED_VERSION)
    }

    /// A compiler entry for `version` using the project optimizer settings.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            optimizer_enabled: true,
            optimizer_runs: OPTIMIZER_RUNS,
        }
    }

    /// Render in the shape the compiler toolchain expects.
    pub fn to_document(&self) -> Value {
        json!({
            "version": self.version,
            "settings": {
                "optimizer": {
                    "enabled": self.optimizer_enabled,
                    "runs": self.optimizer_runs,
                },
            },
        })
    }
}

/// Ordered compiler list plus per-file overrides.
///
/// The list is never empty, and every override's version also appears in
/// the list. Only the methods below build one, so it is not `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSet {
    compilers: Vec<CompilerSpec>,
    overrides: BTreeMap<String, CompilerSpec>,
}

impl CompilerSet {
    /// Create a set holding only `primary`.
    pub fn new(primary: CompilerSpec) -> Self {
        Self {
            compilers: vec![primary],
            overrides: BTreeMap::new(),
        }
    }

    /// Append a compiler to the list, even if its version is already listed.
    pub fn push_compiler(&mut self, spec: CompilerSpec) {
        self.compilers.push(spec);
    }

    /// Pin `file` to `spec`.
    ///
    /// If no listed compiler has the same version, `spec` is appended to the
    /// list as well.
    pub fn add_override(&mut self, file: impl Into<String>, spec: CompilerSpec) {
        if !self.compilers.iter().any(|c| c.version == spec.version) {
            self.compilers.push(spec.clone());
        }
        self.overrides.insert(file.into(), spec);
    }

    pub fn compilers(&self) -> &[CompilerSpec] {
        &self.compilers
    }

    pub fn overrides(&self) -> &BTreeMap<String, CompilerSpec> {
        &self.overrides
    }

    /// Compiler pinned for `file`, if any.
    pub fn override_for(&self, file: &str) -> Option<&CompilerSpec> {
        self.overrides.get(file)
    }

    /// Render as the `solidity` section of the toolchain config.
    pub fn to_document(&self) -> Value {
        let compilers: Vec<Value> = self.compilers.iter().map(CompilerSpec::to_document).collect();
        let overrides: serde_json::Map<String, Value> = self
            .overrides
            .iter()
            .map(|(file, spec)| (file.clone(), spec.to_document()))
            .collect();

        json!({
            "compilers": compilers,
            "overrides": overrides,
        })
    }
}

impl Default for CompilerSet {
    fn default() -> Self {
        Self::new(CompilerSpec::pinned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_spec() {
        let spec = CompilerSpec::pinned();
        assert_eq!(spec.version, "0.8.9");
        assert!(spec.optimizer_enabled);
        assert_eq!(spec.optimizer_runs, 100);
    }

    #[test]
    fn test_default_set_has_single_compiler() {
        let set = CompilerSet::default();
        assert_eq!(set.compilers().len(), 1);
        assert!(set.overrides().is_empty());
    }

    #[test]
    fn test_override_adds_missing_version() {
        let mut set = CompilerSet::default();
        set.add_override("a.sol", CompilerSpec::with_version("0.8.20"));

        let versions: Vec<&str> = set.compilers().iter().map(|c| c.version.as_str()).collect();
        assert_eq!(versions, vec!["0.8.9", "0.8.20"]);
        assert_eq!(set.override_for("a.sol").unwrap().version, "0.8.20");
    }

    #[test]
    fn test_override_with_listed_version_does_not_duplicate() {
        let mut set = CompilerSet::default();
        set.push_compiler(CompilerSpec::with_version("0.8.20"));
        set.add_override("a.sol", CompilerSpec::with_version("0.8.20"));
        assert_eq!(set.compilers().len(), 2);
    }

    #[test]
    fn test_document_shape() {
        let mut set = CompilerSet::default();
        set.add_override("a.sol", CompilerSpec::with_version("0.8.20"));

        let doc = set.to_document();
        assert_eq!(doc["compilers"][0]["version"], "0.8.9");
        assert_eq!(doc["compilers"][0]["settings"]["optimizer"]["runs"], 100);
        assert_eq!(doc["compilers"][1]["settings"]["optimizer"]["enabled"], true);
        assert_eq!(doc["overrides"]["a.sol"]["version"], "0.8.20");
    }
}
