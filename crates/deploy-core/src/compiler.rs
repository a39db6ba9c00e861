//! Compiler set resolution

use deploy_meta::compiler::INTERFACE_TESTER_FILE;
use deploy_meta::{CompilerSet, CompilerSpec};

use crate::env::EnvSnapshot;

/// Environment variable naming an extra compiler version.
pub const EXTRA_COMPILER_VAR: &str = "INTERFACE_TESTER_SOLC_VERSION";

/// Builds the compiler list and per-file overrides.
pub struct CompilerSetResolver;

impl CompilerSetResolver {
    /// Resolve the compiler set for `env`.
    ///
    /// The pinned compiler is always first. When [`EXTRA_COMPILER_VAR`] is set,
    /// a second compiler with that version is appended and the interface
    /// tester file is pinned to it. The version is passed through unchecked.
    pub fn resolve(env: &EnvSnapshot) -> CompilerSet {
        let mut set = CompilerSet::new(CompilerSpec::pinned());

        match env.get_non_empty(EXTRA_COMPILER_VAR) {
            Some(version) => {
                tracing::debug!(version, "Adding extra compiler for interface tester");
                let extra = CompilerSpec::with_version(version);
                set.push_compiler(extra.clone());
                set.add_override(INTERFACE_TESTER_FILE, extra);
            }
            None => {
                tracing::debug!(var = EXTRA_COMPILER_VAR, "No extra compiler requested");
            }
        }

        set
    }
}
