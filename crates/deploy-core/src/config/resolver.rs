//! End-to-end configuration resolution
//!
//! The `ConfigResolver` loads the base fragment, runs every resolver against
//! the environment snapshot and composes the result.

use std::path::{Path, PathBuf};

use super::base::BaseFragment;
use super::composer::{ConfigComposer, ResolvedConfig};
use crate::compiler::CompilerSetResolver;
use crate::env::EnvSnapshot;
use crate::explorer::ExplorerKeyRouter;
use crate::networks::NetworkRegistry;
use crate::options::MiscOptionsResolver;
use crate::Result;

/// Base fragment path used when none is given.
pub const DEFAULT_BASE_PATH: &str = "hardhat.base.toml";

/// Resolves the configuration for one base fragment file.
pub struct ConfigResolver {
    base_path: PathBuf,
}

impl ConfigResolver {
    /// Create a resolver reading the base fragment from `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Whether the base fragment file exists.
    pub fn has_base(&self) -> bool {
        self.base_path.is_file()
    }

    /// Load the base fragment and resolve against `env`.
    ///
    /// # Errors
    ///
    /// Fails only when the base fragment is missing or unreadable. Every
    /// absent environment variable resolves to an empty or default value.
    pub fn resolve(&self, env: &EnvSnapshot) -> Result<ResolvedConfig> {
        let base = BaseFragment::load(&self.base_path)?;
        Ok(Self::resolve_with_base(&base, env))
    }

    /// Resolve against an already-loaded base fragment.
    ///
    /// A pure function of its inputs: the same base and snapshot always
    /// yield equal configurations.
    pub fn resolve_with_base(base: &BaseFragment, env: &EnvSnapshot) -> ResolvedConfig {
        let compiler_set = CompilerSetResolver::resolve(env);
        let networks = NetworkRegistry::build(env);
        let explorer = ExplorerKeyRouter::build(env);
        let misc = MiscOptionsResolver::resolve(env);

        let config = ConfigComposer::compose(base, compiler_set, networks, explorer, misc);
        tracing::info!(
            compilers = config.compiler_set().compilers().len(),
            networks = config.networks().len(),
            explorer_keys = config.explorer_api_keys().len(),
            "Resolved deployment configuration"
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_fails_without_base_fragment() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(temp_dir.path().join(DEFAULT_BASE_PATH));

        assert!(!resolver.has_base());
        assert!(matches!(
            resolver.resolve(&EnvSnapshot::default()),
            Err(crate::Error::MissingBaseFragment { .. })
        ));
    }

    #[test]
    fn resolve_loads_base_fragment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_BASE_PATH);
        std::fs::write(&path, "defaultNetwork = \"geth\"\n").unwrap();

        let resolver = ConfigResolver::new(&path);
        assert!(resolver.has_base());

        let config = resolver.resolve(&EnvSnapshot::default()).unwrap();
        assert_eq!(config.base_entries()["defaultNetwork"], "geth");
        assert_eq!(config.compiler_set().compilers().len(), 1);
    }
}
