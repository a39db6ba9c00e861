//! Signing credential resolution
//!
//! An absent secret is a normal state (read-only or fork-only use), so
//! resolution never fails. It yields either no credentials or exactly one.

use deploy_meta::{CredentialTier, Secret};

use crate::env::EnvSnapshot;

pub struct CredentialResolver;

impl CredentialResolver {
    /// Credentials held by `var_name`: empty if the variable is absent or empty.
    pub fn resolve_credentials(var_name: &str, env: &EnvSnapshot) -> Vec<Secret> {
        match env.get_non_empty(var_name) {
            Some(value) => {
                tracing::debug!(var = var_name, "Signing key present");
                vec![Secret::new(value)]
            }
            None => {
                tracing::debug!(var = var_name, "Signing key absent");
                Vec::new()
            }
        }
    }

    /// Credentials shared by every network in `tier`.
    pub fn for_tier(tier: CredentialTier, env: &EnvSnapshot) -> Vec<Secret> {
        Self::resolve_credentials(tier.secret_var(), env)
    }
}
