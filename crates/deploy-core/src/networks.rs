//! Network registry
//!
//! Builds one [`NetworkEndpoint`] per entry in the known network table.

use std::collections::{BTreeMap, BTreeSet};

use deploy_meta::network::{
    FORK_FLAG_ENABLED_VALUE, FORK_FLAG_VAR, FORK_SOURCE, KNOWN_NETWORKS, PROVIDER_KEY_VAR,
    provider_url,
};
use deploy_meta::{
    BehaviorFlag, ForkSettings, KnownNetwork, LocalChainSettings, NetworkEndpoint, RpcSource,
};

use crate::credentials::CredentialResolver;
use crate::env::EnvSnapshot;

pub struct NetworkRegistry;

impl NetworkRegistry {
    /// Build the endpoint table for `env`, keyed by network name.
    pub fn build(env: &EnvSnapshot) -> BTreeMap<String, NetworkEndpoint> {
        // An absent provider key still yields a URL; it only fails when used.
        let provider_key = env.get(PROVIDER_KEY_VAR).unwrap_or_default();
        if provider_key.is_empty() {
            tracing::debug!(var = PROVIDER_KEY_VAR, "Provider key absent");
        }

        KNOWN_NETWORKS
            .iter()
            .map(|known| {
                let endpoint = Self::endpoint(known, provider_key, env);
                (endpoint.name.clone(), endpoint)
            })
            .collect()
    }

    fn endpoint(known: &KnownNetwork, provider_key: &str, env: &EnvSnapshot) -> NetworkEndpoint {
        let rpc_url = match known.rpc {
            RpcSource::InProcess => None,
            RpcSource::Fixed(url) => Some(url.to_string()),
            RpcSource::Provider(subdomain) => Some(provider_url(subdomain, provider_key)),
        };

        let credentials = known
            .tier
            .map(|tier| CredentialResolver::for_tier(tier, env))
            .unwrap_or_default();

        let mut flags = BTreeSet::new();
        let local = if known.is_local() {
            let fork = Self::fork_settings(provider_key, env);
            flags.insert(BehaviorFlag::StrictTxFailures);
            flags.insert(BehaviorFlag::UnlimitedContractSize);
            if fork.enabled {
                flags.insert(BehaviorFlag::ForkEnabled);
            }
            Some(LocalChainSettings::new(fork))
        } else {
            None
        };

        NetworkEndpoint {
            name: known.name.to_string(),
            rpc_url,
            chain_id: known.chain_id,
            tier: known.tier,
            credentials,
            flags,
            local,
        }
    }

    /// Fork mode is on only when the flag is exactly the enabling literal.
    fn fork_settings(provider_key: &str, env: &EnvSnapshot) -> ForkSettings {
        let enabled = env.equals(FORK_FLAG_VAR, FORK_FLAG_ENABLED_VALUE);
        tracing::debug!(enabled, "Resolved local fork mode");

        ForkSettings {
            url: provider_url(FORK_SOURCE, provider_key),
            enabled,
        }
    }
}
