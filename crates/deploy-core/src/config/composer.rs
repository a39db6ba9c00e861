//! Shallow merge of dynamic fragments onto the base fragment

use std::collections::BTreeMap;

use deploy_meta::{CompilerSet, ExplorerChainEntry, MiscOptions, NetworkEndpoint, Secret};
use serde_json::{Map, Value};

use super::base::BaseFragment;
use crate::explorer::ExplorerFragment;
use crate::{Error, Result};

/// Top-level keys owned by dynamic fragments. A base value under any of
/// these is replaced wholesale.
pub const DYNAMIC_KEYS: &[&str] = &[
    "solidity",
    "networks",
    "etherscan",
    "namedAccounts",
    "mocha",
    "gasReporter",
    "typechain",
];

/// The final configuration handed to the compile, deploy and verify tooling.
///
/// Built once per process from one environment snapshot and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    compiler_set: CompilerSet,
    networks: BTreeMap<String, NetworkEndpoint>,
    explorer_api_keys: BTreeMap<String, Secret>,
    explorer_custom_chains: Vec<ExplorerChainEntry>,
    misc: MiscOptions,

    /// Base entries under keys no dynamic fragment owns
    base_entries: Map<String, Value>,
}

impl ResolvedConfig {
    pub fn compiler_set(&self) -> &CompilerSet {
        &self.compiler_set
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkEndpoint> {
        &self.networks
    }

    /// Look up one network endpoint by name.
    pub fn network(&self, name: &str) -> Result<&NetworkEndpoint> {
        self.networks.get(name).ok_or_else(|| {
            Error::Meta(deploy_meta::Error::UnknownNetwork {
                name: name.to_string(),
            })
        })
    }

    pub fn explorer_api_keys(&self) -> &BTreeMap<String, Secret> {
        &self.explorer_api_keys
    }

    pub fn explorer_custom_chains(&self) -> &[ExplorerChainEntry] {
        &self.explorer_custom_chains
    }

    pub fn misc(&self) -> &MiscOptions {
        &self.misc
    }

    pub fn base_entries(&self) -> &Map<String, Value> {
        &self.base_entries
    }

    /// A copy with every signing key, provider key and explorer key replaced
    /// by a placeholder.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for endpoint in copy.networks.values_mut() {
            *endpoint = endpoint.redacted();
        }
        for key in copy.explorer_api_keys.values_mut() {
            *key = Secret::redacted();
        }
        copy
    }

    /// Render the merged document in the downstream tooling's key layout.
    pub fn to_document(&self) -> Value {
        let mut doc = self.base_entries.clone();

        doc.insert("solidity".into(), self.compiler_set.to_document());

        let networks: Map<String, Value> = self
            .networks
            .iter()
            .map(|(name, endpoint)| (name.clone(), endpoint.to_document()))
            .collect();
        doc.insert("networks".into(), Value::Object(networks));

        let explorer = ExplorerFragment {
            api_keys: self.explorer_api_keys.clone(),
            custom_chains: self.explorer_custom_chains.clone(),
        };
        doc.insert("etherscan".into(), explorer.to_document());

        for (key, value) in self.misc.to_sections() {
            doc.insert(key.into(), value);
        }

        Value::Object(doc)
    }

    /// Pretty-printed JSON of [`ResolvedConfig::to_document`].
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}

/// Merges the dynamic fragments onto the base fragment.
pub struct ConfigComposer;

impl ConfigComposer {
    /// Compose the final configuration.
    ///
    /// Infallible: the only fatal condition, a missing base fragment, is
    /// reported when the fragment is loaded.
    pub fn compose(
        base: &BaseFragment,
        compiler_set: CompilerSet,
        networks: BTreeMap<String, NetworkEndpoint>,
        explorer: ExplorerFragment,
        misc: MiscOptions,
    ) -> ResolvedConfig {
        let mut base_entries = Map::new();
        for (key, value) in base.entries() {
            if DYNAMIC_KEYS.contains(&key.as_str()) {
                tracing::debug!(key = %key, "Base entry replaced by dynamic fragment");
            } else {
                base_entries.insert(key.clone(), value.clone());
            }
        }

        ResolvedConfig {
            compiler_set,
            networks,
            explorer_api_keys: explorer.api_keys,
            explorer_custom_chains: explorer.custom_chains,
            misc,
            base_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_with(entries: Value) -> BaseFragment {
        match entries {
            Value::Object(map) => BaseFragment::from_entries(map),
            _ => panic!("base entries must be an object"),
        }
    }

    fn compose(base: &BaseFragment) -> ResolvedConfig {
        ConfigComposer::compose(
            base,
            CompilerSet::default(),
            BTreeMap::new(),
            ExplorerFragment::default(),
            MiscOptions::default(),
        )
    }

    #[test]
    fn test_base_only_keys_pass_through() {
        let config = compose(&base_with(json!({ "paths": { "sources": "src" } })));
        assert_eq!(config.to_document()["paths"]["sources"], "src");
    }

    #[test]
    fn test_dynamic_key_replaces_base_without_deep_merge() {
        let base = base_with(json!({
            "solidity": { "compilers": [], "settings": { "viaIR": true } },
        }));
        let doc = compose(&base).to_document();

        assert_eq!(doc["solidity"]["compilers"][0]["version"], "0.8.9");
        assert!(doc["solidity"].get("settings").is_none());
    }

    #[test]
    fn test_unknown_network_lookup() {
        let config = compose(&BaseFragment::default());
        assert!(matches!(
            config.network("nowhere"),
            Err(Error::Meta(deploy_meta::Error::UnknownNetwork { .. }))
        ));
    }
}
