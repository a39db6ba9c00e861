//! Verification key routing
//!
//! Keys are assigned per family, never per network. Chains missing from the
//! verification tool's built-in table get an explicit chain entry.

use std::collections::BTreeMap;

use deploy_meta::explorer::{
    CUSTOM_EXPLORER_CHAINS, EXPLORER_FAMILIES, custom_chain, explorer_networks, is_builtin_chain,
};
use deploy_meta::{ExplorerChainEntry, Secret};
use serde_json::{Map, Value, json};

use crate::env::EnvSnapshot;

/// Verification section of the resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerFragment {
    /// Network name to API key; networks whose family key is absent are omitted
    pub api_keys: BTreeMap<String, Secret>,

    /// Descriptors for chains the verification tool does not know
    pub custom_chains: Vec<ExplorerChainEntry>,
}

impl ExplorerFragment {
    /// Render as the `etherscan` section of the toolchain config.
    pub fn to_document(&self) -> Value {
        let api_keys: Map<String, Value> = self
            .api_keys
            .iter()
            .map(|(network, key)| (network.clone(), json!(key.expose())))
            .collect();
        let custom_chains: Vec<Value> = self
            .custom_chains
            .iter()
            .map(ExplorerChainEntry::to_document)
            .collect();

        json!({
            "apiKey": api_keys,
            "customChains": custom_chains,
        })
    }
}

pub struct ExplorerKeyRouter;

impl ExplorerKeyRouter {
    pub fn build(env: &EnvSnapshot) -> ExplorerFragment {
        let mut api_keys = BTreeMap::new();

        for family in EXPLORER_FAMILIES {
            match env.get_non_empty(family.key_var) {
                Some(key) => {
                    tracing::debug!(var = family.key_var, networks = ?family.networks, "Explorer key present");
                    for network in family.networks {
                        api_keys.insert((*network).to_string(), Secret::new(key));
                    }
                }
                None => {
                    tracing::debug!(var = family.key_var, "Explorer key absent");
                }
            }
        }

        for network in explorer_networks() {
            if !is_builtin_chain(network) && custom_chain(network).is_none() {
                tracing::warn!(network, "No chain entry for network; verification will be unroutable");
            }
        }

        let custom_chains = CUSTOM_EXPLORER_CHAINS.iter().map(|c| c.to_entry()).collect();

        ExplorerFragment {
            api_keys,
            custom_chains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_without_env() {
        let fragment = ExplorerKeyRouter::build(&EnvSnapshot::default());
        assert!(fragment.api_keys.is_empty());
        assert_eq!(fragment.custom_chains.len(), CUSTOM_EXPLORER_CHAINS.len());
    }

    #[test]
    fn test_family_key_fans_out() {
        let env = EnvSnapshot::from_pairs([("ETHERSCAN_API_KEY", "eth")]);
        let fragment = ExplorerKeyRouter::build(&env);
        let networks: Vec<&str> = fragment.api_keys.keys().map(String::as_str).collect();
        assert_eq!(networks, vec!["goerli", "mainnet", "rinkeby"]);
    }

    #[test]
    fn test_nova_does_not_share_family_key() {
        let env = EnvSnapshot::from_pairs([("fogISCAN_API_KEY", "fog")]);
        let fragment = ExplorerKeyRouter::build(&env);
        assert_eq!(fragment.api_keys["fogGoerliRollup"].expose(), "fog");
        assert!(!fragment.api_keys.contains_key("nova"));
    }

    #[test]
    fn test_custom_chain_order() {
        let fragment = ExplorerKeyRouter::build(&EnvSnapshot::default());
        let networks: Vec<&str> = fragment
            .custom_chains
            .iter()
            .map(|c| c.network.as_str())
            .collect();
        assert_eq!(networks, vec!["nova", "fogGoerliRollup"]);
    }

    #[test]
    fn test_document_shape() {
        let env = EnvSnapshot::from_pairs([("NOVA_fogISCAN_API_KEY", "n")]);
        let doc = ExplorerKeyRouter::build(&env).to_document();
        assert_eq!(doc["apiKey"]["nova"], "n");
        assert_eq!(doc["customChains"][1]["chainId"], 421613);
    }
}
