//! Verification service key families and chain tables
//!
//! Networks are grouped into families that share one API key variable. The
//! verification tool knows some chains out of the box; every other network
//! needs an [`ExplorerChainEntry`] or its verification requests go nowhere.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Networks sharing one verification API key variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerFamily {
    pub key_var: &'static str,
    pub networks: &'static [&'static str],
}

/// Key families. `nova` has its own key and forms a family of one.
pub const EXPLORER_FAMILIES: &[ExplorerFamily] = &[
    ExplorerFamily {
        key_var: "ETHERSCAN_API_KEY",
        networks: &["mainnet", "goerli", "rinkeby"],
    },
    ExplorerFamily {
        key_var: "fogISCAN_API_KEY",
        networks: &["FOGOne", "FOGTestnet", "fogGoerliRollup"],
    },
    ExplorerFamily {
        key_var: "NOVA_fogISCAN_API_KEY",
        networks: &["nova"],
    },
];

/// A chain the verification tool already knows, keyed by its network name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinChain {
    pub network: &'static str,
    pub chain_id: u64,
}

/// Chains built into the verification tool.
pub const BUILTIN_EXPLORER_CHAINS: &[BuiltinChain] = &[
    BuiltinChain {
        network: "mainnet",
        chain_id: 1,
    },
    BuiltinChain {
        network: "goerli",
        chain_id: 5,
    },
    BuiltinChain {
        network: "rinkeby",
        chain_id: 4,
    },
    BuiltinChain {
        network: "FOGOne",
        chain_id: 42161,
    },
    BuiltinChain {
        network: "FOGTestnet",
        chain_id: 421611,
    },
];

/// Static descriptor for a chain the verification tool must be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomChain {
    pub network: &'static str,
    pub chain_id: u64,
    pub api_url: &'static str,
    pub browser_url: &'static str,
}

impl CustomChain {
    pub fn to_entry(&self) -> ExplorerChainEntry {
        ExplorerChainEntry {
            network: self.network.to_string(),
            chain_id: self.chain_id,
            api_url: self.api_url.to_string(),
            browser_url: self.browser_url.to_string(),
        }
    }
}

pub const CUSTOM_EXPLORER_CHAINS: &[CustomChain] = &[
    CustomChain {
        network: "nova",
        chain_id: 42170,
        api_url: "https://api-nova.fogiscan.io/api",
        browser_url: "https://nova.fogiscan.io/",
    },
    CustomChain {
        network: "fogGoerliRollup",
        chain_id: 421613,
        api_url: "https://api-goerli.fogiscan.io/api",
        browser_url: "https://goerli.fogiscan.io/",
    },
];

/// Whether the verification tool knows `network` without a custom entry.
pub fn is_builtin_chain(network: &str) -> bool {
    BUILTIN_EXPLORER_CHAINS.iter().any(|c| c.network == network)
}

/// Custom descriptor for `network`, if one exists.
pub fn custom_chain(network: &str) -> Option<&'static CustomChain> {
    CUSTOM_EXPLORER_CHAINS.iter().find(|c| c.network == network)
}

/// Every network that receives a verification key, in family order.
pub fn explorer_networks() -> impl Iterator<Item = &'static str> {
    EXPLORER_FAMILIES
        .iter()
        .flat_map(|family| family.networks.iter().copied())
}

/// Chain descriptor handed to the verification tool for an unknown chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerChainEntry {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}

impl ExplorerChainEntry {
    pub fn to_document(&self) -> Value {
        json!({
            "network": self.network,
            "chainId": self.chain_id,
            "urls": {
                "apiURL": self.api_url,
                "browserURL": self.browser_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_families_do_not_overlap() {
        let mut seen = HashSet::new();
        for network in explorer_networks() {
            assert!(seen.insert(network), "{network} appears in two families");
        }
    }

    #[test]
    fn test_nova_has_distinct_key() {
        let nova = EXPLORER_FAMILIES
            .iter()
            .find(|f| f.networks.contains(&"nova"))
            .unwrap();
        assert_eq!(nova.key_var, "NOVA_fogISCAN_API_KEY");
        assert_eq!(nova.networks.len(), 1);
    }

    #[test]
    fn test_custom_chains_are_not_builtin() {
        for chain in CUSTOM_EXPLORER_CHAINS {
            assert!(!is_builtin_chain(chain.network));
        }
    }

    #[test]
    fn test_entry_document() {
        let entry = custom_chain("nova").unwrap().to_entry();
        let doc = entry.to_document();
        assert_eq!(doc["chainId"], 42170);
        assert_eq!(doc["urls"]["apiURL"], "https://api-nova.fogiscan.io/api");
        assert_eq!(doc["urls"]["browserURL"], "https://nova.fogiscan.io/");
    }
}
