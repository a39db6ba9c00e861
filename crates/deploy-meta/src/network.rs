//! Network endpoints and the known network table
//!
//! Networks draw signing credentials by tier rather than one secret per
//! network: every production network reads [`CredentialTier::Production`]'s
//! variable, every development network reads the development one.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::{Error, Result};
use crate::secret::{REDACTED, Secret};

/// Name of the in-process local network.
pub const LOCAL_NETWORK: &str = "hardhat";

/// Chain id of the in-process local network.
pub const LOCAL_CHAIN_ID: u64 = 1338;

/// Wei balance of each generated local account. Exceeds `u64`.
pub const LOCAL_ACCOUNTS_BALANCE: &str = "1000000000000000000000000000";

/// Block gas limit of the local network.
pub const LOCAL_BLOCK_GAS_LIMIT: u64 = 200_000_000;

/// Environment variable holding the RPC provider API key.
pub const PROVIDER_KEY_VAR: &str = "INFURA_KEY";

/// Environment variable that gates local fork mode.
pub const FORK_FLAG_VAR: &str = "SHOULD_FORK";

/// The only value of [`FORK_FLAG_VAR`] that enables fork mode.
pub const FORK_FLAG_ENABLED_VALUE: &str = "1";

/// Provider subdomain the local network forks from.
pub const FORK_SOURCE: &str = "mainnet";

/// Build a provider RPC URL for `subdomain` with the given API key.
pub fn provider_url(subdomain: &str, api_key: &str) -> String {
    format!("https://{subdomain}.infura.io/v3/{api_key}")
}

/// Replace the API key in a provider URL. A URL built without a key is kept.
fn redact_provider_url(subdomain: &str, url: &str) -> String {
    if url == provider_url(subdomain, "") {
        url.to_string()
    } else {
        provider_url(subdomain, REDACTED)
    }
}

/// Trust level shared by a group of networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialTier {
    Production,
    Development,
}

impl CredentialTier {
    /// Environment variable holding this tier's signing key.
    pub const fn secret_var(self) -> &'static str {
        match self {
            CredentialTier::Production => "MAINNET_PRIVKEY",
            CredentialTier::Development => "DEVNET_PRIVKEY",
        }
    }
}

impl fmt::Display for CredentialTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialTier::Production => write!(f, "production"),
            CredentialTier::Development => write!(f, "development"),
        }
    }
}

/// Safety and behavior toggles. Only the local network carries any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorFlag {
    /// Failed transactions raise instead of returning a failed receipt
    StrictTxFailures,
    /// Contract size limit is lifted
    UnlimitedContractSize,
    /// The local chain forks from a live network
    ForkEnabled,
}

/// Where a network's RPC URL comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcSource {
    /// Runs inside the toolchain process; there is no URL.
    InProcess,
    /// A fixed URL.
    Fixed(&'static str),
    /// The provider URL template for this subdomain.
    Provider(&'static str),
}

/// Static description of a network the project deploys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownNetwork {
    pub name: &'static str,
    pub rpc: RpcSource,
    pub tier: Option<CredentialTier>,
    pub chain_id: Option<u64>,
}

impl KnownNetwork {
    const fn new(
        name: &'static str,
        rpc: RpcSource,
        tier: Option<CredentialTier>,
        chain_id: Option<u64>,
    ) -> Self {
        Self {
            name,
            rpc,
            tier,
            chain_id,
        }
    }

    pub fn is_local(&self) -> bool {
        self.name == LOCAL_NETWORK
    }
}

/// Every network the project knows about.
pub const KNOWN_NETWORKS: &[KnownNetwork] = &[
    KnownNetwork::new(LOCAL_NETWORK, RpcSource::InProcess, None, Some(LOCAL_CHAIN_ID)),
    KnownNetwork::new(
        "mainnet",
        RpcSource::Provider("mainnet"),
        Some(CredentialTier::Production),
        None,
    ),
    KnownNetwork::new(
        "goerli",
        RpcSource::Provider("goerli"),
        Some(CredentialTier::Development),
        None,
    ),
    KnownNetwork::new(
        "rinkeby",
        RpcSource::Provider("rinkeby"),
        Some(CredentialTier::Development),
        None,
    ),
    KnownNetwork::new(
        "fogRinkeby",
        RpcSource::Fixed("https://rinkeby.FOGR.io/rpc"),
        Some(CredentialTier::Development),
        None,
    ),
    KnownNetwork::new(
        "fogGoerliRollup",
        RpcSource::Fixed("https://goerli-rollup.FOGR.io/rpc"),
        Some(CredentialTier::Development),
        None,
    ),
    KnownNetwork::new(
        "fog1",
        RpcSource::Fixed("https://fog1.FOGR.io/rpc"),
        Some(CredentialTier::Production),
        None,
    ),
    KnownNetwork::new(
        "nova",
        RpcSource::Fixed("https://nova.FOGR.io/rpc"),
        Some(CredentialTier::Production),
        None,
    ),
    KnownNetwork::new("geth", RpcSource::Fixed("http://localhost:8545"), None, None),
];

/// Look up a known network by name.
pub fn known_network(name: &str) -> Result<&'static KnownNetwork> {
    KNOWN_NETWORKS
        .iter()
        .find(|n| n.name == name)
        .ok_or_else(|| Error::UnknownNetwork {
            name: name.to_string(),
        })
}

/// Known networks belonging to `tier`.
pub fn networks_in_tier(tier: CredentialTier) -> impl Iterator<Item = &'static KnownNetwork> {
    KNOWN_NETWORKS.iter().filter(move |n| n.tier == Some(tier))
}

/// Fork configuration of the local network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSettings {
    pub url: String,
    pub enabled: bool,
}

/// Settings only the in-process local network has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalChainSettings {
    pub accounts_balance: String,
    pub block_gas_limit: u64,
    pub fork: ForkSettings,
}

impl LocalChainSettings {
    pub fn new(fork: ForkSettings) -> Self {
        Self {
            accounts_balance: LOCAL_ACCOUNTS_BALANCE.to_string(),
            block_gas_limit: LOCAL_BLOCK_GAS_LIMIT,
            fork,
        }
    }
}

/// A fully resolved network entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    pub name: String,

    /// `None` for the in-process local network
    pub rpc_url: Option<String>,

    pub chain_id: Option<u64>,

    /// Tier the credentials were drawn from; `None` for networks that never sign
    pub tier: Option<CredentialTier>,

    /// Zero or one signing key
    pub credentials: Vec<Secret>,

    pub flags: BTreeSet<BehaviorFlag>,

    pub local: Option<LocalChainSettings>,
}

impl NetworkEndpoint {
    pub fn has_flag(&self, flag: BehaviorFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn fork_enabled(&self) -> bool {
        self.has_flag(BehaviorFlag::ForkEnabled)
    }

    /// A copy with signing keys and the provider key inside URLs replaced by
    /// the [`REDACTED`] placeholder.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for credential in &mut copy.credentials {
            *credential = Secret::redacted();
        }

        if let Ok(KnownNetwork {
            rpc: RpcSource::Provider(subdomain),
            ..
        }) = known_network(&self.name)
        {
            if let Some(url) = &mut copy.rpc_url {
                *url = redact_provider_url(subdomain, url);
            }
        }
        if let Some(local) = &mut copy.local {
            local.fork.url = redact_provider_url(FORK_SOURCE, &local.fork.url);
        }

        copy
    }

    /// Render in the shape the deploy toolchain expects under `networks.<name>`.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();

        if let Some(url) = &self.rpc_url {
            doc.insert("url".into(), json!(url));
        }
        if let Some(chain_id) = self.chain_id {
            doc.insert("chainId".into(), json!(chain_id));
        }
        if self.has_flag(BehaviorFlag::StrictTxFailures) {
            doc.insert("throwOnTransactionFailures".into(), json!(true));
        }
        if self.has_flag(BehaviorFlag::UnlimitedContractSize) {
            doc.insert("allowUnlimitedContractSize".into(), json!(true));
        }

        match &self.local {
            Some(local) => {
                doc.insert(
                    "accounts".into(),
                    json!({ "accountsBalance": local.accounts_balance }),
                );
                doc.insert("blockGasLimit".into(), json!(local.block_gas_limit));
                doc.insert(
                    "forking".into(),
                    json!({ "url": local.fork.url, "enabled": local.fork.enabled }),
                );
            }
            None if self.tier.is_some() => {
                let accounts: Vec<&str> = self.credentials.iter().map(Secret::expose).collect();
                doc.insert("accounts".into(), json!(accounts));
            }
            None => {}
        }

        Value::Object(doc)
    }
}
