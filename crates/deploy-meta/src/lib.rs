//! Data model and static tables for contract deployment configuration.
//!
//! This crate owns everything about the deployment configuration that is
//! known before the process environment is read:
//!
//! - **Compiler**: the pinned compiler and the per-file override target
//! - **Networks**: the known network table, credential tiers and behavior flags
//! - **Explorer**: verification key families and chain descriptors
//! - **Options**: tooling options that ride along with the resolved config
//!
//! Resolution against an environment snapshot lives in `deploy-core`.

pub mod compiler;
pub mod error;
pub mod explorer;
pub mod network;
pub mod options;
pub mod secret;

pub use compiler::{CompilerSet, CompilerSpec};
pub use error::{Error, Result};
pub use explorer::{ExplorerChainEntry, ExplorerFamily};
pub use network::{
    BehaviorFlag, CredentialTier, ForkSettings, KnownNetwork, LocalChainSettings, NetworkEndpoint,
    RpcSource,
};
pub use options::MiscOptions;
pub use secret::Secret;
