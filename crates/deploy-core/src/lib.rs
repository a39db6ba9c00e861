//! Resolution layer for contract deployment configuration
//!
//! This crate turns an environment snapshot and a static base fragment into
//! one immutable [`ResolvedConfig`]:
//!
//! - **Compiler set**: pinned compiler plus an optional extra version with a file override
//! - **Network registry**: RPC endpoints, behavior flags and tiered credentials
//! - **Explorer routing**: verification keys per network and custom chain entries
//! - **Composition**: shallow merge of the dynamic fragments onto the base
//!
//! # Architecture
//!
//! ```text
//!                 deploy-cli
//!                     |
//!                deploy-core
//!                     |
//!                deploy-meta
//! ```
//!
//! # Example
//!
//! ```ignore
//! use deploy_core::{ConfigResolver, EnvSnapshot};
//!
//! let env = EnvSnapshot::capture();
//! let config = ConfigResolver::new("hardhat.base.toml").resolve(&env)?;
//! println!("{} networks", config.networks().len());
//! ```

pub mod compiler;
pub mod config;
pub mod credentials;
pub mod env;
pub mod error;
pub mod explorer;
pub mod networks;
pub mod options;

pub use compiler::CompilerSetResolver;
pub use config::{BaseFragment, ConfigComposer, ConfigResolver, ResolvedConfig, DYNAMIC_KEYS};
pub use credentials::CredentialResolver;
pub use env::EnvSnapshot;
pub use error::{Error, Result};
pub use explorer::{ExplorerFragment, ExplorerKeyRouter};
pub use networks::NetworkRegistry;
pub use options::MiscOptionsResolver;
