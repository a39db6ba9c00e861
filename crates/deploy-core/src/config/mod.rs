//! Base fragment loading and configuration composition
//!
//! The static base fragment is a TOML document on disk. The dynamic fragments
//! (compiler set, networks, explorer routing, misc options) are computed from
//! an environment snapshot and merged on top of it.
//!
//! # Merge rule
//!
//! Merging is shallow. Each dynamic fragment owns one or more top-level keys
//! (see [`DYNAMIC_KEYS`]) and fully replaces any base value under them. Base
//! keys no fragment owns pass through untouched.
//!
//! # Example
//!
//! ```ignore
//! use deploy_core::{ConfigResolver, EnvSnapshot};
//!
//! let env = EnvSnapshot::from_pairs([("SHOULD_FORK", "1")]);
//! let config = ConfigResolver::new("hardhat.base.toml").resolve(&env)?;
//! let document = config.to_document();
//! ```

mod base;
mod composer;
mod resolver;

pub use base::{BaseFragment, toml_to_json_value};
pub use composer::{ConfigComposer, DYNAMIC_KEYS, ResolvedConfig};
pub use resolver::{ConfigResolver, DEFAULT_BASE_PATH};
