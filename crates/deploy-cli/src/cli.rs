//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use deploy_core::config::DEFAULT_BASE_PATH;

/// Resolve the contract build and deploy configuration from the environment
#[derive(Parser, Debug)]
#[command(name = "deploy-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the static base configuration (TOML)
    #[arg(short, long, env = "DEPLOY_BASE_CONFIG", default_value = DEFAULT_BASE_PATH)]
    pub base: PathBuf,

    /// Print a single network endpoint instead of the whole configuration
    #[arg(short, long)]
    pub network: Option<String>,

    /// Print signing keys and explorer keys instead of placeholders
    #[arg(long)]
    pub show_secrets: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
