//! Deployment configuration CLI
//!
//! Captures the process environment once, resolves the configuration and
//! prints it as JSON on stdout.

mod cli;
mod error;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use deploy_core::{ConfigResolver, EnvSnapshot};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("warning: tracing subscriber already installed");
        }
        tracing::debug!("Verbose mode enabled");
    }

    let env = EnvSnapshot::capture();
    let resolver = ConfigResolver::new(&cli.base);
    let config = resolver.resolve(&env)?;
    let config = if cli.show_secrets {
        config
    } else {
        config.redacted()
    };

    let document = match &cli.network {
        Some(name) => config.network(name)?.to_document(),
        None => config.to_document(),
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;
    Ok(())
}
