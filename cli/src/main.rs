//! # ipsum CLI
//!
//! Command-line interface for Ipsum Store - a storefront you browse in the terminal.
//!
//! ## Usage
//!
//! - `ipsum` - Open the interactive storefront
//! - `ipsum --route men` - Open the storefront at a specific path
//! - `ipsum routes` - Show the route table
//! - `ipsum resolve <path>` - Print the screen a path renders
//!
//! The interactive storefront is a terminal UI powered by iocraft.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{interactive_command, resolve_command, routes_command};
use config::CliConfigLoader;

/// ipsum - Modern clothing for today's people, in your terminal
#[derive(Parser)]
#[command(name = "ipsum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the Ipsum Store storefront in your terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true, env = "IPSUM_CONFIG")]
    config: Option<PathBuf>,

    /// Path to open on startup (e.g. "women", "/men")
    #[arg(short, long)]
    route: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes,

    /// Print the screen a path renders
    Resolve {
        /// Path to resolve; bare segments are prefixed with "/"
        path: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(route) = &cli.route {
        loader = loader.with_route_override(route.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ipsum_core::init_tracing(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes) => routes_command(config_loader).await,
        Some(Commands::Resolve { path }) => resolve_command(config_loader, path).await,
        None => interactive_command(config_loader).await,
    }
}
