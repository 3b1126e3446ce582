//! # Ipsum Store Core
//!
//! Core library for Ipsum Store - a small storefront with client-side routing.
//!
//! This library provides the route table, the router that owns the current
//! path, navigation triggers and the storefront content model. It has no
//! terminal dependencies; the CLI crate renders it.

// Core modules
pub mod config;
pub mod error;
pub mod render;
pub mod router;
pub mod storefront;
pub mod trigger;

// Re-export commonly used types
pub use config::{HistoryConfig, StorefrontConfig};
pub use error::{ConfigError, Error, Result};
pub use router::{Content, Outlet, Route, RoutePath, RouteTable, Router, RouterError};
pub use storefront::{Landing, Storefront};
pub use trigger::{NavigationRequest, NavigationTrigger, Navigator, TriggerVariant};

/// Current version of the ipsum-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing, honouring `RUST_LOG` when it is set
///
/// Logs go to stderr so they never mix with rendered output.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
