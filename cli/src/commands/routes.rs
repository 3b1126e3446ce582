//! Route table listing command

use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use ipsum_core::{Content, Storefront};
use tracing::info;

/// Print every route in declaration order
pub async fn routes_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Listing routes");

    let config = config_loader.load().await?;
    let storefront = Storefront::from_config(&config)?;

    println!("{}", storefront.name.bold());
    for route in storefront.table.routes() {
        let kind = match &route.content {
            Content::Landing(_) => "landing",
            Content::Heading(_) => "heading",
        };
        println!(
            "  {} {:<12} {}",
            format!("{:<10}", route.path).cyan(),
            route.name,
            kind.dimmed()
        );
    }

    Ok(())
}
