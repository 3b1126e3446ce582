//! Headless resolve command: print the screen a path renders

use crate::config::CliConfigLoader;
use anyhow::Result;
use ipsum_core::render::render_screen;
use ipsum_core::Storefront;
use tracing::info;

/// Navigate to `path` and print the plain-text screen
///
/// A path with no route still succeeds and prints the not-found screen.
pub async fn resolve_command(config_loader: CliConfigLoader, path: String) -> Result<()> {
    info!("Resolving {}", path);

    let config = config_loader.load().await?;
    let storefront = Storefront::from_config(&config)?;

    let mut router = storefront.router();
    router.navigate(path);

    for line in render_screen(&storefront, &router.outlet()) {
        println!("{}", line);
    }

    Ok(())
}
