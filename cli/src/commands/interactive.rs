//! Interactive mode command

use crate::config::CliConfigLoader;
use crate::interactive::run_storefront;
use anyhow::Result;
use ipsum_core::Storefront;
use tracing::debug;

/// Start the interactive storefront
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!("Using configuration: {:?}", config);

    let storefront = Storefront::from_config(&config)?;
    run_storefront(storefront).await
}
