mod domain;
mod clients;

mod app_system;
mod session;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod inventory_actor;

use anyhow::{anyhow, Context};
use chrono::Local;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, ShopConfig, ShopSystem};
use crate::session::{Console, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ShopConfig::load().context("Failed to load configuration")?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(initial_stock = config.initial_stock, "Starting shop floor");

    // Create the system (starts the inventory actors)
    let system = ShopSystem::new(&config);

    let span = tracing::info_span!("catalog_setup");
    system
        .stock_default_catalog(Local::now().date_naive())
        .instrument(span)
        .await
        .context("Failed to stock catalog")?;

    let console = Console::new(BufReader::new(stdin()), stdout());
    let mut session =
        Session::new(console, system.inventory_client.clone(), system.order_client.clone());
    session.run().await.context("Shopping session failed")?;

    // The session's client clones must go before the actors can stop
    drop(session);
    system.shutdown().await.map_err(|e| anyhow!(e))?;

    info!("Application completed successfully");
    Ok(())
}
