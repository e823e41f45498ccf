//! Development backend entry point

use std::sync::Arc;

use fwconsole_devapi::config::DevConfig;
use fwconsole_devapi::repository::MemoryCatalog;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DevConfig::from_env()?;
    console_logger::init_logger("fwconsole-devapi", config.log_level)?;

    info!("starting with seeded in-memory catalog");
    let catalog = Arc::new(MemoryCatalog::seeded());
    fwconsole_devapi::serve(config.addr, fwconsole_devapi::app(catalog, config.dist)).await?;
    Ok(())
}
