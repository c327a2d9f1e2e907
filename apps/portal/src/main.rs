#![windows_subsystem = "windows"]

use ahub::domain::config::PortalConfig;
use ahub::kernel::config::{DEFAULT_CONFIG, load_config};
use ahub_logger::Logger;
use ahub_portal::{AppContext, PortalApp};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config: PortalConfig =
        load_config(Some(DEFAULT_CONFIG)).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let registry = ahub::init(&config).map_err(|e| anyhow::anyhow!(e))?;
    let context = AppContext::from_registry(config, &registry)?;

    PortalApp::new().launch(context);
    Ok(())
}
