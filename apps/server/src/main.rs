use anyhow::Context;
use iet::domain::config::SiteConfig;
use iet::kernel::config::{DEFAULT_CONFIG_PATH, load_config};
use iet_logger::Logger;
use iet_server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional first argument: config file path (extension optional).
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());

    let cfg: SiteConfig =
        load_config(Some(&path)).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.log)?;
    info!(path = %path, "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}
