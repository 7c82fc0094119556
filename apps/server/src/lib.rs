//! # IE Toolkit Server
//!
//! Serves the catalog over HTTP: the landing grid at `/`, one page per registered route,
//! and `/health`. Pages are rendered on the server with Dioxus SSR.
//!
//! ## Example
//! ```no_run
//! use iet_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;
mod state;

pub use crate::state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use iet::catalog::Registry;
use iet::domain::config::SiteConfig;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
    registry: Registry,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Serve another catalog than the built-in one.
    pub const fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Consumes the builder and prepares the application state.
    ///
    /// Reports the catalog (and any ambiguous url prefixes) to the log.
    ///
    /// # Errors
    /// Returns an error if the catalog is empty, fails [`Registry::validate`] (duplicate
    /// or relative urls would make route registration panic), or claims a path the
    /// server serves itself (`/`, `/health`, `/assets`).
    pub fn build(self) -> Result<Server> {
        if self.registry.is_empty() {
            anyhow::bail!("Catalog has no sections");
        }

        self.registry.validate().context("Catalog cannot be served")?;

        let routes = self.registry.all_routes();
        if let Some(item) = routes.iter().find(|item| router::is_reserved(item.url)) {
            anyhow::bail!("Route '{}' ({}) clashes with a built-in server path", item.url, item.title);
        }

        let assets = &self.cfg.server.assets_dir;
        if !assets.is_dir() {
            warn!(path = %assets.display(), "Assets directory not found, /assets will return 404");
        }

        let summary = iet::init(&self.registry);
        info!(
            address = %SocketAddr::new(self.cfg.server.address, self.cfg.server.port),
            routes = summary.routes,
            "Initializing server"
        );

        Ok(Server { state: AppState::new(self.registry, self.cfg) })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The router with state applied; handy for driving the app without a socket.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
