use iet::catalog::Registry;
use iet::domain::config::SiteConfig;
use std::time::Instant;

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Registry,
    pub config: SiteConfig,
    started: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Registry, config: SiteConfig) -> Self {
        Self { registry, config, started: Instant::now() }
    }

    /// Seconds since the state was built.
    #[must_use]
    pub fn uptime(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
