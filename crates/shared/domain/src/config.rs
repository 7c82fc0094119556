use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared by the server and the views.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub site: SiteInfo,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Served under `/assets`.
    pub assets_dir: PathBuf,
}

/// Page chrome and the static "about" card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    pub about_title: String,
    pub about_text: String,
    /// Outbound organization link, opened in a new browsing context.
    pub about_url: String,
    pub about_label: String,
}

/// Logging knobs; `RUST_LOG` still wins over `level` when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Explicit directives, e.g. `iet_server=debug,tower_http=info`.
    pub filter: Option<String>,
    pub console: bool,
    pub json: bool,
    /// Rolling log file directory; no file output when unset.
    pub dir: Option<PathBuf>,
    pub max_files: usize,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "IE Toolkit".to_owned(),
            tagline: "Industrial engineering calculators for work measurement, ergonomics and human factors."
                .to_owned(),
            about_title: "About".to_owned(),
            about_text: "Every tool here replaces a screen of the original desktop application. \
                         Pick a section to get started."
                .to_owned(),
            about_url: "https://www.iise.org".to_owned(),
            about_label: "Institute of Industrial and Systems Engineers".to_owned(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            json: false,
            dir: None,
            max_files: 10,
        }
    }
}
