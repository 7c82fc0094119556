//! Kernel utilities shared across the apps.
//! Keep this crate lightweight; today it only owns layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use iet_kernel::config::load_config;
//! use iet_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("config/site")).unwrap_or_default();
//! ```
pub mod config;

pub use iet_domain as domain;
