//! Facade crate for the toolkit's shared modules and feature slices.
//! Re-exports domain/kernel primitives, the catalog and the views.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! Call [`init`] once at startup with the registry the app will serve.

pub use iet_catalog as catalog;
pub use iet_domain as domain;
pub use iet_kernel as kernel;
pub use iet_landing as landing;

use iet_catalog::Registry;
use tracing::{info, warn};

/// Registry counts reported at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub sections: usize,
    pub routes: usize,
    pub prefix_collisions: usize,
}

/// Logs what the registry serves and flags ambiguous url prefixes.
///
/// Collisions are only reported; `section_by_url` keeps resolving them by registry order.
pub fn init(registry: &Registry) -> CatalogSummary {
    let collisions = registry.prefix_collisions();

    for collision in &collisions {
        warn!(
            prefix = collision.prefix.url,
            shadowed = collision.shadowed.url,
            cross_section = collision.crosses_sections(),
            "Route url is a prefix of another route; section lookup resolves it by registry order"
        );
    }

    let summary = CatalogSummary {
        sections: registry.len(),
        routes: registry.all_routes().len(),
        prefix_collisions: collisions.len(),
    };

    info!(sections = summary.sections, routes = summary.routes, "Catalog initialized");
    summary
}
