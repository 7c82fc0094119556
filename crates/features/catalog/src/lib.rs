//! # Catalog
//!
//! The navigation registry of the toolkit: sections → tools → sub-tools.
//!
//! The tree is `'static` data declared in [`data`]. A [`Registry`] is a `Copy` handle over
//! a slice of sections; it is built once and handed by value to whoever renders or routes.
//! Nothing mutates it after construction.
//!
//! ## Example
//!
//! ```rust
//! use iet_catalog::Registry;
//!
//! let registry = Registry::builtin();
//! let section = registry.section_by_url("/time-study/observations").unwrap();
//! assert_eq!(section.title, "Time Study");
//! assert!(registry.section_by_url("/nonexistent").is_none());
//! ```

pub mod data;
mod error;
mod validate;

pub use crate::error::CatalogError;
pub use crate::validate::PrefixCollision;
pub use iet_domain::{Icon, NavItem, NavSection};

/// Read-only view over an ordered list of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    sections: &'static [NavSection],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Wraps an arbitrary section list (fixtures, alternative catalogs).
    #[must_use]
    pub const fn new(sections: &'static [NavSection]) -> Self {
        Self { sections }
    }

    /// The toolkit's own catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(&data::SECTIONS)
    }

    #[must_use]
    pub const fn sections(&self) -> &'static [NavSection] {
        self.sections
    }

    /// Number of sections.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every tool in document order: section by section, each item followed
    /// immediately by its children.
    #[must_use]
    pub fn all_routes(&self) -> Vec<&'static NavItem> {
        self.routes().map(|(_, item)| item).collect()
    }

    /// The first section owning an item (or an item's child) whose url is a prefix of `url`.
    ///
    /// Matching is a plain string prefix test and the first hit in registry order wins;
    /// a longer, more specific prefix in a later section never takes precedence.
    /// See [`Registry::prefix_collisions`] for the pairs where that matters.
    #[must_use]
    pub fn section_by_url(&self, url: &str) -> Option<&'static NavSection> {
        self.sections.iter().find(|section| section.items.iter().any(|item| item.prefixes(url)))
    }

    /// Exact route lookup.
    #[must_use]
    pub fn find_route(&self, url: &str) -> Option<&'static NavItem> {
        self.routes().map(|(_, item)| item).find(|item| item.url == url)
    }

    /// Routes paired with their owning section, in [`Registry::all_routes`] order.
    pub(crate) fn routes(
        &self,
    ) -> impl Iterator<Item = (&'static NavSection, &'static NavItem)> + 'static {
        let sections = self.sections;
        sections.iter().flat_map(|section| {
            section
                .items
                .iter()
                .flat_map(|item| std::iter::once(item).chain(item.items.iter()))
                .map(move |item| (section, item))
        })
    }
}

/// [`Registry::all_routes`] over the built-in catalog.
#[must_use]
pub fn all_routes() -> Vec<&'static NavItem> {
    Registry::builtin().all_routes()
}

/// [`Registry::section_by_url`] over the built-in catalog.
#[must_use]
pub fn section_by_url(url: &str) -> Option<&'static NavSection> {
    Registry::builtin().section_by_url(url)
}
