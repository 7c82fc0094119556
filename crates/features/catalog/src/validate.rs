//! Checks over the static data. Run from tests; lookups never depend on them.

use crate::{CatalogError, NavItem, NavSection, Registry};
use fxhash::FxHashSet;

/// Two routes where one url is a string prefix of the other and the longer one is not
/// a child of the shorter.
///
/// [`Registry::section_by_url`] resolves such inputs by registry order alone, so a
/// collision is a question about intended precedence, not something the lookup fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixCollision {
    pub prefix: &'static NavItem,
    pub prefix_section: &'static NavSection,
    pub shadowed: &'static NavItem,
    pub shadowed_section: &'static NavSection,
}

impl PrefixCollision {
    /// Whether the colliding routes live in different sections, i.e. whether
    /// `section_by_url` can return the wrong section rather than just the right one early.
    #[must_use]
    pub fn crosses_sections(&self) -> bool {
        !std::ptr::eq(self.prefix_section, self.shadowed_section)
    }
}

impl Registry {
    /// Verifies the registry invariants: non-empty sections, absolute and unique urls,
    /// children one level deep.
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] found, in document order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = FxHashSet::default();

        for section in self.sections() {
            if section.is_empty() {
                return Err(CatalogError::EmptySection { section: section.title, context: None });
            }

            for item in section.items {
                for child in item.items {
                    if child.has_children() {
                        return Err(CatalogError::NestedTooDeep {
                            url: child.url,
                            context: Some(format!("under {}", item.url).into()),
                        });
                    }
                }
            }
        }

        for (section, item) in self.routes() {
            if !item.url.starts_with('/') {
                return Err(CatalogError::InvalidUrl {
                    url: item.url,
                    context: Some(format!("section '{}'", section.title).into()),
                });
            }
            if !seen.insert(item.url) {
                return Err(CatalogError::DuplicateUrl {
                    url: item.url,
                    context: Some(format!("section '{}'", section.title).into()),
                });
            }
        }

        Ok(())
    }

    /// Lists every [`PrefixCollision`] in the registry, in document order of the prefix.
    #[must_use]
    pub fn prefix_collisions(&self) -> Vec<PrefixCollision> {
        let routes: Vec<_> = self.routes().collect();
        let mut found = Vec::new();

        for (i, &(prefix_section, prefix)) in routes.iter().enumerate() {
            for (j, &(shadowed_section, shadowed)) in routes.iter().enumerate() {
                if i == j || !shadowed.url.starts_with(prefix.url) {
                    continue;
                }
                if prefix.items.iter().any(|child| std::ptr::eq(child, shadowed)) {
                    continue;
                }
                found.push(PrefixCollision { prefix, prefix_section, shadowed, shadowed_section });
            }
        }

        found
    }
}
