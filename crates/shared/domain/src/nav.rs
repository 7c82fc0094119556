//! Navigation tree models.
//!
//! Everything here is borrowed from `'static` data: the tree is declared once as
//! statics and never mutated, so the models are `Copy` and cheap to hand to views.

use crate::Icon;
use serde::Serialize;

/// A single routable tool (or sub-tool) of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub title: &'static str,
    /// Route path, unique across the whole tree.
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Name of the legacy desktop form this route replaces. Opaque, never interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_form_name: Option<&'static str>,
    /// First-level children. Empty means "no children"; nesting stops here.
    #[serde(skip_serializing_if = "<[NavItem]>::is_empty")]
    pub items: &'static [NavItem],
}

impl NavItem {
    #[must_use]
    pub const fn new(title: &'static str, url: &'static str) -> Self {
        Self {
            title,
            url,
            icon: None,
            description: None,
            originating_form_name: None,
            items: &[],
        }
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub const fn with_form(mut self, form: &'static str) -> Self {
        self.originating_form_name = Some(form);
        self
    }

    #[must_use]
    pub const fn with_items(mut self, items: &'static [Self]) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub const fn children(&self) -> &'static [Self] {
        self.items
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether this item's url, or one of its children's, is a string prefix of `path`.
    #[must_use]
    pub fn prefixes(&self, path: &str) -> bool {
        path.starts_with(self.url) || self.items.iter().any(|child| path.starts_with(child.url))
    }
}

/// A top-level grouping of related tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [NavItem],
}

impl NavSection {
    #[must_use]
    pub const fn new(title: &'static str, icon: Icon, items: &'static [NavItem]) -> Self {
        Self { title, icon, items }
    }

    /// Number of first-level tools in the section.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
