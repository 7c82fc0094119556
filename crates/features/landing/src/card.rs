use iet_domain::{Icon, NavItem, NavSection};

/// How many tool links a section card lists before collapsing the rest.
pub const VISIBLE_TOOLS: usize = 4;

/// What a section card shows, computed from the section alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCardModel {
    pub title: &'static str,
    pub icon: Icon,
    pub tool_count: usize,
    /// The first [`VISIBLE_TOOLS`] items.
    pub links: &'static [NavItem],
    /// Items left out of `links`; `None` when everything fits.
    pub overflow: Option<usize>,
}

impl SectionCardModel {
    #[must_use]
    pub fn new(section: &NavSection) -> Self {
        let tool_count = section.items.len();
        let shown = tool_count.min(VISIBLE_TOOLS);

        Self {
            title: section.title,
            icon: section.icon,
            tool_count,
            links: &section.items[..shown],
            overflow: (tool_count > VISIBLE_TOOLS).then(|| tool_count - VISIBLE_TOOLS),
        }
    }

    #[must_use]
    pub fn tool_count_label(&self) -> String {
        format!("{} tools available", self.tool_count)
    }

    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|more| format!("+{more} more..."))
    }
}
