//! Section navigation

use dioxus::prelude::*;
use iet_catalog::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SidebarEntry {
    title: &'static str,
    href: &'static str,
    class: &'static str,
    active: bool,
}

/// Section list with the section owning `current` highlighted.
///
/// Ownership comes from [`Registry::section_by_url`]; when nothing owns the path the
/// list renders without a highlight.
#[component]
pub fn Sidebar(registry: Registry, current: String) -> Element {
    let active = registry.section_by_url(&current).map(|section| section.title);

    let entries: Vec<SidebarEntry> = registry
        .sections()
        .iter()
        .map(|section| {
            let is_active = active == Some(section.title);
            SidebarEntry {
                title: section.title,
                href: section.items.first().map_or("/", |item| item.url),
                class: if is_active {
                    "sidebar-link active block px-3 py-2 rounded bg-indigo-100 text-indigo-900"
                } else {
                    "sidebar-link block px-3 py-2 rounded text-gray-600 hover:bg-gray-100"
                },
                active: is_active,
            }
        })
        .collect();

    rsx! {
        nav { class: "sidebar w-64 shrink-0",
            a { class: "block mb-4 font-bold text-gray-900", href: "/", "All tools" }
            ul { class: "space-y-1",
                for entry in entries {
                    li { key: "{entry.title}",
                        a { class: entry.class, href: entry.href, "data-active": "{entry.active}", "{entry.title}" }
                    }
                }
            }
        }
    }
}
