//! Tool placeholder pages

use super::Sidebar;
use dioxus::prelude::*;
use iet_catalog::Registry;
use iet_domain::NavItem;

/// Placeholder for a single tool route; the calculators themselves live elsewhere.
#[component]
pub fn ToolPage(registry: Registry, item: NavItem) -> Element {
    let section = registry.section_by_url(item.url).map(|section| section.title);
    let description = item.description.unwrap_or_default();
    let form = item.originating_form_name;

    rsx! {
        div { class: "container mx-auto px-4 py-8 flex gap-8",
            Sidebar { registry: registry, current: item.url.to_owned() }
            article { class: "tool-page flex-1",
                if let Some(section) = section {
                    p { class: "breadcrumb text-sm text-gray-500", "{section}" }
                }
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{item.title}" }
                p { class: "text-gray-600 mb-6", "{description}" }
                if item.has_children() {
                    ul { class: "sub-tools space-y-2 mb-6",
                        for child in item.items {
                            li { key: "{child.url}",
                                a { class: "tool-link text-indigo-600", href: "{child.url}", "{child.title}" }
                            }
                        }
                    }
                }
                p { class: "placeholder bg-yellow-50 border-l-4 border-yellow-400 p-4 text-gray-700",
                    "This calculator is not available in the web edition yet."
                }
                if let Some(form) = form {
                    p { class: "legacy-form mt-6 text-xs text-gray-400", "Legacy form: {form}" }
                }
            }
        }
    }
}

#[component]
pub fn NotFoundPage(registry: Registry, path: String) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-8 flex gap-8",
            Sidebar { registry: registry, current: path.clone() }
            article { class: "not-found flex-1",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Page not found" }
                p { class: "text-gray-600 mb-6", "Nothing is registered at {path}." }
                a { class: "text-indigo-600", href: "/", "Back to all tools" }
            }
        }
    }
}
