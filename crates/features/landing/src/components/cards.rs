//! Card components for the landing grid

use crate::card::SectionCardModel;
use dioxus::prelude::*;
use iet_domain::config::SiteInfo;
use iet_domain::{Icon, NavSection};

/// Renders an icon tag as a `data-icon` hook plus a text fallback.
#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    let key = icon.key();
    let glyph = icon.glyph();

    rsx! {
        span { class: "icon text-3xl", "data-icon": key, "aria-hidden": "true", "{glyph}" }
    }
}

/// One section: icon, title, tool count, first tools as links, overflow count.
#[component]
pub fn SectionCard(section: NavSection) -> Element {
    let card = SectionCardModel::new(&section);
    let count = card.tool_count_label();
    let overflow = card.overflow_label();

    rsx! {
        div { class: "section-card bg-white rounded-xl shadow-lg p-6", "data-section": card.title,
            div { class: "flex items-center mb-4",
                IconGlyph { icon: card.icon }
                h2 { class: "ml-3 text-xl font-semibold text-gray-900", "{card.title}" }
            }
            p { class: "tool-count text-sm text-gray-500 mb-3", "{count}" }
            ul { class: "space-y-2",
                for item in card.links {
                    li { key: "{item.url}",
                        a {
                            class: "tool-link text-indigo-600 hover:text-indigo-800",
                            href: "{item.url}",
                            "{item.title}"
                        }
                    }
                }
            }
            if let Some(label) = overflow {
                p { class: "overflow-label mt-3 text-sm text-gray-400", "{label}" }
            }
        }
    }
}

/// The static informational card with the outbound organization link.
#[component]
pub fn AboutCard(site: SiteInfo) -> Element {
    rsx! {
        div { class: "about-card bg-indigo-50 rounded-xl p-6",
            div { class: "flex items-center mb-4",
                IconGlyph { icon: Icon::Info }
                h2 { class: "ml-3 text-xl font-semibold text-gray-900", "{site.about_title}" }
            }
            p { class: "text-gray-600 mb-4", "{site.about_text}" }
            a {
                class: "external-link text-indigo-600 hover:text-indigo-800",
                href: "{site.about_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{site.about_label}"
            }
        }
    }
}
