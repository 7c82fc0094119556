//! Landing page

use super::{AboutCard, SectionCard};
use dioxus::prelude::*;
use iet_catalog::Registry;
use iet_domain::config::SiteInfo;

#[component]
pub fn LandingPage(registry: Registry, site: SiteInfo) -> Element {
    rsx! {
        div {
            // Hero
            header { class: "bg-indigo-900 text-white",
                div { class: "container mx-auto px-4 py-12",
                    h1 { class: "text-4xl font-bold mb-2", "{site.title}" }
                    p { class: "text-lg text-indigo-200", "{site.tagline}" }
                }
            }

            // Sections
            main { class: "container mx-auto px-4 py-10",
                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for section in registry.sections() {
                        SectionCard { key: "{section.title}", section: *section }
                    }
                    AboutCard { site: site.clone() }
                }
            }
        }
    }
}
